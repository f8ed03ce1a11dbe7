use bench_report::{BenchReportError, parse_document};

#[test]
fn parses_nested_elements_and_attributes() {
    let xml = r#"<run name="llama">
  <case name="first" kind="benchmark">
    <mean value="1.5"/>
  </case>
  <case name="second"/>
</run>"#;
    let root = parse_document(xml.as_bytes()).expect("parse");
    assert_eq!(root.tag, "run");
    assert_eq!(root.attribute("name"), Some("llama"));
    assert_eq!(root.children.len(), 2);
    let first = root.child_named("first").expect("first case");
    assert_eq!(first.attribute("kind"), Some("benchmark"));
    let mean = first.child_tagged("mean").expect("mean");
    assert_eq!(mean.attribute("value"), Some("1.5"));
    assert_eq!(mean.attribute("lowerBound"), None);
}

#[test]
fn child_lookups_return_first_match_only() {
    let xml = r#"<run><case name="dup" v="1"/><case name="dup" v="2"/></run>"#;
    let root = parse_document(xml.as_bytes()).expect("parse");
    let hit = root.child_named("dup").expect("dup");
    assert_eq!(hit.attribute("v"), Some("1"));
    assert_eq!(root.child_tagged("case").expect("case").attribute("v"), Some("1"));
    assert!(root.child_named("absent").is_none());
    assert!(root.child_tagged("absent").is_none());
}

#[test]
fn skips_declaration_and_comments_before_root() {
    let xml = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<!-- nightly run -->\n<run/>";
    let root = parse_document(xml.as_bytes()).expect("parse");
    assert_eq!(root.tag, "run");
    assert!(root.children.is_empty());
}

#[test]
fn unclosed_element_is_a_parse_error() {
    let err = parse_document("<run><case>".as_bytes()).unwrap_err();
    assert!(matches!(err, BenchReportError::Parse(_)));
}

#[test]
fn mismatched_closing_tag_is_a_parse_error() {
    let err = parse_document("<run><case></run></case>".as_bytes()).unwrap_err();
    assert!(matches!(err, BenchReportError::Parse(_)));
}

#[test]
fn empty_input_is_a_parse_error() {
    let err = parse_document("".as_bytes()).unwrap_err();
    assert!(matches!(err, BenchReportError::Parse(_)));
}
