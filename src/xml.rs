use std::collections::HashMap;
use std::io::BufRead;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::BenchReportError;

/// One element of a parsed benchmark report: tag, attributes, nested elements.
/// Text content is not retained; the reports carry everything in attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct XmlElement {
    pub tag: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(|value| value.as_str())
    }

    /// First direct child whose `name` attribute equals `name`.
    pub fn child_named(&self, name: &str) -> Option<&XmlElement> {
        self.children
            .iter()
            .find(|child| child.attribute("name") == Some(name))
    }

    /// First direct child with the given tag.
    pub fn child_tagged(&self, tag: &str) -> Option<&XmlElement> {
        self.children.iter().find(|child| child.tag == tag)
    }
}

/// Parses a whole document and returns its root element.
pub fn parse_document<R: BufRead>(input: R) -> Result<XmlElement, BenchReportError> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| BenchReportError::parse(e.to_string()))?;
        match event {
            Event::Start(start) => {
                let start = start.into_owned();
                return parse_element(&mut reader, start, false);
            }
            Event::Empty(start) => {
                let start = start.into_owned();
                return parse_element(&mut reader, start, true);
            }
            Event::Eof => {
                return Err(BenchReportError::parse("document has no root element"));
            }
            _ => {}
        }
    }
}

fn parse_element<R: BufRead>(
    reader: &mut Reader<R>,
    start: BytesStart<'static>,
    self_closing: bool,
) -> Result<XmlElement, BenchReportError> {
    let tag_bytes = start.name().as_ref().to_vec();
    let mut element = XmlElement {
        tag: String::from_utf8_lossy(&tag_bytes).to_string(),
        attributes: collect_attributes(&start)?,
        children: Vec::new(),
    };
    if self_closing {
        return Ok(element);
    }
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| BenchReportError::parse(e.to_string()))?;
        match event {
            Event::Start(child) => {
                let child = child.into_owned();
                element.children.push(parse_element(reader, child, false)?);
            }
            Event::Empty(child) => {
                let child = child.into_owned();
                element.children.push(parse_element(reader, child, true)?);
            }
            Event::End(end) => {
                if end.name().as_ref() != tag_bytes.as_slice() {
                    return Err(BenchReportError::parse(format!(
                        "unexpected closing tag </{}> inside <{}>",
                        String::from_utf8_lossy(end.name().as_ref()),
                        element.tag
                    )));
                }
                return Ok(element);
            }
            Event::Eof => {
                return Err(BenchReportError::parse(format!(
                    "unexpected end of input inside <{}>",
                    element.tag
                )));
            }
            _ => {}
        }
    }
}

fn collect_attributes(
    start: &BytesStart<'_>,
) -> Result<HashMap<String, String>, BenchReportError> {
    let mut attributes = HashMap::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| BenchReportError::parse(e.to_string()))?;
        attributes.insert(
            String::from_utf8_lossy(attr.key.as_ref()).to_string(),
            String::from_utf8_lossy(attr.value.as_ref()).to_string(),
        );
    }
    Ok(attributes)
}
