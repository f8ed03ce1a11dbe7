use crate::BenchReportError;
use crate::xml::XmlElement;

pub const TEST_CASE_NAME: &str = "LlamaParserBenchmark";
pub const BENCHMARK_NAME: &str = "parser";
const MEAN_TAG: &str = "mean";

/// Marker written in place of a statistic the report did not carry, so the
/// row shape stays stable for downstream plotting.
pub const MISSING_STAT: &str = "None";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeanStats {
    pub mean: String,
    pub lower_bound: String,
    pub upper_bound: String,
}

/// Walks root -> test case -> benchmark -> `<mean>` and pulls the three
/// statistics. First match wins at every level; absence at any level is fatal.
pub fn extract_mean_stats(root: &XmlElement) -> Result<MeanStats, BenchReportError> {
    let test_case = root.child_named(TEST_CASE_NAME).ok_or_else(|| {
        BenchReportError::lookup(format!("test case {TEST_CASE_NAME} not found in report"))
    })?;
    let benchmark = test_case.child_named(BENCHMARK_NAME).ok_or_else(|| {
        BenchReportError::lookup(format!(
            "benchmark {BENCHMARK_NAME} not found under {TEST_CASE_NAME}"
        ))
    })?;
    let mean = benchmark.child_tagged(MEAN_TAG).ok_or_else(|| {
        BenchReportError::lookup(format!(
            "no <{MEAN_TAG}> element under benchmark {BENCHMARK_NAME}"
        ))
    })?;
    Ok(MeanStats {
        mean: stat(mean, "value"),
        lower_bound: stat(mean, "lowerBound"),
        upper_bound: stat(mean, "upperBound"),
    })
}

fn stat(element: &XmlElement, key: &str) -> String {
    element
        .attribute(key)
        .map(str::to_string)
        .unwrap_or_else(|| MISSING_STAT.to_string())
}
