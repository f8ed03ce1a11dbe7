use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use log::debug;

use crate::BenchReportError;
use crate::record::{BenchRecord, REPORT_HEADER};

/// Where the binary writes, relative to the invocation directory.
pub const REPORT_FILE: &str = "test/benchmarks/parser_benchmark_report.csv";

/// Appends one row, writing the header first when the file is new or empty.
/// The file is never rewritten or truncated; callers own exclusive access.
pub fn append_record(path: &Path, record: &BenchRecord) -> Result<(), BenchReportError> {
    let mut file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| BenchReportError::io(format!("cannot open {}: {e}", path.display())))?;
    let len = file
        .metadata()
        .map_err(|e| BenchReportError::io(e.to_string()))?
        .len();
    if len == 0 {
        debug!("starting new report file {}", path.display());
        writeln!(file, "{REPORT_HEADER}").map_err(|e| BenchReportError::io(e.to_string()))?;
    }
    writeln!(file, "{}", record.csv_line()).map_err(|e| BenchReportError::io(e.to_string()))
}

/// Reads the trend history back. A missing or empty file is an empty history.
pub fn load_records(path: &Path) -> Result<Vec<BenchRecord>, BenchReportError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let data = fs::read_to_string(path).map_err(|e| BenchReportError::io(e.to_string()))?;
    data.lines().skip(1).map(parse_line).collect()
}

fn parse_line(line: &str) -> Result<BenchRecord, BenchReportError> {
    let fields: Vec<&str> = line.splitn(5, ',').collect();
    if fields.len() != 5 {
        return Err(BenchReportError::parse(format!(
            "report line has {} fields, expected 5: {line}",
            fields.len()
        )));
    }
    let timestamp = fields[0]
        .parse::<u64>()
        .map_err(|e| BenchReportError::parse(format!("bad timestamp {}: {e}", fields[0])))?;
    Ok(BenchRecord {
        timestamp,
        commit: fields[1].to_string(),
        mean: fields[2].to_string(),
        lower_bound: fields[3].to_string(),
        upper_bound: fields[4].to_string(),
    })
}
