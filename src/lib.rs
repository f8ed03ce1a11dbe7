//! Parser benchmark trend logging for the llama test suite.
//! Pipe an XML test report into `write_parser_benchmark_to_csv` to extend the CSV history.

pub mod config;
pub mod errors;
pub mod extract;
pub mod record;
pub mod report_log;
pub mod xml;

pub use crate::config::RunConfig;
pub use crate::errors::BenchReportError;
pub use crate::extract::{MeanStats, extract_mean_stats};
pub use crate::record::{BenchRecord, REPORT_HEADER};
pub use crate::report_log::{REPORT_FILE, append_record, load_records};
pub use crate::xml::{XmlElement, parse_document};
