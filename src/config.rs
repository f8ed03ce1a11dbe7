use std::path::PathBuf;

use crate::BenchReportError;
use crate::report_log::REPORT_FILE;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunConfig {
    pub commit: String,
    pub report_path: PathBuf,
}

impl RunConfig {
    /// Expects the program name in `args[0]` and the commit hash as the one
    /// positional argument.
    pub fn from_args(args: &[&str]) -> Result<Self, BenchReportError> {
        let mut commit = None;
        for arg in args.iter().skip(1) {
            if commit.is_some() {
                return Err(BenchReportError::argument(format!(
                    "unexpected argument {arg}"
                )));
            }
            commit = Some(arg.to_string());
        }
        let commit =
            commit.ok_or_else(|| BenchReportError::argument("missing commit hash argument"))?;
        Ok(Self {
            commit,
            report_path: PathBuf::from(REPORT_FILE),
        })
    }
}
