use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchReportError {
    #[error("parse error: {0}")]
    Parse(String),
    #[error("lookup error: {0}")]
    Lookup(String),
    #[error("argument error: {0}")]
    Argument(String),
    #[error("io error: {0}")]
    Io(String),
}

impl BenchReportError {
    pub fn parse<T: Into<String>>(msg: T) -> Self {
        BenchReportError::Parse(msg.into())
    }

    pub fn lookup<T: Into<String>>(msg: T) -> Self {
        BenchReportError::Lookup(msg.into())
    }

    pub fn argument<T: Into<String>>(msg: T) -> Self {
        BenchReportError::Argument(msg.into())
    }

    pub fn io<T: Into<String>>(msg: T) -> Self {
        BenchReportError::Io(msg.into())
    }
}
