use std::fmt;

#[derive(Debug)]
pub enum AppError {
    NetworkError { msg: String },
    StatusError { msg: String },
    TimeoutError { msg: String },
    DecodeError { msg: String },
    ParseError { msg: String },
    CsvError { msg: String },
    StorageError { msg: String },
    ConfigError { msg: String },
    InvalidDateRange { msg: String },
}

pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    // Tag attached to the log event emitted when a request fails.
    pub fn category(&self) -> &'static str {
        match self {
            AppError::NetworkError { .. } => "network problem",
            AppError::StatusError { .. } => "unsuccessful status code",
            AppError::TimeoutError { .. } => "request timed out",
            AppError::DecodeError { .. } => "malformed response",
            AppError::ParseError { .. } => "parse failure",
            AppError::CsvError { .. } => "csv serialization",
            AppError::StorageError { .. } => "storage write",
            AppError::ConfigError { .. } => "configuration",
            AppError::InvalidDateRange { .. } => "invalid date range",
        }
    }
}

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::NetworkError { msg } => write!(f, "Network Error: '{}'", msg),
            AppError::StatusError { msg } => write!(f, "Status Code Error: '{}'", msg),
            AppError::TimeoutError { msg } => write!(f, "Timeout Error: '{}'", msg),
            AppError::DecodeError { msg } => write!(f, "Response Decoding Error: '{}'", msg),
            AppError::ParseError { msg } => write!(f, "Parse Error: '{}'", msg),
            AppError::CsvError { msg } => write!(f, "Csv Error: '{}'", msg),
            AppError::StorageError { msg } => write!(f, "Storage Error: '{}'", msg),
            AppError::ConfigError { msg } => write!(f, "Configuration Error: '{}'", msg),
            AppError::InvalidDateRange { msg } => write!(f, "Invalid Date Range: '{}'", msg),
        }
    }
}
