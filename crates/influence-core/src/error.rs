use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read responses file {path}: {source}")]
    ResponsesFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse responses file: {0}")]
    ResponsesFileParse(#[source] serde_yaml::Error),
}

/// Reasons the input-collection surface refuses a submitted form.
///
/// A form rejected here never reaches the ledger.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum IntakeError {
    #[error("required field '{0}' is missing")]
    MissingField(&'static str),

    #[error("mediaDate {date} is outside the collection window {start}..={end}")]
    DateOutsideWindow {
        date: NaiveDate,
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("{field} must be between 0.0 and 1.0, got {value}")]
    ScoreOutOfRange { field: &'static str, value: f64 },
}
