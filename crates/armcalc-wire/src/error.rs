//! Error types for the wire layer

use thiserror::Error;

/// Errors that can occur while translating to or from the service's wire
/// format
#[derive(Debug, Error)]
pub enum WireError {
    #[error("Invalid WCF date string: '{0}'. Expected '/Date(<ms>[-<offset>])/'")]
    InvalidWcfDate(String),

    #[error("Invalid search date string: '{0}'. Expected 8 digits (YYYYMMDD)")]
    InvalidSearchDate(String),

    #[error("Calendar date out of range: {year:04}-{month:02}-{day:02}")]
    DateOutOfRange { year: i32, month: u32, day: u32 },

    #[error("Millisecond timestamp out of range: {0}")]
    TimestampOutOfRange(i64),

    #[error("Field '{field}' does not hold a timestamp: {value}")]
    NotATimestamp { field: String, value: String },

    #[error("Expected a JSON {expected} in the response body")]
    UnexpectedShape { expected: &'static str },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
