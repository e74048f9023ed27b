//! Transformation error types.

use crate::domain::{InvalidTimestamp, UnknownLineCode};
use crate::source::MissingField;

/// Why a single event could not be turned into an output record.
///
/// Rejection by the arrival-code filter is not an error and never appears
/// here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordError {
    /// A required field is absent from the record
    #[error("malformed event: {0}")]
    MalformedEvent(#[from] MissingField),

    /// A field that is used as text holds some other JSON value
    #[error("{field}: expected a string, got {value}")]
    NotText { field: &'static str, value: String },

    /// The line id has no entry in the line table
    #[error("subwayId: {0}")]
    UnknownLineCode(#[from] UnknownLineCode),

    /// The reception timestamp does not match `YYYY-MM-DD HH:MM:SS`
    #[error("recptnDt: {0}")]
    InvalidTimestamp(#[from] InvalidTimestamp),

    /// The record could not be written as JSON
    #[error("encode failed: {0}")]
    Encode(String),
}

impl RecordError {
    /// Upstream JSON key of the offending field, if there is one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            RecordError::MalformedEvent(e) => Some(e.field),
            RecordError::NotText { field, .. } => Some(*field),
            RecordError::UnknownLineCode(_) => Some("subwayId"),
            RecordError::InvalidTimestamp(_) => Some("recptnDt"),
            RecordError::Encode(_) => None,
        }
    }

    /// The offending value, if one was present.
    pub fn value(&self) -> Option<&str> {
        match self {
            RecordError::NotText { value, .. } => Some(value.as_str()),
            RecordError::UnknownLineCode(e) => Some(e.code()),
            RecordError::InvalidTimestamp(e) => Some(e.value()),
            RecordError::MalformedEvent(_) | RecordError::Encode(_) => None,
        }
    }
}

/// A batch translation stopped at the event at `index`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("event {index}: {source}")]
pub struct TranslateError {
    /// Position of the event in the source array.
    pub index: usize,
    pub source: RecordError,
}
