//! Boundary conversion from raw feed records to typed events.

use std::fmt;

use serde_json::Value;

use crate::domain::{ArrivalStatus, DirectionTag};

use super::types::RawArrivalEvent;

/// A required field was absent from a feed record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required field: {field}")]
pub struct MissingField {
    /// Upstream JSON key.
    pub field: &'static str,
}

/// A field that was present in a record, as a string or as some other
/// JSON value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Other(Value),
}

impl FieldValue {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s.clone()),
            other => FieldValue::Other(other.clone()),
        }
    }

    /// The string, if the value is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Other(_) => None,
        }
    }
}

/// Strings print as themselves, anything else as its JSON text.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

/// One arrival event with its categorical codes resolved.
///
/// Station name, line id and timestamp stay as received: they are only
/// interpreted for accepted events, so a rejected event with an odd line
/// id or a garbled timestamp is dropped rather than reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrivalEvent {
    pub status: ArrivalStatus,
    pub station_name: FieldValue,
    pub direction: DirectionTag,
    pub line_id: FieldValue,
    pub received_at: FieldValue,
}

impl ArrivalEvent {
    /// Convert a raw record.
    ///
    /// `arvlCd`, `statnNm`, `subwayId` and `recptnDt` must be present; any
    /// value counts, `null` included. An `arvlCd` that is not the string
    /// "1" is an unconfirmed arrival. `updnLine` may be absent, and
    /// anything but the string "1" reads as inbound.
    pub fn from_raw(raw: &RawArrivalEvent) -> Result<Self, MissingField> {
        let arrival_code = require(&raw.arvl_cd, "arvlCd")?;
        let station_name = require(&raw.statn_nm, "statnNm")?;
        let line_id = require(&raw.subway_id, "subwayId")?;
        let received_at = require(&raw.recptn_dt, "recptnDt")?;

        let status = match arrival_code.as_str() {
            Some(code) => ArrivalStatus::from_code(code),
            None => ArrivalStatus::Other,
        };

        Ok(Self {
            status,
            station_name: FieldValue::from_json(station_name),
            direction: DirectionTag::from_code(raw.updn_line.as_ref().and_then(Value::as_str)),
            line_id: FieldValue::from_json(line_id),
            received_at: FieldValue::from_json(received_at),
        })
    }
}

fn require<'a>(value: &'a Option<Value>, field: &'static str) -> Result<&'a Value, MissingField> {
    value.as_ref().ok_or(MissingField { field })
}
