//! Arrival feed DTOs.
//!
//! These map directly to the upstream JSON. Event fields are kept as raw
//! JSON values: presence is checked at conversion time, per event, and a
//! null or non-string value is a property of that event rather than a
//! reason to reject the whole document.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Body of one source object.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDocument {
    /// Arrival events, in feed order.
    pub realtime_arrival_list: Vec<RawArrivalEvent>,
}

impl ArrivalDocument {
    /// Decode an object body.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// One element of `realtimeArrivalList`. Unlisted keys are ignored.
///
/// `None` means the key is absent. A key present with `null` decodes as
/// `Some(Value::Null)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct RawArrivalEvent {
    /// Arrival status code; "1" is a confirmed arrival.
    #[serde(rename = "arvlCd", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub arvl_cd: Option<Value>,

    /// Station name, without the station suffix.
    #[serde(rename = "statnNm", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub statn_nm: Option<Value>,

    /// Direction code; "1" is outbound.
    #[serde(rename = "updnLine", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub updn_line: Option<Value>,

    /// Line id, e.g. "1002".
    #[serde(rename = "subwayId", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub subway_id: Option<Value>,

    /// Reception time, `YYYY-MM-DD HH:MM:SS`.
    #[serde(rename = "recptnDt", default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub recptn_dt: Option<Value>,
}

/// Any value for a key that is there, `null` included. Absent keys fall
/// back to `default`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}
