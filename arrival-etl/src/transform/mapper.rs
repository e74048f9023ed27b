//! Per-event filter and mapping.

use chrono::{NaiveDate, NaiveTime};
use serde::{Serialize, Serializer};

use crate::domain::{
    DATE_FORMAT, DirectionTag, InvalidTimestamp, LineCodeTable, LineLabel, ReceivedAt,
    TIME_FORMAT, UnknownLineCode, WeekdayTag,
};
use crate::source::{ArrivalEvent, FieldValue};

use super::error::RecordError;

/// Appended to every station name ("station").
pub const STATION_SUFFIX: &str = "역";

/// One output row, built from an accepted [`ArrivalEvent`].
///
/// Field order is the key order of the written JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationArrivalRecord {
    #[serde(rename = "stationNm")]
    pub station_name: String,

    #[serde(rename = "inOutTag")]
    pub direction: DirectionTag,

    #[serde(rename = "lineNum")]
    pub line: LineLabel,

    #[serde(rename = "weekTag")]
    pub weekday: WeekdayTag,

    #[serde(rename = "arriveTime", serialize_with = "serialize_time")]
    pub arrival_time: NaiveTime,

    #[serde(rename = "arriveDate", serialize_with = "serialize_date")]
    pub arrival_date: NaiveDate,
}

fn serialize_time<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&time.format(TIME_FORMAT))
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Whether the event is a confirmed arrival and belongs in the output.
pub fn is_accepted(event: &ArrivalEvent) -> bool {
    event.status.is_confirmed()
}

pub fn direction_tag(event: &ArrivalEvent) -> DirectionTag {
    event.direction
}

/// Resolve the event's line id through the [`LineCodeTable`]. A line id
/// that is not a string matches no entry.
pub fn line_label(event: &ArrivalEvent) -> Result<LineLabel, UnknownLineCode> {
    match &event.line_id {
        FieldValue::Text(code) => LineCodeTable::lookup(code),
        other => Err(UnknownLineCode::new(other.to_string())),
    }
}

pub fn weekday_tag(timestamp: &ReceivedAt) -> WeekdayTag {
    timestamp.weekday_tag()
}

/// Parse a `YYYY-MM-DD HH:MM:SS` timestamp into its date and time-of-day.
pub fn split_timestamp(timestamp: &str) -> Result<(NaiveDate, NaiveTime), InvalidTimestamp> {
    ReceivedAt::parse(timestamp).map(|at| at.split())
}

/// Map an event to its output record.
///
/// Does not apply the acceptance filter; callers check [`is_accepted`]
/// first. Fields are checked in output order: station name, then line id,
/// then timestamp. The first bad one is reported.
pub fn transform(event: &ArrivalEvent) -> Result<StationArrivalRecord, RecordError> {
    let station = event
        .station_name
        .as_text()
        .ok_or_else(|| RecordError::NotText {
            field: "statnNm",
            value: event.station_name.to_string(),
        })?;
    let line = line_label(event)?;
    let received_at = match &event.received_at {
        FieldValue::Text(s) => ReceivedAt::parse(s)?,
        other => return Err(InvalidTimestamp::not_text(other.to_string()).into()),
    };
    let (arrival_date, arrival_time) = received_at.split();

    Ok(StationArrivalRecord {
        station_name: format!("{station}{STATION_SUFFIX}"),
        direction: direction_tag(event),
        line,
        weekday: weekday_tag(&received_at),
        arrival_time,
        arrival_date,
    })
}
