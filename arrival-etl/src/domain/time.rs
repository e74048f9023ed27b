//! Reception timestamps.
//!
//! Upstream stamps each arrival event with a naive local datetime in
//! `YYYY-MM-DD HH:MM:SS` form. Output splits it back into a date and a
//! time-of-day, each in its own fixed format.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use super::WeekdayTag;

/// Format of the upstream `recptnDt` field.
pub const RECEIVED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of the output `arriveDate` field.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format of the output `arriveTime` field.
pub const TIME_FORMAT: &str = "%H:%M:%S";

/// Error returned when a timestamp does not match [`RECEIVED_AT_FORMAT`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: {reason}")]
pub struct InvalidTimestamp {
    value: String,
    reason: String,
}

impl InvalidTimestamp {
    /// For a timestamp field that holds some JSON value other than a string.
    pub(crate) fn not_text(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            reason: "not a string".to_string(),
        }
    }

    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// The moment an arrival event was received, as a naive local datetime.
///
/// # Examples
///
/// ```
/// use arrival_etl::domain::{ReceivedAt, WeekdayTag};
///
/// let at = ReceivedAt::parse("2023-06-26 08:15:00").unwrap();
/// assert_eq!(at.date_string(), "2023-06-26");
/// assert_eq!(at.time_string(), "08:15:00");
/// assert_eq!(at.weekday_tag(), WeekdayTag::Weekday);
///
/// assert!(ReceivedAt::parse("2023-06-26T08:15:00").is_err());
/// assert!(ReceivedAt::parse("2023-06-26").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReceivedAt(NaiveDateTime);

impl ReceivedAt {
    /// Parse a `YYYY-MM-DD HH:MM:SS` string. Seconds run 00 to 59: chrono
    /// reads `:60` as a leap second, which is rejected here.
    pub fn parse(s: &str) -> Result<Self, InvalidTimestamp> {
        let datetime =
            NaiveDateTime::parse_from_str(s, RECEIVED_AT_FORMAT).map_err(|e| InvalidTimestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })?;

        if datetime.nanosecond() >= 1_000_000_000 {
            return Err(InvalidTimestamp {
                value: s.to_string(),
                reason: "second out of range".to_string(),
            });
        }

        Ok(ReceivedAt(datetime))
    }

    pub fn new(datetime: NaiveDateTime) -> Self {
        Self(datetime)
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    pub fn time(&self) -> NaiveTime {
        self.0.time()
    }

    /// Split into calendar date and time-of-day.
    pub fn split(&self) -> (NaiveDate, NaiveTime) {
        (self.date(), self.time())
    }

    pub fn weekday_tag(&self) -> WeekdayTag {
        WeekdayTag::of(&self.0)
    }

    /// The date as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.0.format(DATE_FORMAT).to_string()
    }

    /// The time of day as `HH:MM:SS`.
    pub fn time_string(&self) -> String {
        self.0.format(TIME_FORMAT).to_string()
    }
}

impl fmt::Debug for ReceivedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReceivedAt({})", self)
    }
}

impl fmt::Display for ReceivedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(RECEIVED_AT_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_split() {
        let at = ReceivedAt::parse("2023-06-26 08:15:00").unwrap();
        let (date, time) = at.split();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 6, 26).unwrap());
        assert_eq!(time, NaiveTime::from_hms_opt(8, 15, 0).unwrap());
    }

    #[test]
    fn midnight_and_last_second() {
        let at = ReceivedAt::parse("2023-12-31 00:00:00").unwrap();
        assert_eq!(at.time_string(), "00:00:00");

        let at = ReceivedAt::parse("2023-12-31 23:59:59").unwrap();
        assert_eq!(at.time_string(), "23:59:59");
        assert_eq!(at.date_string(), "2023-12-31");
    }

    #[test]
    fn leap_day() {
        let at = ReceivedAt::parse("2024-02-29 10:00:00").unwrap();
        assert_eq!(at.date_string(), "2024-02-29");
        assert!(ReceivedAt::parse("2023-02-29 10:00:00").is_err());
    }

    #[test]
    fn reject_malformed() {
        assert!(ReceivedAt::parse("").is_err());
        assert!(ReceivedAt::parse("2023-06-26").is_err());
        assert!(ReceivedAt::parse("08:15:00").is_err());
        assert!(ReceivedAt::parse("2023-06-26T08:15:00").is_err());
        assert!(ReceivedAt::parse("2023-06-26 08:15").is_err());
        assert!(ReceivedAt::parse("2023-13-01 08:15:00").is_err());
        assert!(ReceivedAt::parse("2023-06-26 25:00:00").is_err());
        assert!(ReceivedAt::parse("2023-06-26 08:15:00.123").is_err());
        assert!(ReceivedAt::parse("2023-06-26 08:15:60").is_err());
        assert!(ReceivedAt::parse("2016-12-31 23:59:60").is_err());
        assert!(ReceivedAt::parse("2023-06-26 08:15:61").is_err());
        assert!(ReceivedAt::parse("yesterday").is_err());
    }

    #[test]
    fn leap_second_keeps_value() {
        let err = ReceivedAt::parse("2016-12-31 23:59:60").unwrap_err();
        assert_eq!(err.value(), "2016-12-31 23:59:60");
        assert_eq!(
            err.to_string(),
            "invalid timestamp \"2016-12-31 23:59:60\": second out of range"
        );
    }

    #[test]
    fn not_text_reason() {
        let err = InvalidTimestamp::not_text("null");
        assert_eq!(err.value(), "null");
        assert_eq!(err.to_string(), "invalid timestamp \"null\": not a string");
    }

    #[test]
    fn error_keeps_value() {
        let err = ReceivedAt::parse("2023/06/26 08:15:00").unwrap_err();
        assert_eq!(err.value(), "2023/06/26 08:15:00");
        assert!(err.to_string().starts_with("invalid timestamp \"2023/06/26 08:15:00\""));
    }

    #[test]
    fn display_roundtrip() {
        let at = ReceivedAt::parse("2023-06-26 08:15:00").unwrap();
        assert_eq!(at.to_string(), "2023-06-26 08:15:00");
        assert_eq!(format!("{at:?}"), "ReceivedAt(2023-06-26 08:15:00)");
    }
}
