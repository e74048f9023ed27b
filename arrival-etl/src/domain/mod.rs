//! Domain types for the arrival transformer.
//!
//! Upstream sends every categorical value as a string code. The types here
//! are what those codes become once they cross the boundary, so the
//! transformation logic works on typed values instead of comparing string
//! literals at each decision point.

mod direction;
mod line;
mod status;
mod time;
mod weekday;

pub use direction::DirectionTag;
pub use line::{LineCodeTable, LineLabel, UnknownLineCode};
pub use status::ArrivalStatus;
pub use time::{DATE_FORMAT, InvalidTimestamp, RECEIVED_AT_FORMAT, ReceivedAt, TIME_FORMAT};
pub use weekday::WeekdayTag;
