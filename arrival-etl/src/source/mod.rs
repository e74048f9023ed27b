//! Upstream arrival feed documents.
//!
//! Each source object holds one snapshot of the realtime arrival feed: a
//! JSON object whose `realtimeArrivalList` array carries the events. The
//! DTOs here mirror that JSON; [`ArrivalEvent`] is the typed form the
//! transformer works on.

mod event;
mod types;

pub use event::{ArrivalEvent, FieldValue, MissingField};
pub use types::{ArrivalDocument, RawArrivalEvent};
