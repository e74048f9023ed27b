//! Record filtering, mapping and batch translation.
//!
//! This is the only part of the pipeline with decision logic. Everything
//! in here is synchronous and pure: the output for a batch depends on
//! nothing but the batch.

mod batch;
mod encode;
mod error;
mod mapper;

pub use batch::{RecordPolicy, Translation, Translator, translate};
pub use encode::encode_line;
pub use error::{RecordError, TranslateError};
pub use mapper::{
    STATION_SUFFIX, StationArrivalRecord, direction_tag, is_accepted, line_label, split_timestamp,
    transform, weekday_tag,
};
