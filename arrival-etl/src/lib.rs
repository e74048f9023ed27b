//! Realtime arrival feed transformer.
//!
//! Reads raw subway arrival snapshots from an object store, keeps the
//! confirmed arrivals, reshapes each into a flat reporting record and
//! writes the records back as newline-delimited JSON under the same key
//! in a destination bucket.

pub mod config;
pub mod domain;
pub mod driver;
pub mod job;
pub mod source;
pub mod store;
pub mod transform;
