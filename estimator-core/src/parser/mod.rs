//! Snapshot and log entry decoding.

pub mod fields;
mod log;

pub use log::{decode_entry, DecodedEntry, LogSnapshot};
