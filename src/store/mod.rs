//! Persistence: the JSON record store and its audit log.

pub mod json_store;
pub mod log;

pub use json_store::RecordStore;
