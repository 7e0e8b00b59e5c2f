//! Domain types for linestore
//!
//! - Record: a single transaction value wrapping one integer code
//! - Status: the 0/1 outcome reported by whole-file read and write operations

pub mod record;
pub mod status;

pub use record::Record;
pub use status::Status;
