//! linestore - line-oriented file persistence
//!
//! A `LineStore` reads a text file line by line into a decode hook and writes
//! a text file line by line from an encode hook. `RecordFile` specializes it
//! for transaction records holding a single integer code.

pub mod domain;
pub mod error;
pub mod storage;

pub use error::{LineStoreError, Result};
