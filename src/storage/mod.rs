//! Storage layer for linestore.
//!
//! [`LineStore`] drives [`LineDecoder`]/[`LineEncoder`] hooks over a plain
//! UTF-8 text file, one record per line. [`RecordFile`] wires those hooks to
//! an in-memory list of [`Record`](crate::domain::Record)s, and
//! [`EchoDecoder`] copies lines to any writer.
//!
//! # Example
//!
//! ```no_run
//! use linestore::domain::Record;
//! use linestore::storage::RecordFile;
//!
//! let mut file = RecordFile::open("transactions.txt");
//! file.push(Record::new(42));
//! file.save();
//!
//! let mut fresh = RecordFile::open("transactions.txt");
//! fresh.load();
//! assert_eq!(fresh.codes(), vec![42]);
//! ```

mod echo;
mod line_store;
mod records;
mod traits;

pub use echo::EchoDecoder;
pub use line_store::{LineEnding, LineStore, ReadSummary, StoreOptions, WriteSummary};
pub use records::{RecordDecoder, RecordEncoder, RecordFile};
pub use traits::{LineDecoder, LineEncoder};
