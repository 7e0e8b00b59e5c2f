//! Record file: an ordered list of [`Record`]s persisted one code per line.

use std::path::Path;
use std::slice;

use log::{debug, info};

use super::line_store::{LineStore, StoreOptions, WriteSummary};
use super::traits::{LineDecoder, LineEncoder};
use crate::domain::{Record, Status};
use crate::error::{LineStoreError, Result};

/// Parses one record per line into a borrowed collection.
///
/// Malformed lines are counted and reported back to the read loop as errors.
#[derive(Debug)]
pub struct RecordDecoder<'a> {
    records: &'a mut Vec<Record>,
    skip_blank_lines: bool,
    malformed: usize,
}

impl<'a> RecordDecoder<'a> {
    pub fn new(records: &'a mut Vec<Record>, skip_blank_lines: bool) -> Self {
        Self {
            records,
            skip_blank_lines,
            malformed: 0,
        }
    }

    pub fn malformed(&self) -> usize {
        self.malformed
    }
}

impl LineDecoder for RecordDecoder<'_> {
    fn decode(&mut self, line: &str) -> Result<()> {
        if self.skip_blank_lines && line.trim().is_empty() {
            return Ok(());
        }
        match line.parse::<Record>() {
            Ok(record) => {
                self.records.push(record);
                Ok(())
            }
            Err(e) => {
                self.malformed += 1;
                Err(e)
            }
        }
    }
}

/// Emits each record's code in order, then `None`.
#[derive(Debug)]
pub struct RecordEncoder<'a> {
    iter: slice::Iter<'a, Record>,
}

impl<'a> RecordEncoder<'a> {
    pub fn new(records: &'a [Record]) -> Self {
        Self { iter: records.iter() }
    }
}

impl LineEncoder for RecordEncoder<'_> {
    fn encode(&mut self) -> Option<String> {
        self.iter.next().map(Record::to_string)
    }
}

/// In-memory records backed by a [`LineStore`].
#[derive(Debug, Clone)]
pub struct RecordFile {
    store: LineStore,
    records: Vec<Record>,
    malformed: usize,
}

impl RecordFile {
    /// Read and write records at `path`. Nothing is loaded until [`load`](Self::load).
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_store(LineStore::new(path))
    }

    pub fn with_store(store: LineStore) -> Self {
        Self {
            store,
            records: Vec::new(),
            malformed: 0,
        }
    }

    pub fn with_options(self, options: StoreOptions) -> Self {
        Self {
            store: self.store.with_options(options),
            ..self
        }
    }

    /// Replace the in-memory records with the contents of the read file.
    ///
    /// Malformed lines are skipped and counted in [`malformed`](Self::malformed).
    pub fn load(&mut self) -> Status {
        self.records.clear();
        let mut decoder = RecordDecoder::new(&mut self.records, self.store.options().skip_blank_lines);
        let status = self.store.read_all(&mut decoder);
        self.malformed = decoder.malformed();

        if status.is_success() {
            info!(
                "Loaded {} records from {} ({} malformed)",
                self.records.len(),
                self.store.read_path().display(),
                self.malformed
            );
        }
        status
    }

    /// Overwrite the write file with the in-memory records.
    pub fn save(&self) -> Status {
        debug!("Saving {} records to {}", self.records.len(), self.store.write_path().display());
        self.store.write_all(&mut RecordEncoder::new(&self.records))
    }

    /// Like [`save`](Self::save) but reports failures instead of logging them.
    ///
    /// When reading and writing the same file, refuses to save if the last
    /// load skipped unparsed lines, since rewriting would delete them.
    pub fn try_save(&self) -> Result<WriteSummary> {
        if self.malformed > 0 && self.store.read_path() == self.store.write_path() {
            return Err(LineStoreError::WouldDropLines {
                path: self.store.write_path().to_path_buf(),
                count: self.malformed,
            });
        }
        self.store.try_write_all(&mut RecordEncoder::new(&self.records))
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn codes(&self) -> Vec<i32> {
        self.records.iter().map(Record::code).collect()
    }

    /// Lines rejected by the last [`load`](Self::load).
    pub fn malformed(&self) -> usize {
        self.malformed
    }

    pub fn store(&self) -> &LineStore {
        &self.store
    }
}
