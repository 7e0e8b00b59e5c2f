//! Line-oriented file store.
//!
//! A `LineStore` owns a read path and a write path (often the same file) and
//! drives [`LineDecoder`]/[`LineEncoder`] hooks over them, one line at a time.
//! Files are UTF-8. Each operation opens its own handle, and the handle is
//! released on every exit path, including a panic inside a hook.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

use super::traits::{LineDecoder, LineEncoder};
use crate::domain::Status;
use crate::error::{LineStoreError, Result};

/// Terminator appended after every encoded line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    #[default]
    Lf,
    Crlf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::Crlf => "\r\n",
        }
    }
}

/// Tunables shared by a store and the typed files built on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreOptions {
    pub line_ending: LineEnding,
    /// Ignore whitespace-only lines when decoding records
    pub skip_blank_lines: bool,
}

/// Counters from a completed read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadSummary {
    pub lines: usize,
    pub decode_failures: usize,
}

/// Counters from a completed write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WriteSummary {
    pub lines: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStore {
    read_path: PathBuf,
    write_path: PathBuf,
    options: StoreOptions,
}

impl LineStore {
    /// Read and write the same file.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        Self {
            read_path: path.clone(),
            write_path: path,
            options: StoreOptions::default(),
        }
    }

    /// Read from one file, write to another.
    pub fn with_paths(read_path: impl AsRef<Path>, write_path: impl AsRef<Path>) -> Self {
        Self {
            read_path: read_path.as_ref().to_path_buf(),
            write_path: write_path.as_ref().to_path_buf(),
            options: StoreOptions::default(),
        }
    }

    pub fn with_options(mut self, options: StoreOptions) -> Self {
        self.options = options;
        self
    }

    pub fn read_path(&self) -> &Path {
        &self.read_path
    }

    pub fn write_path(&self) -> &Path {
        &self.write_path
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Feed every line of the read file to `decoder`.
    ///
    /// Returns [`Status::Failure`] if the file cannot be opened or a read
    /// fails part way; the error is logged. Decoder errors never fail the
    /// read.
    pub fn read_all<D: LineDecoder + ?Sized>(&self, decoder: &mut D) -> Status {
        match self.try_read_all(decoder) {
            Ok(summary) => {
                debug!(
                    "Read {} lines from {} ({} decode failures)",
                    summary.lines,
                    self.read_path.display(),
                    summary.decode_failures
                );
                Status::Success
            }
            Err(e) => {
                error!("Read failed: {}", e);
                Status::Failure
            }
        }
    }

    /// Like [`read_all`](Self::read_all) but hands the error back instead of logging it.
    pub fn try_read_all<D: LineDecoder + ?Sized>(&self, decoder: &mut D) -> Result<ReadSummary> {
        let file = File::open(&self.read_path).map_err(|e| LineStoreError::from_io(&self.read_path, e))?;
        let reader = BufReader::new(file);
        let mut summary = ReadSummary::default();

        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| LineStoreError::from_io(&self.read_path, e))?;
            summary.lines += 1;
            if let Err(e) = decoder.decode(&line) {
                summary.decode_failures += 1;
                warn!("{}:{}: {}", self.read_path.display(), idx + 1, e);
            }
        }

        Ok(summary)
    }

    /// Truncate the write file and fill it from `encoder` until it returns `None`.
    ///
    /// Always returns [`Status::Success`]: open and write failures are logged
    /// and stop the loop, but are not reflected in the status. Use
    /// [`try_write_all`](Self::try_write_all) to observe them.
    pub fn write_all<E: LineEncoder + ?Sized>(&self, encoder: &mut E) -> Status {
        match self.try_write_all(encoder) {
            Ok(summary) => {
                debug!("Wrote {} lines to {}", summary.lines, self.write_path.display());
            }
            Err(e) => {
                error!("Write failed: {}", e);
            }
        }
        Status::Success
    }

    /// Like [`write_all`](Self::write_all) but hands open and write errors back.
    ///
    /// Buffered lines are flushed before returning, so a full disk surfaces
    /// here. Only the final `sync_all` is log-only.
    pub fn try_write_all<E: LineEncoder + ?Sized>(&self, encoder: &mut E) -> Result<WriteSummary> {
        let file = File::create(&self.write_path).map_err(|e| LineStoreError::from_io(&self.write_path, e))?;
        let mut writer = BufWriter::new(file);

        let result = self.write_lines(&mut writer, encoder).and_then(|summary| {
            writer
                .flush()
                .map_err(|e| LineStoreError::from_io(&self.write_path, e))?;
            Ok(summary)
        });
        self.close(writer);
        result
    }

    fn write_lines<W: Write, E: LineEncoder + ?Sized>(&self, writer: &mut W, encoder: &mut E) -> Result<WriteSummary> {
        let ending = self.options.line_ending.as_str();
        let mut summary = WriteSummary::default();

        while let Some(line) = encoder.encode() {
            write!(writer, "{}{}", line, ending).map_err(|e| LineStoreError::from_io(&self.write_path, e))?;
            summary.lines += 1;
        }

        Ok(summary)
    }

    fn close(&self, writer: BufWriter<File>) {
        match writer.into_inner() {
            Ok(file) => {
                if let Err(e) = file.sync_all() {
                    error!("Failed to close {}: {}", self.write_path.display(), e);
                }
            }
            Err(e) => {
                error!("Failed to flush {}: {}", self.write_path.display(), e.error());
            }
        }
    }
}
