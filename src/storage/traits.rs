//! Per-line hook traits driven by [`LineStore`](super::LineStore).

use crate::error::Result;

/// Decode hook: called once per line read, in file order.
///
/// The line arrives with its terminator stripped. A returned error is logged
/// and counted by the caller but never stops the read loop; implementations
/// that care about malformed input should track it themselves.
pub trait LineDecoder {
    fn decode(&mut self, line: &str) -> Result<()>;
}

/// Encode hook: called repeatedly until it returns `None`.
///
/// Every `Some(line)` is written to the file, including text that looks like
/// an end marker (`"EOF"` is persisted as data). Only `None` ends the write.
/// There is no default implementation: an encoder that never returns `None`
/// makes [`LineStore::write_all`](super::LineStore::write_all) loop forever.
pub trait LineEncoder {
    fn encode(&mut self) -> Option<String>;
}

impl<F> LineDecoder for F
where
    F: FnMut(&str) -> Result<()>,
{
    fn decode(&mut self, line: &str) -> Result<()> {
        self(line)
    }
}

impl<F> LineEncoder for F
where
    F: FnMut() -> Option<String>,
{
    fn encode(&mut self) -> Option<String> {
        self()
    }
}
