//! Echo decoder: writes every line it is given to a sink.

use std::io::{self, Write};

use super::traits::LineDecoder;
use crate::error::Result;

/// Decoder that echoes each line verbatim, newline-terminated, to `sink`.
#[derive(Debug)]
pub struct EchoDecoder<W: Write> {
    sink: W,
}

impl EchoDecoder<io::Stdout> {
    /// Echo to standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> EchoDecoder<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Give the sink back.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

impl<W: Write> LineDecoder for EchoDecoder<W> {
    fn decode(&mut self, line: &str) -> Result<()> {
        writeln!(self.sink, "{}", line)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_echo_writes_lines_verbatim() {
        let mut echo = EchoDecoder::new(Vec::new());
        echo.decode("A").unwrap();
        echo.decode("  spaced  ").unwrap();
        echo.decode("").unwrap();
        let out = String::from_utf8(echo.into_inner()).unwrap();
        assert_eq!(out, "A\n  spaced  \n\n");
    }

    struct BrokenSink;

    impl Write for BrokenSink {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_echo_reports_sink_failure() {
        let mut echo = EchoDecoder::new(BrokenSink);
        assert!(echo.decode("A").is_err());
    }
}
