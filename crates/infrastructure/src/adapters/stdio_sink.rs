//! Standard stream adapter

use std::io::{self, Write};
use std::sync::Arc;

use linelog_application::ports::{LineSink, SinkError, Sinks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Writes each line to standard output or standard error with a single
/// `write_all` on the locked handle.
#[derive(Debug, Clone, Copy)]
pub struct StdioSink {
    stream: Stream,
}

impl StdioSink {
    /// Sink writing to standard output.
    #[must_use]
    pub const fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
        }
    }

    /// Sink writing to standard error.
    #[must_use]
    pub const fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
        }
    }
}

impl LineSink for StdioSink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        match self.stream {
            Stream::Stdout => io::stdout().lock().write_all(line.as_bytes())?,
            Stream::Stderr => io::stderr().lock().write_all(line.as_bytes())?,
        }
        Ok(())
    }
}

/// Standard output for regular lines, standard error for the most severe level.
#[must_use]
pub fn stdio_sinks() -> Sinks {
    Sinks::new(Arc::new(StdioSink::stdout()), Arc::new(StdioSink::stderr()))
}
