//! Generic `io::Write` adapter

use std::io::Write;

use linelog_application::ports::{LineSink, SinkError};
use parking_lot::Mutex;

/// Writes lines to any `io::Write` destination, e.g. a file.
///
/// The writer is flushed after every line so that each record is complete
/// on disk once the call returns.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wraps a writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        let mut writer = self.writer.lock();
        writer.write_all(line.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}
