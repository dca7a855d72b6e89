//! In-memory adapter for capturing lines

use std::sync::atomic::{AtomicBool, Ordering};

use linelog_application::ports::{LineSink, SinkError};
use parking_lot::Mutex;

/// Keeps every written line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    closed: AtomicBool,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the captured lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Removes and returns the captured lines.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.lines.lock())
    }

    /// Returns the captured output as one string.
    #[must_use]
    pub fn contents(&self) -> String {
        self.lines.lock().concat()
    }

    /// Number of captured lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.lock().len()
    }

    /// Returns true if nothing was captured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty()
    }

    /// Rejects all further writes with [`SinkError::Closed`].
    pub fn close(&self) {
        self.closed.store(true, Ordering::Release);
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> Result<(), SinkError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(SinkError::Closed);
        }
        self.lines.lock().push(line.to_string());
        Ok(())
    }
}
