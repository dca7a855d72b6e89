//! Line sink port

use std::fmt;
use std::sync::Arc;

use linelog_domain::Level;

/// Error type for sink writes.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The underlying stream rejected the write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink no longer accepts lines.
    #[error("sink is closed")]
    Closed,
}

/// Port for writing complete log lines.
///
/// Implementations receive one newline-terminated record per call and must
/// write it as a unit.
pub trait LineSink: Send + Sync {
    /// Writes one line.
    ///
    /// # Errors
    ///
    /// Returns an error if the destination rejects the write.
    fn write_line(&self, line: &str) -> Result<(), SinkError>;
}

/// The two fixed destinations a logger routes lines to.
#[derive(Clone)]
pub struct Sinks {
    out: Arc<dyn LineSink>,
    err: Arc<dyn LineSink>,
}

impl Sinks {
    /// Pairs a standard output sink with an error sink.
    pub fn new(out: Arc<dyn LineSink>, err: Arc<dyn LineSink>) -> Self {
        Self { out, err }
    }

    /// Uses the same sink for every level.
    pub fn single(sink: Arc<dyn LineSink>) -> Self {
        Self {
            out: Arc::clone(&sink),
            err: sink,
        }
    }

    /// Returns the sink a line at `level` is written to.
    ///
    /// Only the most severe level goes to the error sink.
    #[must_use]
    pub fn route(&self, level: Level) -> &dyn LineSink {
        if level == Level::MOST_SEVERE {
            self.err.as_ref()
        } else {
            self.out.as_ref()
        }
    }
}

impl fmt::Debug for Sinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sinks").finish_non_exhaustive()
    }
}
