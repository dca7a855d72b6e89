//! Logger construction

use std::sync::Arc;

use linelog_application::Logger;
use linelog_application::ports::Sinks;

use crate::adapters::{StdioSink, stdio_sinks};
use crate::settings::{LoggerSettings, StreamTarget};

/// A logger with an empty context writing to the standard streams.
#[must_use]
pub fn stdio_logger() -> Logger {
    Logger::new(stdio_sinks())
}

/// Builds a stdio-backed logger from settings.
#[must_use]
pub fn build_logger(settings: &LoggerSettings) -> Logger {
    let sinks = match settings.stream {
        StreamTarget::Stdio => stdio_sinks(),
        StreamTarget::StdoutOnly => Sinks::single(Arc::new(StdioSink::stdout())),
    };
    Logger::new(sinks).with_max_level(settings.max_level)
}
