//! Leveled logger
//!
//! Each call writes one line of the form
//! `{"level":<code>,<context fields><call fields>"msg":<message|null>}`
//! to the sink selected by severity. Context accumulates through
//! [`Logger::child`]; keys are never deduplicated, so a reader that parses
//! the line keeps the innermost value.

use std::sync::Arc;

use linelog_domain::{Level, Value};

use crate::pairs::format_pairs;
use crate::ports::Sinks;
use crate::serializer::to_json;

/// A logger handle with an immutable context.
#[derive(Debug, Clone)]
pub struct Logger {
    context: Arc<str>,
    sinks: Sinks,
    max_level: Level,
}

impl Logger {
    /// Creates a logger with an empty context that emits every level.
    #[must_use]
    pub fn new(sinks: Sinks) -> Self {
        Self {
            context: Arc::from(""),
            sinks,
            max_level: Level::Debug,
        }
    }

    /// Drops lines less severe than `level`.
    #[must_use]
    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = level;
        self
    }

    /// The least severe level that is still written.
    #[must_use]
    pub const fn max_level(&self) -> Level {
        self.max_level
    }

    /// Returns true if lines at `level` are written.
    #[must_use]
    pub const fn enabled(&self, level: Level) -> bool {
        level.enabled_under(self.max_level)
    }

    /// The accumulated context fields, comma-terminated.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Returns a logger whose lines carry this logger's context followed by `data`.
    #[must_use]
    pub fn child(&self, data: impl Into<Value>) -> Self {
        let context = format!("{}{}", self.context, format_pairs(&data.into()));
        Self {
            context: Arc::from(context),
            sinks: self.sinks.clone(),
            max_level: self.max_level,
        }
    }

    /// Writes a line with an explicit message and data.
    ///
    /// Returns the line, or `None` when `level` is filtered out. A failed
    /// write is reported through `tracing` and never reaches the caller.
    pub fn log(
        &self,
        level: Level,
        message: impl Into<Value>,
        data: impl Into<Value>,
    ) -> Option<String> {
        if !self.enabled(level) {
            return None;
        }

        let fields = format!("{}{}", self.context, format_pairs(&data.into()));
        let line = format_line(level, &fields, &message.into());
        if let Err(e) = self.sinks.route(level).write_line(&line) {
            tracing::warn!(error = %e, severity = %level, "failed to write log line");
        }
        Some(line)
    }

    fn log_single(&self, level: Level, arg: Value) -> Option<String> {
        if matches!(arg, Value::String(_)) {
            self.log(level, arg, Value::Undefined)
        } else {
            self.log(level, Value::Null, arg)
        }
    }

    /// Logs at error level. A string argument is the message, anything else is data.
    pub fn error(&self, arg: impl Into<Value>) -> Option<String> {
        self.log_single(Level::Error, arg.into())
    }

    /// Logs a message with data at error level.
    pub fn error_with(&self, message: impl Into<Value>, data: impl Into<Value>) -> Option<String> {
        self.log(Level::Error, message, data)
    }

    /// Logs at warn level. A string argument is the message, anything else is data.
    pub fn warn(&self, arg: impl Into<Value>) -> Option<String> {
        self.log_single(Level::Warn, arg.into())
    }

    /// Logs a message with data at warn level.
    pub fn warn_with(&self, message: impl Into<Value>, data: impl Into<Value>) -> Option<String> {
        self.log(Level::Warn, message, data)
    }

    /// Logs at info level. A string argument is the message, anything else is data.
    pub fn info(&self, arg: impl Into<Value>) -> Option<String> {
        self.log_single(Level::Info, arg.into())
    }

    /// Logs a message with data at info level.
    pub fn info_with(&self, message: impl Into<Value>, data: impl Into<Value>) -> Option<String> {
        self.log(Level::Info, message, data)
    }

    /// Logs at debug level. A string argument is the message, anything else is data.
    pub fn debug(&self, arg: impl Into<Value>) -> Option<String> {
        self.log_single(Level::Debug, arg.into())
    }

    /// Logs a message with data at debug level.
    pub fn debug_with(&self, message: impl Into<Value>, data: impl Into<Value>) -> Option<String> {
        self.log(Level::Debug, message, data)
    }
}

fn format_line(level: Level, fields: &str, message: &Value) -> String {
    let msg = to_json(message).unwrap_or_else(|| "null".to_string());
    format!("{{\"level\":{},{fields}\"msg\":{msg}}}\n", level.code())
}
