//! Linelog Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus settings loading.

pub mod adapters;
pub mod factory;
pub mod settings;

pub use adapters::{MemorySink, StdioSink, WriterSink, stdio_sinks};
pub use factory::{build_logger, stdio_logger};
pub use settings::{ENV_PREFIX, LoggerSettings, SettingsError, StreamTarget, load_settings};
