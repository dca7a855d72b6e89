//! Linelog Application - Serialization and logging
//!
//! This crate defines the application layer with:
//! - The lossy value serializer with path-sensitive cycle detection
//! - The pair formatter that splices context into a flat record
//! - The leveled logger and the sink port it writes through

pub mod logger;
pub mod pairs;
pub mod ports;
pub mod serializer;

pub use logger::Logger;
pub use pairs::format_pairs;
pub use ports::{LineSink, SinkError, Sinks};
pub use serializer::{Ancestors, CIRCULAR, Fragment, serialize, to_fragment, to_json};
