//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the logger and the outside world.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod sink;

pub use sink::{LineSink, SinkError, Sinks};
