//! Infrastructure adapters

mod memory_sink;
mod stdio_sink;
mod writer_sink;

pub use memory_sink::MemorySink;
pub use stdio_sink::{StdioSink, stdio_sinks};
pub use writer_sink::WriterSink;
