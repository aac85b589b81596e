//! Loggers and output sinks

mod traits;
mod noop;
mod console;
mod memory;
mod file_sink;
mod logger;

pub use traits::{LogSink, SharedSink};
pub use noop::NoOpSink;
pub use console::ConsoleSink;
pub use memory::MemorySink;
pub use file_sink::FileSink;
pub use logger::Logger;
