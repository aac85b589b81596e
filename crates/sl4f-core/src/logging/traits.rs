//! Output sink trait definition

use std::sync::Arc;

/// Destination for rendered log output
///
/// A sink has two streams: the standard stream for log lines and the error
/// stream for exception blocks. Each call must write its text as one
/// contiguous unit even when several threads log at once.
///
/// Implementations:
/// - `ConsoleSink`: stdout / stderr
/// - `FileSink`: appends plain text to a file
/// - `MemorySink`: captures output for tests
/// - `NoOpSink`: discards everything
pub trait LogSink: Send + Sync {
    /// Write one log line to the standard stream
    fn write_line(&self, line: &str);

    /// Write an exception block to the error stream
    fn write_block(&self, block: &str);

    /// Flush buffered output, if any
    fn flush(&self) {}
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn LogSink>;
