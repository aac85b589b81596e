//! No-op sink implementation

use super::traits::LogSink;

/// A sink that discards everything
///
/// Useful for benchmarks or for silencing a component entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for NoOpSink {
    fn write_line(&self, _line: &str) {}
    fn write_block(&self, _block: &str) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_sink() {
        let sink = NoOpSink::new();

        // These should all do nothing without panicking
        sink.write_line("line");
        sink.write_block("block");
        sink.flush();
    }
}
