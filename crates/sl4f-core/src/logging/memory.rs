//! In-memory sink

use parking_lot::Mutex;

use super::traits::LogSink;

/// Captures both streams in memory
///
/// Intended for tests: build a `Logger` on a `MemorySink`, log, then
/// inspect [`MemorySink::lines`] and [`MemorySink::blocks`].
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<String>>,
    blocks: Mutex<Vec<String>>,
}

impl MemorySink {
    /// Create an empty sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines written to the standard stream
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// Blocks written to the error stream
    pub fn blocks(&self) -> Vec<String> {
        self.blocks.lock().clone()
    }

    /// Whether nothing has been written to either stream
    pub fn is_empty(&self) -> bool {
        self.lines.lock().is_empty() && self.blocks.lock().is_empty()
    }

    /// Discard everything captured so far
    pub fn clear(&self) {
        self.lines.lock().clear();
        self.blocks.lock().clear();
    }
}

impl LogSink for MemorySink {
    fn write_line(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }

    fn write_block(&self, block: &str) {
        self.blocks.lock().push(block.to_string());
    }
}
