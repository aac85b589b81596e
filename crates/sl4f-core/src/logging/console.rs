//! Console sink implementation

use std::io::{self, Write};

use super::traits::LogSink;

/// A sink that writes log lines to stdout and exception blocks to stderr
///
/// Each write holds the stream's lock for the whole line and flushes before
/// releasing it, so lines from concurrent callers never interleave.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    /// Create a new console sink
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{}", line);
        let _ = out.flush();
    }

    fn write_block(&self, block: &str) {
        let mut err = io::stderr().lock();
        let _ = writeln!(err, "{}", block);
        let _ = err.flush();
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
        let _ = io::stderr().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_console_sink_writes() {
        // This test just verifies the sink doesn't panic
        let sink = ConsoleSink::new();
        sink.write_line("console sink line");
        sink.write_block("console sink block");
        sink.flush();
    }

    #[test]
    fn test_console_sink_from_many_threads() {
        let sink = Arc::new(ConsoleSink::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for j in 0..10 {
                        sink.write_line(&format!("thread {} line {}", i, j));
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
    }
}
