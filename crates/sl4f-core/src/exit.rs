//! Process termination for the simple critical path

use std::io::Write;

use parking_lot::Mutex;

/// Exit status used when a simple critical call ends the process
pub const CRITICAL_EXIT_CODE: i32 = 1;

/// Ends the process after a simple critical call
///
/// The logger never calls `std::process::exit` directly; it goes through
/// this trait so tests can substitute [`RecordingExit`].
pub trait ProcessExit: Send + Sync {
    fn exit(&self, code: i32) -> !;
}

/// Flushes the standard streams and exits the process
#[derive(Debug, Clone, Copy, Default)]
pub struct StdProcessExit;

impl ProcessExit for StdProcessExit {
    fn exit(&self, code: i32) -> ! {
        let _ = std::io::stdout().flush();
        let _ = std::io::stderr().flush();
        std::process::exit(code)
    }
}

/// Panic payload raised by [`RecordingExit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitRequested(pub i32);

/// Test double: records the exit code, then unwinds with [`ExitRequested`]
///
/// Wrap the critical call in `std::panic::catch_unwind` to observe it.
#[derive(Debug, Default)]
pub struct RecordingExit {
    codes: Mutex<Vec<i32>>,
}

impl RecordingExit {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exit codes requested so far
    pub fn codes(&self) -> Vec<i32> {
        self.codes.lock().clone()
    }
}

impl ProcessExit for RecordingExit {
    fn exit(&self, code: i32) -> ! {
        self.codes.lock().push(code);
        std::panic::panic_any(ExitRequested(code))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};

    #[test]
    fn test_recording_exit_unwinds_with_code() {
        let exit = RecordingExit::new();
        let result = panic::catch_unwind(AssertUnwindSafe(|| exit.exit(CRITICAL_EXIT_CODE)));

        let payload = result.unwrap_err();
        assert_eq!(
            payload.downcast_ref::<ExitRequested>(),
            Some(&ExitRequested(CRITICAL_EXIT_CODE))
        );
        assert_eq!(exit.codes(), vec![CRITICAL_EXIT_CODE]);
    }

    #[test]
    fn test_exit_code_is_nonzero() {
        assert_ne!(CRITICAL_EXIT_CODE, 0);
    }
}
