//! Log line and exception block rendering

use crate::color::{BOLD, RESET};
use crate::exception::ExceptionDetails;
use crate::level::LogLevel;

/// Timestamp layout used in log lines and crash dumps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render one log line.
///
/// Layout: `[<timestamp>] <color><LEVEL><reset> <pad><bold><name><reset>: <message>`.
/// The padding is one separating space plus enough spaces to right-align the
/// label to the longest label of the whole scale, so the name column starts
/// at the same offset for every level.
pub fn format_line(timestamp: &str, level: LogLevel, name: &str, message: &str) -> String {
    let pad = " ".repeat(1 + LogLevel::max_label_width() - level.label().len());
    format!(
        "[{}] {}{}{} {}{}{}{}: {}",
        timestamp,
        level.color(),
        level.label(),
        RESET,
        pad,
        BOLD,
        name,
        RESET,
        message
    )
}

/// Render an exception block.
///
/// Verbose: fully qualified kind and message, then one tab-indented line per
/// frame. Terse: `<ShortKind>: <message>`, or just `<ShortKind>` when there is
/// no message.
pub fn format_exception(details: &ExceptionDetails, verbose: bool) -> String {
    if !verbose {
        return details.headline(details.short_kind());
    }

    let mut out = details.headline(details.kind());
    for frame in details.frames() {
        out.push_str("\n\t");
        out.push_str(frame);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::strip_ansi;

    fn name_offset(line: &str) -> usize {
        strip_ansi(line).find("Worker").unwrap()
    }

    #[test]
    fn test_format_line_layout() {
        let line = format_line("2024-01-02 03:04:05", LogLevel::Info, "Worker", "started");
        assert_eq!(
            line,
            "[2024-01-02 03:04:05] \u{1B}[36mINFO\u{1B}[0m      \u{1B}[1mWorker\u{1B}[0m: started"
        );
    }

    #[test]
    fn test_name_column_is_aligned_across_levels() {
        let offsets: Vec<_> = LogLevel::ALL
            .iter()
            .map(|&level| name_offset(&format_line("ts", level, "Worker", "m")))
            .collect();
        assert!(offsets.windows(2).all(|w| w[0] == w[1]), "{:?}", offsets);
    }

    #[test]
    fn test_longest_label_gets_minimal_padding() {
        let plain = strip_ansi(&format_line("ts", LogLevel::Critical, "Worker", "m"));
        assert_eq!(plain, "[ts] CRITICAL  Worker: m");
    }

    #[test]
    fn test_terse_exception_with_message() {
        let details = ExceptionDetails::new("std::io::error::Error", Some("denied".into()));
        assert_eq!(format_exception(&details, false), "Error: denied");
    }

    #[test]
    fn test_terse_exception_without_message() {
        let details = ExceptionDetails::new("app::errors::Timeout", None);
        assert_eq!(format_exception(&details, false), "Timeout");
    }

    #[test]
    fn test_verbose_exception_lists_frames() {
        let details = ExceptionDetails::new("app::errors::Timeout", Some("after 5s".into()))
            .with_frames(vec!["app::poll".into(), "main".into()]);
        assert_eq!(
            format_exception(&details, true),
            "app::errors::Timeout: after 5s\n\tapp::poll\n\tmain"
        );
    }
}
