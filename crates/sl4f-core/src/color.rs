//! ANSI escape sequences used in console output

pub const RESET: &str = "\u{1B}[0m";
pub const BOLD: &str = "\u{1B}[1m";

pub const INFO: &str = "\u{1B}[36m"; // cyan
pub const TRACE: &str = "\u{1B}[37m"; // white
pub const WARN: &str = "\u{1B}[33m"; // yellow
pub const ERROR: &str = "\u{1B}[31m"; // red
pub const CRITICAL: &str = "\u{1B}[35m"; // purple

/// Remove ANSI SGR sequences (`ESC [ ... m`) from a string
///
/// Used by sinks that write to plain-text destinations.
pub fn strip_ansi(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\u{1B}' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_ansi() {
        let colored = format!("{}ERROR{} {}name{}: hi", ERROR, RESET, BOLD, RESET);
        assert_eq!(strip_ansi(&colored), "ERROR name: hi");
    }

    #[test]
    fn test_strip_ansi_plain_text_untouched() {
        assert_eq!(strip_ansi("[x] plain"), "[x] plain");
    }
}
