//! Call-site capture for the optional caller-tracking suffix
//!
//! Every public logging entry point is `#[track_caller]`, as is every
//! internal function between it and [`CallSite::capture`]. The location
//! therefore always names the user's call, however deep the internal chain
//! is. Adding an internal hop without `#[track_caller]` would report that
//! hop instead; the `test_reports_logging_call_site` test in `logging::logger`
//! guards against this.
//!
//! Records that arrive from another logging front end already know where
//! they were made; [`CallSite::new`] carries that location through instead.

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// Source location of a logging call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallSite {
    file: Cow<'static, str>,
    line: u32,
    column: u32,
}

impl CallSite {
    /// Location of the outermost `#[track_caller]` frame
    #[track_caller]
    pub fn capture() -> Self {
        Self::from_location(Location::caller())
    }

    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line(), location.column())
    }

    /// Location reported by someone else, e.g. a `log::Record`
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn column(&self) -> u32 {
        self.column
    }

    /// ` [Caller: <type> - line: <file>:<line>]`
    pub fn suffix(&self, type_name: &str) -> String {
        format!(" [Caller: {} - line: {}]", type_name, self)
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[track_caller]
    fn through_one_hop() -> CallSite {
        CallSite::capture()
    }

    #[test]
    fn test_capture_here() {
        let expected_line = line!() + 1;
        let site = CallSite::capture();
        assert_eq!(site.line(), expected_line);
        assert!(site.file().ends_with("caller.rs"));
    }

    #[test]
    fn test_capture_propagates_through_track_caller() {
        let expected_line = line!() + 1;
        let site = through_one_hop();
        assert_eq!(site.line(), expected_line);
    }

    #[test]
    fn test_suffix() {
        let site = CallSite::new("src/app.rs", 42, 9);
        assert_eq!(site.suffix("Worker"), " [Caller: Worker - line: src/app.rs:42]");
    }

    #[test]
    fn test_owned_file_name() {
        let site = CallSite::new(String::from("plugins/loader.rs"), 7, 0);
        assert_eq!(site.file(), "plugins/loader.rs");
        assert_eq!(site.to_string(), "plugins/loader.rs:7");
    }
}
