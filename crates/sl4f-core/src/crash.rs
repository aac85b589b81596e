//! Crash dump files for fatal errors
//!
//! One plain-text file per dump, named after the current time at seconds
//! resolution (`2024-05-01_13-45-09.log`). Two dumps within the same second
//! in the same directory overwrite each other.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;

use crate::exception::ExceptionDetails;
use crate::format::TIMESTAMP_FORMAT;

/// Errors that can occur while writing a crash dump
#[derive(Error, Debug)]
pub enum CrashDumpError {
    #[error("Failed to write crash dump {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CrashDumpError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type CrashDumpResult<T> = Result<T, CrashDumpError>;

/// Writes crash dumps into a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashDumpWriter {
    dir: PathBuf,
}

impl CrashDumpWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Dump file name for a moment in time
    pub fn file_name(now: &DateTime<Local>) -> String {
        let stamp = now.format(TIMESTAMP_FORMAT).to_string();
        format!("{}.log", stamp.replace(' ', "_").replace(':', "-"))
    }

    /// Write a dump for `details` stamped with the current time
    pub fn write_dump(&self, details: &ExceptionDetails, message: &str) -> CrashDumpResult<PathBuf> {
        self.write_dump_at(&Local::now(), details, message)
    }

    /// Write a dump stamped with `now`; returns the file path
    pub fn write_dump_at(
        &self,
        now: &DateTime<Local>,
        details: &ExceptionDetails,
        message: &str,
    ) -> CrashDumpResult<PathBuf> {
        let path = self.dir.join(Self::file_name(now));

        fs::create_dir_all(&self.dir).map_err(|e| CrashDumpError::io(&self.dir, e))?;

        let body = render_dump(&now.format(TIMESTAMP_FORMAT).to_string(), details, message);
        let file = File::create(&path).map_err(|e| CrashDumpError::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(body.as_bytes())
            .and_then(|()| writer.flush())
            .map_err(|e| CrashDumpError::io(&path, e))?;

        Ok(path)
    }
}

/// Text body of a crash dump
pub fn render_dump(timestamp: &str, details: &ExceptionDetails, message: &str) -> String {
    let mut out = String::new();
    out.push_str("Critical Error:\n");
    out.push_str(&format!("Timestamp: {}\n", timestamp));
    out.push_str(&format!("Message: {}\n", message));
    out.push_str("Stack Trace:\n");
    out.push_str(&details.render_stack_trace());
    out.push_str("\nAdditional Details:\n");
    out.push_str(&format!("Exception Type: {}\n", details.kind()));
    out.push_str(&format!(
        "Exception Message: {}\n",
        details.message().unwrap_or("N/A")
    ));
    out.push_str(&format!("Exception Cause: {}\n", details.cause_summary()));
    out.push_str(&format!("Exception Source: {}\n", details.source_location()));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 13, 45, 9).unwrap()
    }

    fn sample_details() -> ExceptionDetails {
        ExceptionDetails::new("app::errors::Corrupt", Some("bad header".into()))
            .with_frames(vec!["app::load (src/load.rs:10:3)".into()])
            .with_causes(vec!["unexpected eof".into()])
    }

    #[test]
    fn test_file_name_pattern() {
        assert_eq!(CrashDumpWriter::file_name(&fixed_time()), "2024-05-01_13-45-09.log");
    }

    #[test]
    fn test_render_dump() {
        let body = render_dump("2024-05-01 13:45:09", &sample_details(), "index unreadable");
        let expected = "Critical Error:\n\
            Timestamp: 2024-05-01 13:45:09\n\
            Message: index unreadable\n\
            Stack Trace:\n\
            app::errors::Corrupt: bad header\n\
            \tat app::load (src/load.rs:10:3)\n\
            Caused by: unexpected eof\n\
            \n\
            Additional Details:\n\
            Exception Type: app::errors::Corrupt\n\
            Exception Message: bad header\n\
            Exception Cause: unexpected eof\n\
            Exception Source: app::load (src/load.rs:10:3)\n";
        assert_eq!(body, expected);
    }

    #[test]
    fn test_render_dump_without_cause_or_frames() {
        let details = ExceptionDetails::new("app::Oops", None);
        let body = render_dump("ts", &details, "m");
        assert!(body.contains("Exception Message: N/A\n"));
        assert!(body.contains("Exception Cause: N/A\n"));
        assert!(body.contains("Exception Source: Unknown\n"));
    }

    #[test]
    fn test_write_dump_creates_one_file() {
        let dir = TempDir::new().unwrap();
        let writer = CrashDumpWriter::new(dir.path().join("crash"));

        let path = writer
            .write_dump_at(&fixed_time(), &sample_details(), "index unreadable")
            .unwrap();

        assert_eq!(path, dir.path().join("crash").join("2024-05-01_13-45-09.log"));
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("Message: index unreadable"));
        assert!(content.contains("Exception Type: app::errors::Corrupt"));
        assert_eq!(fs::read_dir(dir.path().join("crash")).unwrap().count(), 1);
    }

    #[test]
    fn test_same_second_overwrites() {
        let dir = TempDir::new().unwrap();
        let writer = CrashDumpWriter::new(dir.path());

        writer.write_dump_at(&fixed_time(), &sample_details(), "first").unwrap();
        let path = writer.write_dump_at(&fixed_time(), &sample_details(), "second").unwrap();

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
        assert!(fs::read_to_string(path).unwrap().contains("Message: second"));
    }

    #[test]
    fn test_unwritable_dir_is_an_error() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let writer = CrashDumpWriter::new(&blocker);
        let result = writer.write_dump(&sample_details(), "m");
        assert!(matches!(result, Err(CrashDumpError::Io { .. })));
    }
}
