//! File sink
//!
//! Appends log output to a file as plain text. Useful when stdout isn't
//! visible (daemons, editor extension hosts). ANSI colors are stripped and
//! exception blocks land in the same file, right after their log line.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::LogSink;
use crate::color::strip_ansi;

/// A sink that appends to a file
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Mutex<File>,
}

impl FileSink {
    /// Open `path` for appending, creating it and its parent directory if needed
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = Self::open_append(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(file),
        })
    }

    /// `<temp dir>/sl4f.log`
    pub fn default_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        path.push("sl4f.log");
        path
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Truncate the file and keep appending from the start
    pub fn clear(&self) -> io::Result<()> {
        let mut file = self.file.lock();
        File::create(&self.path)?;
        *file = Self::open_append(&self.path)?;
        Ok(())
    }

    fn open_append(path: &Path) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(path)
    }

    fn append(&self, text: &str) {
        let plain = strip_ansi(text);
        let mut file = self.file.lock();
        let _ = writeln!(file, "{}", plain);
        let _ = file.flush();
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) {
        self.append(line);
    }

    fn write_block(&self, block: &str) {
        self.append(block);
    }

    fn flush(&self) {
        let _ = self.file.lock().flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_appends_plain_text() {
        let dir = TempDir::new().unwrap();
        let sink = FileSink::open(dir.path().join("logs").join("app.log")).unwrap();

        sink.write_line(&format!("{}WARN{} low disk", color::WARN, color::RESET));
        sink.write_block("Error: gone");

        let content = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(content, "WARN low disk\nError: gone\n");
    }

    #[test]
    fn test_reopen_appends() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");

        FileSink::open(&path).unwrap().write_line("one");
        FileSink::open(&path).unwrap().write_line("two");

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_clear() {
        let dir = TempDir::new().unwrap();
        let sink = FileSink::open(dir.path().join("app.log")).unwrap();

        sink.write_line("old");
        sink.clear().unwrap();
        sink.write_line("new");

        assert_eq!(fs::read_to_string(sink.path()).unwrap(), "new\n");
    }

    #[test]
    fn test_default_path() {
        assert!(FileSink::default_path().ends_with("sl4f.log"));
    }
}
