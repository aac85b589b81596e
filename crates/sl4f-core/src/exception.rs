//! Error details rendered into log blocks and crash dumps
//!
//! Rust errors carry no class name or stack trace of their own, so
//! [`ExceptionDetails::capture`] records them at the point the error is
//! handed to the logger: the type name stands in for the exception kind,
//! `Display` for the message, `Error::source` for the cause chain and a
//! force-captured [`Backtrace`] for the frames.

use std::backtrace::{Backtrace, BacktraceStatus};
use std::error::Error;

/// Snapshot of an error suitable for formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExceptionDetails {
    kind: String,
    message: Option<String>,
    causes: Vec<String>,
    frames: Vec<String>,
}

impl ExceptionDetails {
    /// Create details by hand (no frames, no causes)
    pub fn new(kind: impl Into<String>, message: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.filter(|m| !m.is_empty()),
            causes: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Capture an error, including a backtrace of the current thread
    ///
    /// Trait objects are accepted (`&dyn Error`, `&*boxed`); their kind is
    /// reported as `dyn Error` since the concrete type is not known.
    pub fn capture<E: Error + ?Sized + 'static>(error: &E) -> Self {
        Self::describe(error).with_frames(capture_frames())
    }

    /// Kind, message and causes only; no stack walk
    pub fn describe<E: Error + ?Sized + 'static>(error: &E) -> Self {
        Self::new(kind_name::<E>(), Some(error.to_string())).with_causes(cause_chain(error))
    }

    /// Replace the rendered cause chain (outermost first)
    pub fn with_causes(mut self, causes: Vec<String>) -> Self {
        self.causes = causes;
        self
    }

    /// Replace the stack frames (innermost first)
    pub fn with_frames(mut self, frames: Vec<String>) -> Self {
        self.frames = frames;
        self
    }

    /// Fully qualified kind, e.g. `std::io::error::Error`
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Last path segment of the kind with generic arguments removed
    pub fn short_kind(&self) -> &str {
        let base = self.kind.split('<').next().unwrap_or(&self.kind);
        base.rsplit("::").next().unwrap_or(base)
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn causes(&self) -> &[String] {
        &self.causes
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Cause chain joined into one line, or `"N/A"`
    pub fn cause_summary(&self) -> String {
        if self.causes.is_empty() {
            "N/A".to_string()
        } else {
            self.causes.join(" <- ")
        }
    }

    /// First stack frame, or `"Unknown"`
    pub fn source_location(&self) -> &str {
        self.frames.first().map(String::as_str).unwrap_or("Unknown")
    }

    /// `<kind>: <message>` header, message omitted when absent
    pub fn headline(&self, kind: &str) -> String {
        match &self.message {
            Some(message) => format!("{}: {}", kind, message),
            None => kind.to_string(),
        }
    }

    /// Full trace: headline, one tab-indented line per frame, then causes
    pub fn render_stack_trace(&self) -> String {
        let mut out = self.headline(&self.kind);
        out.push('\n');
        for frame in &self.frames {
            out.push_str("\tat ");
            out.push_str(frame);
            out.push('\n');
        }
        for cause in &self.causes {
            out.push_str("Caused by: ");
            out.push_str(cause);
            out.push('\n');
        }
        out
    }
}

fn kind_name<E: ?Sized>() -> &'static str {
    let name = std::any::type_name::<E>();
    if name.starts_with("dyn ") {
        "dyn Error"
    } else {
        name
    }
}

fn cause_chain<E: Error + ?Sized>(error: &E) -> Vec<String> {
    let mut causes = Vec::new();
    let mut current = error.source();
    while let Some(cause) = current {
        causes.push(cause.to_string());
        current = cause.source();
    }
    causes
}

fn capture_frames() -> Vec<String> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return Vec::new();
    }
    skip_capture_frames(parse_backtrace(&backtrace.to_string()))
}

/// Drop the leading frames that belong to backtrace capture or this crate,
/// so the first remaining frame is the code that handed over the error.
fn skip_capture_frames(frames: Vec<String>) -> Vec<String> {
    const INTERNAL: [&str; 3] = ["std::backtrace", "<std::backtrace", "sl4f_core::"];

    frames
        .into_iter()
        .skip_while(|frame| INTERNAL.iter().any(|prefix| frame.starts_with(prefix)))
        .collect()
}

/// Turn std's backtrace rendering into one string per frame.
///
/// Frame lines look like `  12: symbol` and may be followed by an
/// `at file:line:col` line, which is folded into the frame.
fn parse_backtrace(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();

    for line in rendered.lines() {
        let trimmed = line.trim();
        if let Some(location) = trimmed.strip_prefix("at ") {
            if let Some(last) = frames.last_mut() {
                last.push_str(" (");
                last.push_str(location);
                last.push(')');
            }
            continue;
        }
        if let Some((index, symbol)) = trimmed.split_once(": ") {
            if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                frames.push(symbol.to_string());
            }
        }
    }

    frames
}
