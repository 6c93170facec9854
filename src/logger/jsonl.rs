//! JSONL logger: append-only line-delimited JSON for the page activity log.
//!
//! Each line is a self-contained JSON object. Lines are assembled in memory
//! and written atomically via `write_all` to prevent interleaved partial
//! lines when the file is being tailed by another process.
//!
//! Three-level fallback chain:
//! 1. Primary file path
//! 2. stderr with `[CV-JSONL]` prefix
//! 3. Silent discard (a page must never crash for logging failures)

#![allow(missing_docs)]

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Severity level for log events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

/// Log event types matching the page activity model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    ContentLoad,
    ContentLoadFailed,
    FilterChange,
    SortChange,
    SearchChange,
    DetailOpen,
    DetailClose,
    DetailNavigate,
}

/// A single JSONL log entry — all fields optional except `ts`, `event`,
/// `severity`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    /// ISO 8601 UTC timestamp.
    pub ts: String,
    /// Event type identifier.
    pub event: EventType,
    /// Severity level.
    pub severity: Severity,
    /// Page that produced the event (archive, blog, projects).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    /// Record id involved (when applicable).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Active filter label at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    /// Active sort label at the time of the event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Visible-list size after the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// CV error code if the event records a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    /// Human-readable error message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Freeform details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl LogEntry {
    /// Create a new entry stamped with the current UTC time.
    pub fn new(event: EventType, severity: Severity) -> Self {
        Self {
            ts: format_utc_now(),
            event,
            severity,
            page: None,
            record_id: None,
            filter: None,
            sort: None,
            count: None,
            error_code: None,
            error_message: None,
            details: None,
        }
    }

    /// Tag the entry with its originating page.
    #[must_use]
    pub fn page(mut self, page: &str) -> Self {
        self.page = Some(page.to_owned());
        self
    }
}

/// Degradation state of the JSONL writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriterState {
    /// Writing to the primary path.
    Normal,
    /// The file failed, writing to stderr.
    Stderr,
    /// Everything failed, silently discarding.
    Discard,
}

/// Configuration for the JSONL writer.
#[derive(Debug, Clone)]
pub struct JsonlConfig {
    /// Log file path.
    pub path: PathBuf,
}

impl JsonlConfig {
    /// Config writing to the given path.
    #[must_use]
    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

/// Append-only JSONL log writer with multi-level fallback.
#[derive(Debug)]
pub struct JsonlWriter {
    writer: Option<BufWriter<File>>,
    state: WriterState,
    lines_written: u64,
}

impl JsonlWriter {
    /// Open the JSONL log file. Falls through the degradation chain on
    /// failure.
    #[must_use]
    pub fn open(config: &JsonlConfig) -> Self {
        match open_append(&config.path) {
            Ok(file) => Self {
                writer: Some(BufWriter::with_capacity(16 * 1024, file)),
                state: WriterState::Normal,
                lines_written: 0,
            },
            Err(_) => {
                let _ = writeln!(
                    io::stderr(),
                    "[CV-JSONL] log path {} failed to open, using stderr",
                    config.path.display()
                );
                Self {
                    writer: None,
                    state: WriterState::Stderr,
                    lines_written: 0,
                }
            }
        }
    }

    /// A writer that drops everything. Used by pages constructed without a
    /// log path.
    #[must_use]
    pub const fn disabled() -> Self {
        Self {
            writer: None,
            state: WriterState::Discard,
            lines_written: 0,
        }
    }

    /// Write a single log entry as one atomic JSONL line.
    pub fn write_entry(&mut self, entry: &LogEntry) {
        let line = match serde_json::to_string(entry) {
            Ok(json) => format!("{json}\n"),
            Err(e) => {
                // Serialization failure is a programming error; note it and bail.
                let _ = writeln!(io::stderr(), "[CV-JSONL] serialize error: {e}");
                return;
            }
        };
        self.write_line(&line);
    }

    /// Flush buffers.
    pub fn flush(&mut self) {
        if let Some(w) = self.writer.as_mut() {
            let _ = w.flush();
        }
    }

    /// Current degradation state.
    #[must_use]
    pub const fn state(&self) -> &'static str {
        match self.state {
            WriterState::Normal => "normal",
            WriterState::Stderr => "stderr",
            WriterState::Discard => "discard",
        }
    }

    /// Number of lines accepted so far (including degraded writes).
    #[must_use]
    pub const fn lines_written(&self) -> u64 {
        self.lines_written
    }

    // ──────────────────── internals ────────────────────

    fn write_line(&mut self, line: &str) {
        match self.state {
            WriterState::Normal => {
                if let Some(w) = self.writer.as_mut() {
                    if w.write_all(line.as_bytes()).is_err() {
                        self.degrade();
                        self.write_line(line); // retry at next level
                        return;
                    }
                    // Interaction volume is tiny; flush per line so the file
                    // can be tailed while the page is alive.
                    let _ = w.flush();
                    self.lines_written += 1;
                } else {
                    self.degrade();
                    self.write_line(line);
                }
            }
            WriterState::Stderr => {
                let _ = write!(io::stderr(), "[CV-JSONL] {line}");
                self.lines_written += 1;
            }
            WriterState::Discard => {
                // Silently drop.
            }
        }
    }

    fn degrade(&mut self) {
        self.writer = None;
        self.state = WriterState::Stderr;
        let _ = writeln!(io::stderr(), "[CV-JSONL] log write failed, using stderr");
    }
}

impl Drop for JsonlWriter {
    fn drop(&mut self) {
        self.flush();
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

fn format_utc_now() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// ──────────────────── tests ────────────────────
