//! Append-only JSONL activity logging with graceful degradation.

pub mod jsonl;

pub use jsonl::{EventType, JsonlConfig, JsonlWriter, LogEntry, Severity};
