//! Operator-visible diagnostic channel shared by the views.
//!
//! Every entry goes to `tracing` and is also kept in memory so callers
//! (the CLI, tests) can inspect what a view reported. The in-memory log is
//! bounded; once full, the oldest entry is dropped for each new one.

use std::collections::VecDeque;
use std::sync::Arc;

use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warn,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub severity: Severity,
    /// View that emitted the entry, e.g. "book_list".
    pub source: &'static str,
    pub message: String,
}

/// Entries retained by [`Diagnostics::new`].
pub const DEFAULT_CAPACITY: usize = 100;

/// Cloneable handle; all clones append to the same log.
#[derive(Debug, Clone)]
pub struct Diagnostics {
    entries: Arc<Mutex<VecDeque<DiagnosticEntry>>>,
    capacity: usize,
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keeps at most `capacity` entries (at least one).
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity,
        }
    }

    pub fn info(&self, source: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(source, "{}", message);
        self.push(Severity::Info, source, message);
    }

    pub fn warn(&self, source: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(source, "{}", message);
        self.push(Severity::Warn, source, message);
    }

    pub fn error(&self, source: &'static str, message: impl Into<String>) {
        let message = message.into();
        tracing::error!(source, "{}", message);
        self.push(Severity::Error, source, message);
    }

    /// Snapshot of the retained entries, oldest first.
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.lock().iter().cloned().collect()
    }

    pub fn messages(&self) -> Vec<String> {
        self.entries.lock().iter().map(|e| e.message.clone()).collect()
    }

    /// Number of entries whose message is exactly `message`.
    pub fn count(&self, message: &str) -> usize {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.message == message)
            .count()
    }

    pub fn errors(&self) -> Vec<DiagnosticEntry> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.severity == Severity::Error)
            .cloned()
            .collect()
    }

    fn push(&self, severity: Severity, source: &'static str, message: String) {
        let mut entries = self.entries.lock();
        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(DiagnosticEntry {
            severity,
            source,
            message,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_one_log() {
        let diagnostics = Diagnostics::new();
        let other = diagnostics.clone();
        diagnostics.info("counter", "hello");
        other.error("book_list", "boom");

        assert_eq!(diagnostics.messages(), vec!["hello", "boom"]);
        assert_eq!(other.count("hello"), 1);
        let errors = diagnostics.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].source, "book_list");
    }

    #[test]
    fn oldest_entries_are_dropped_when_full() {
        let diagnostics = Diagnostics::with_capacity(3);
        for n in 0..10 {
            diagnostics.info("counter", format!("entry {}", n));
        }

        assert_eq!(diagnostics.entries().len(), 3);
        assert_eq!(diagnostics.messages(), vec!["entry 7", "entry 8", "entry 9"]);
    }

    #[test]
    fn default_capacity_bounds_the_log() {
        let diagnostics = Diagnostics::new();
        for _ in 0..(DEFAULT_CAPACITY * 3) {
            diagnostics.warn("book_list", "again");
        }
        assert_eq!(diagnostics.entries().len(), DEFAULT_CAPACITY);
    }
}
