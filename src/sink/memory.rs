//! In-memory recording sink for tests.

use std::error;
use std::sync::Mutex;

use crate::level::Level;
use crate::sink::{render_error_chain, Sink};

/// One recorded log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub level: Level,
    pub tag: String,
    pub message: String,
    /// Rendered error chain, when a payload was attached.
    pub error: Option<String>,
}

/// A sink that records every write for later inspection.
///
/// Intended for tests asserting on what the facade emitted. Records are kept
/// behind a `Mutex` so the sink can be shared across threads like any other.
///
/// # Example
///
/// ```
/// use android_logger::sink::{MemorySink, Sink};
/// use android_logger::Level;
///
/// let sink = MemorySink::new();
/// sink.write(Level::Warn, "Auth", "login rejected", None);
///
/// let records = sink.records();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].level, Level::Warn);
/// assert_eq!(records[0].tag, "Auth");
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<Record>>,
}

impl MemorySink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    // Records are plain data; a poisoned lock is still readable.
    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all recorded lines.
    pub fn clear(&self) {
        self.lock().clear();
    }
}

impl Sink for MemorySink {
    fn write(&self, level: Level, tag: &str, message: &str, error: Option<&dyn error::Error>) {
        let record = Record {
            level,
            tag: tag.to_string(),
            message: message.to_string(),
            error: error.map(render_error_chain),
        };
        self.lock().push(record);
    }
}
