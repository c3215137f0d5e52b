//! Severity levels and the shared minimum-level threshold.

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use thiserror::Error;

/// Logging severity, ordered from most to least verbose.
///
/// The derived ordering is the gating order: a message is emitted when its
/// severity is greater than or equal to the current threshold. [`Level::None`]
/// sits above [`Level::Error`] and is only meaningful as a threshold value,
/// where it disables all output; it is never the severity of a message.
///
/// # Example
///
/// ```
/// use android_logger::Level;
///
/// assert!(Level::Trace < Level::Debug);
/// assert!(Level::Error < Level::None);
/// assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Level {
    /// Verbose debugging information
    Trace = 0,
    /// Debugging information
    Debug = 1,
    /// General information
    Info = 2,
    /// Warning messages
    Warn = 3,
    /// Error messages
    Error = 4,
    /// Threshold-only value that disables all logging
    None = 5,
}

impl Level {
    /// Default threshold when nothing has been configured.
    pub const DEFAULT: Level = Level::Debug;

    /// Integer rank used for threshold comparison and atomic storage.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Upper-case wire name, as accepted in properties files.
    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "TRACE",
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::None => "NONE",
        }
    }

    pub(crate) fn from_rank(rank: u8) -> Level {
        match rank {
            0 => Level::Trace,
            1 => Level::Debug,
            2 => Level::Info,
            3 => Level::Warn,
            4 => Level::Error,
            _ => Level::None,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognized level name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no valid log level for '{value}', expected one of TRACE, DEBUG, INFO, WARN, ERROR, NONE")]
pub struct ParseLevelError {
    value: String,
}

impl ParseLevelError {
    /// The rejected input.
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses the exact upper-case names. Matching is case-sensitive, so
    /// `"warn"` is rejected while `"WARN"` parses.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "TRACE" => Ok(Level::Trace),
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "WARN" => Ok(Level::Warn),
            "ERROR" => Ok(Level::Error),
            "NONE" => Ok(Level::None),
            _ => Err(ParseLevelError {
                value: s.to_string(),
            }),
        }
    }
}

/// Shared, mutable minimum-severity threshold.
///
/// Cloning a handle shares the underlying cell, so a factory and every logger
/// it has created observe the same threshold. [`set`](LevelHandle::set) is
/// visible immediately to all holders.
///
/// Reads and writes are relaxed atomics: the threshold is a single scalar
/// and a logger racing with a concurrent `set` may briefly observe the old
/// value. The threshold is advisory, not a synchronization point.
#[derive(Debug, Clone)]
pub struct LevelHandle {
    cell: Arc<AtomicU8>,
}

impl LevelHandle {
    /// Create a new handle with the given initial threshold.
    pub fn new(level: Level) -> Self {
        Self {
            cell: Arc::new(AtomicU8::new(level.rank())),
        }
    }

    /// Current threshold.
    pub fn get(&self) -> Level {
        Level::from_rank(self.cell.load(Ordering::Relaxed))
    }

    /// Overwrite the threshold for every holder of this handle.
    pub fn set(&self, level: Level) {
        self.cell.store(level.rank(), Ordering::Relaxed);
    }

    /// Whether a message at `level` passes the current threshold.
    pub fn enables(&self, level: Level) -> bool {
        level.rank() >= self.get().rank()
    }

    /// Whether two handles share the same underlying cell.
    pub fn shares(&self, other: &LevelHandle) -> bool {
        Arc::ptr_eq(&self.cell, &other.cell)
    }
}

impl Default for LevelHandle {
    fn default() -> Self {
        Self::new(Level::DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Trace < Level::Debug);
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
        assert!(Level::Error < Level::None);
    }

    #[test]
    fn test_level_rank_values() {
        assert_eq!(Level::Trace.rank(), 0);
        assert_eq!(Level::None.rank(), 5);
    }

    #[test]
    fn test_level_from_rank_roundtrip() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::None,
        ] {
            assert_eq!(Level::from_rank(level.rank()), level);
        }
    }

    #[test]
    fn test_level_display_names() {
        assert_eq!(Level::Trace.to_string(), "TRACE");
        assert_eq!(Level::None.to_string(), "NONE");
    }

    #[test]
    fn test_parse_exact_names() {
        assert_eq!("TRACE".parse::<Level>().unwrap(), Level::Trace);
        assert_eq!("DEBUG".parse::<Level>().unwrap(), Level::Debug);
        assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
        assert_eq!("WARN".parse::<Level>().unwrap(), Level::Warn);
        assert_eq!("ERROR".parse::<Level>().unwrap(), Level::Error);
        assert_eq!("NONE".parse::<Level>().unwrap(), Level::None);
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("warn".parse::<Level>().is_err());
        assert!("Warn".parse::<Level>().is_err());
    }

    #[test]
    fn test_parse_error_carries_value() {
        let err = "verbose".parse::<Level>().unwrap_err();
        assert_eq!(err.value(), "verbose");
        assert!(err.to_string().contains("'verbose'"));
    }

    #[test]
    fn test_default_threshold_is_debug() {
        assert_eq!(Level::DEFAULT, Level::Debug);
        assert_eq!(LevelHandle::default().get(), Level::Debug);
    }

    #[test]
    fn test_handle_clone_shares_cell() {
        let handle = LevelHandle::new(Level::Info);
        let clone = handle.clone();
        assert!(handle.shares(&clone));

        clone.set(Level::Error);
        assert_eq!(handle.get(), Level::Error);
    }

    #[test]
    fn test_separate_handles_do_not_share() {
        let a = LevelHandle::new(Level::Info);
        let b = LevelHandle::new(Level::Info);
        assert!(!a.shares(&b));
    }

    #[test]
    fn test_enables_at_and_above_threshold() {
        let handle = LevelHandle::new(Level::Warn);
        assert!(!handle.enables(Level::Trace));
        assert!(!handle.enables(Level::Debug));
        assert!(!handle.enables(Level::Info));
        assert!(handle.enables(Level::Warn));
        assert!(handle.enables(Level::Error));
    }

    #[test]
    fn test_none_threshold_disables_everything() {
        let handle = LevelHandle::new(Level::None);
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
        ] {
            assert!(!handle.enables(level), "{level} should be disabled");
        }
    }

    #[test]
    fn test_handle_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LevelHandle>();
    }
}
