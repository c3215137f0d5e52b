//! No-operation sink implementation.

use std::error;

use crate::level::Level;
use crate::sink::Sink;

/// A sink that discards all log lines.
///
/// Useful for:
/// - Unit tests where log output would be noise
/// - Benchmarks where sink overhead should be eliminated
/// - Silent operation modes
///
/// # Example
///
/// ```
/// use android_logger::sink::{NoOpSink, Sink};
/// use android_logger::Level;
///
/// let sink = NoOpSink;
/// sink.write(Level::Info, "Demo", "discarded", None);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl Sink for NoOpSink {
    #[inline]
    fn write(&self, _level: Level, _tag: &str, _message: &str, _error: Option<&dyn error::Error>) {
        // Intentionally empty - discard all log lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_noop_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NoOpSink>();
    }

    #[test]
    fn test_noop_sink_as_trait_object() {
        let sink: Box<dyn Sink> = Box::new(NoOpSink);
        sink.write(Level::Trace, "Test", "trace message", None);
        sink.write(Level::Error, "Test", "error message", None);
    }

    #[test]
    fn test_noop_sink_accepts_error_payload() {
        let err = io::Error::other("ignored");
        NoOpSink.write(Level::Warn, "Test", "message", Some(&err));
    }
}
