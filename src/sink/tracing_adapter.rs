//! Tracing library adapter implementation.

use std::error;

use crate::level::Level;
use crate::sink::{render_error_chain, Sink};

/// Sink implementation that delegates to the `tracing` crate.
///
/// This adapter bridges the facade to the `tracing` ecosystem, so the host
/// application's subscriber (console, file, whatever it installed) receives
/// the lines. The tag travels as a `tag` field and the error payload, when
/// present, as an `error` field carrying the full source chain.
///
/// # Example
///
/// ```ignore
/// use android_logger::sink::TracingSink;
/// use android_logger::LoggerFactory;
/// use std::sync::Arc;
///
/// // Assumes a tracing subscriber is already installed
/// let factory = LoggerFactory::new(Arc::new(TracingSink));
/// factory.logger("Startup").info("using tracing backend");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Create a new tracing sink adapter.
    pub fn new() -> Self {
        Self
    }
}

macro_rules! emit {
    ($macro:ident, $tag:expr, $message:expr, $error:expr) => {
        match $error {
            Some(err) => {
                tracing::$macro!(tag = $tag, error = %render_error_chain(err), "{}", $message)
            }
            None => tracing::$macro!(tag = $tag, "{}", $message),
        }
    };
}

impl Sink for TracingSink {
    fn write(&self, level: Level, tag: &str, message: &str, error: Option<&dyn error::Error>) {
        match level {
            Level::Trace => emit!(trace, tag, message, error),
            Level::Debug => emit!(debug, tag, message, error),
            Level::Info => emit!(info, tag, message, error),
            Level::Warn => emit!(warn, tag, message, error),
            Level::Error => emit!(error, tag, message, error),
            // None is a threshold value, never an event severity
            Level::None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_tracing_sink_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TracingSink>();
    }

    #[test]
    fn test_tracing_sink_as_trait_object() {
        let sink: Box<dyn Sink> = Box::new(TracingSink::new());
        // Delegates to tracing (may not appear without a subscriber)
        sink.write(Level::Info, "Test", "test info", None);
        sink.write(Level::Debug, "Test", "test debug", None);
    }

    #[test]
    fn test_tracing_sink_with_error_payload() {
        let err = io::Error::other("payload");
        TracingSink.write(Level::Error, "Test", "failed", Some(&err));
    }

    #[test]
    fn test_tracing_sink_ignores_none_level() {
        // Unreachable through Logger, must still not panic
        TracingSink.write(Level::None, "Test", "ignored", None);
    }

    #[test]
    fn test_tracing_sink_debug_impl() {
        assert_eq!(format!("{:?}", TracingSink), "TracingSink");
    }
}
