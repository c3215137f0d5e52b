//! Log sink abstraction and adapters.
//!
//! A [`Sink`] is the external destination that records rendered log lines.
//! Loggers never format or emit on their own; every enabled call turns into
//! exactly one `Sink::write`. This keeps the facade decoupled from the
//! backend:
//!
//! - [`TracingSink`]: production adapter that delegates to the `tracing` crate
//! - [`NoOpSink`]: silent sink for tests and benchmarks
//! - [`MemorySink`]: recording sink for assertions in tests
//!
//! # Usage
//!
//! ```
//! use android_logger::sink::{MemorySink, Sink};
//! use android_logger::{Level, LoggerFactory};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let factory = LoggerFactory::new(sink.clone());
//! factory.logger("Demo").info("started");
//! assert_eq!(sink.records()[0].message, "started");
//! ```

mod memory;
mod noop;
mod tracing_adapter;

use std::error;

use crate::level::Level;

pub use memory::{MemorySink, Record};
pub use noop::NoOpSink;
pub use tracing_adapter::TracingSink;

/// Destination for rendered log lines.
///
/// Implementations must be `Send + Sync` so one sink can back loggers on
/// every thread. Writes are synchronous and assumed to always succeed; a
/// sink has no way to report failure back through the facade.
pub trait Sink: Send + Sync {
    /// Record one log line.
    ///
    /// `error` is the optional structured payload attached by the
    /// error-carrying logging operations. `level` is always one of the five
    /// real severities when called through a [`Logger`](crate::Logger).
    fn write(&self, level: Level, tag: &str, message: &str, error: Option<&dyn error::Error>);
}

/// Render an error and its source chain into a single string.
///
/// Used by sinks that need a flat textual representation of the payload.
pub(crate) fn render_error_chain(error: &dyn error::Error) -> String {
    let mut rendered = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        rendered.push_str(": ");
        rendered.push_str(&cause.to_string());
        source = cause.source();
    }
    rendered
}
