//! Tagged, level-gated logger handles.

use std::error;
use std::fmt;
use std::sync::Arc;

use crate::arg::{split_trailing_error, LogArg};
use crate::format::render;
use crate::level::{Level, LevelHandle};
use crate::sink::Sink;

/// A logger bound to a tag, a shared threshold, and a sink.
///
/// Created by [`LoggerFactory`](crate::LoggerFactory). Each severity exposes
/// four operations:
///
/// - `info(msg)` emits the message as-is
/// - `info_arg(msg, arg)` substitutes one `{}` placeholder
/// - `info_args(msg, args)` substitutes N placeholders; a trailing
///   [`LogArg::Error`] is detached and attached as the error payload
/// - `info_err(msg, err)` emits the message as-is with an error payload
///
/// Every operation checks the shared threshold first. A disabled call is a
/// complete no-op: no formatting work happens and the sink is not touched.
/// An enabled call makes exactly one sink write.
///
/// Cloning a logger shares the threshold and the sink; the tag is copied.
///
/// # Example
///
/// ```
/// use android_logger::sink::MemorySink;
/// use android_logger::{log_args, LoggerFactory};
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let factory = LoggerFactory::new(sink.clone());
/// let logger = factory.logger("Auth");
///
/// logger.debug("starting authentication");
/// logger.info_arg("user '{}' logged in", &"alice");
/// logger.warn_args("retry {} of {}", &log_args![2, 5]);
///
/// assert_eq!(sink.records()[2].message, "retry 2 of 5");
/// ```
#[derive(Clone)]
pub struct Logger {
    tag: String,
    threshold: LevelHandle,
    sink: Arc<dyn Sink>,
}

impl Logger {
    pub(crate) fn new(tag: String, threshold: LevelHandle, sink: Arc<dyn Sink>) -> Self {
        Self {
            tag,
            threshold,
            sink,
        }
    }

    /// The tag this logger stamps on every line.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Whether a message at `level` would currently be emitted.
    pub fn enabled(&self, level: Level) -> bool {
        self.threshold.enables(level)
    }

    fn log(&self, level: Level, message: &str) {
        if self.enabled(level) {
            self.sink.write(level, &self.tag, message, None);
        }
    }

    fn log_arg(&self, level: Level, message: &str, arg: &dyn fmt::Display) {
        if self.enabled(level) {
            let rendered = render(Some(message), &[arg]);
            self.sink.write(level, &self.tag, &rendered, None);
        }
    }

    fn log_args(&self, level: Level, message: &str, args: &[LogArg<'_>]) {
        if !self.enabled(level) {
            return;
        }
        if args.is_empty() {
            self.sink.write(level, &self.tag, message, None);
            return;
        }
        let (values, error) = split_trailing_error(args);
        let rendered = render(Some(message), values);
        self.sink.write(level, &self.tag, &rendered, error);
    }

    fn log_err(&self, level: Level, message: &str, error: &dyn error::Error) {
        if self.enabled(level) {
            self.sink.write(level, &self.tag, message, Some(error));
        }
    }
}

macro_rules! leveled_methods {
    ($level:expr, $lvl:literal, $plain:ident, $arg:ident, $args:ident, $err:ident) => {
        #[doc = concat!("Log a ", $lvl, "-level message as-is.")]
        pub fn $plain(&self, message: &str) {
            self.log($level, message);
        }

        #[doc = concat!(
            "Log a ", $lvl, "-level message with one `{}` substitution."
        )]
        pub fn $arg(&self, message: &str, arg: &dyn fmt::Display) {
            self.log_arg($level, message, arg);
        }

        #[doc = concat!(
            "Log a ", $lvl, "-level message with positional substitutions.\n\n",
            "A trailing [`LogArg::Error`] element is excluded from substitution ",
            "and attached as the error payload instead. With an empty slice the ",
            "message is emitted unchanged."
        )]
        pub fn $args(&self, message: &str, args: &[LogArg<'_>]) {
            self.log_args($level, message, args);
        }

        #[doc = concat!(
            "Log a ", $lvl, "-level message as-is with an attached error payload."
        )]
        pub fn $err(&self, message: &str, error: &dyn error::Error) {
            self.log_err($level, message, error);
        }
    };
}

impl Logger {
    leveled_methods!(Level::Trace, "trace", trace, trace_arg, trace_args, trace_err);
    leveled_methods!(Level::Debug, "debug", debug, debug_arg, debug_args, debug_err);
    leveled_methods!(Level::Info, "info", info, info_arg, info_args, info_err);
    leveled_methods!(Level::Warn, "warn", warn, warn_arg, warn_args, warn_err);
    leveled_methods!(Level::Error, "error", error, error_arg, error_args, error_err);
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("tag", &self.tag)
            .field("threshold", &self.threshold.get())
            .finish_non_exhaustive()
    }
}
