//! Loggable argument values.
//!
//! Variadic logging operations take an ordered slice of [`LogArg`] values.
//! The logger inspects the last element's variant to decide whether it is an
//! attached error payload rather than a substitution value.

use std::error;
use std::fmt;

/// A single substitution value for a variadic logging call.
///
/// `Value` renders into a `{}` placeholder. `Error` renders the same way when
/// it appears anywhere but last; in the last position it is detached from
/// substitution and forwarded to the sink as the structured error payload.
pub enum LogArg<'a> {
    /// A plain display value.
    Value(&'a dyn fmt::Display),
    /// An error value, attached as the payload when trailing.
    Error(&'a dyn error::Error),
}

impl<'a> LogArg<'a> {
    /// Wrap a display value.
    pub fn value<T: fmt::Display>(value: &'a T) -> Self {
        LogArg::Value(value)
    }

    /// Wrap an error value.
    pub fn error<E: error::Error>(error: &'a E) -> Self {
        LogArg::Error(error)
    }

    /// Whether this argument is the error variant.
    pub fn is_error(&self) -> bool {
        matches!(self, LogArg::Error(_))
    }
}

impl fmt::Display for LogArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Value(value) => value.fmt(f),
            LogArg::Error(error) => error.fmt(f),
        }
    }
}

impl fmt::Debug for LogArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogArg::Value(value) => write!(f, "Value({value})"),
            LogArg::Error(error) => write!(f, "Error({error})"),
        }
    }
}

/// Split off a trailing error payload, if any.
///
/// Returns the substitution values and the detached error. A non-trailing
/// `Error` element stays in the substitution values.
pub(crate) fn split_trailing_error<'a>(
    args: &'a [LogArg<'a>],
) -> (&'a [LogArg<'a>], Option<&'a dyn error::Error>) {
    match args.split_last() {
        Some((LogArg::Error(error), rest)) => (rest, Some(*error)),
        _ => (args, None),
    }
}

/// Build a `[LogArg; N]` array from display values, optionally with a
/// trailing error after a semicolon.
///
/// # Example
///
/// ```
/// use android_logger::log_args;
///
/// let user = "alice";
/// let attempts = 3;
/// let io = std::io::Error::other("connection reset");
///
/// let plain = log_args![user, attempts];
/// let with_error = log_args![user, attempts; io];
/// assert_eq!(plain.len(), 2);
/// assert!(with_error[2].is_error());
/// ```
#[macro_export]
macro_rules! log_args {
    ($($value:expr),* $(,)?) => {
        [$($crate::LogArg::Value(&$value)),*]
    };
    ($($value:expr),* ; $error:expr) => {
        [$($crate::LogArg::Value(&$value),)* $crate::LogArg::Error(&$error)]
    };
}
