//! android-logger - Lightweight leveled logging facade
//!
//! A port of a mobile-platform logging facade: a factory hands out loggers
//! bound to a tag, every logger shares one minimum-severity threshold, and
//! messages are rendered with positional `{}` templating before being handed
//! to a pluggable sink.
//!
//! # High-Level API
//!
//! ```
//! use android_logger::sink::MemorySink;
//! use android_logger::{log_args, Level, LoggerFactory};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(MemorySink::new());
//! let factory = LoggerFactory::new(sink.clone());
//! factory.set_level(Level::Info);
//!
//! let logger = factory.logger("LoginActivity");
//! logger.debug("suppressed below the threshold");
//! logger.info_arg("user '{}' signed in", &"alice");
//!
//! let io = std::io::Error::other("connection reset");
//! logger.error_args("sync for '{}' failed after {} tries", &log_args!["alice", 3; io]);
//!
//! assert_eq!(sink.len(), 2);
//! ```
//!
//! The threshold can also be loaded at startup from a properties resource
//! named `android-logger.properties` found anywhere in an asset tree; see
//! [`LoggerFactory::load_level_from_properties`].

pub mod arg;
pub mod assets;
pub mod factory;
pub mod format;
pub mod level;
pub mod logger;
mod properties;
pub mod sink;

pub use arg::LogArg;
pub use factory::{LoggerFactory, PROPERTIES_FILE_NAME};
pub use level::{Level, LevelHandle, ParseLevelError};
pub use logger::Logger;

/// Version of the android-logger library.
///
/// Defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
