//! Logger creation and threshold configuration.

use std::any;
use std::sync::Arc;

use crate::assets::{find_asset, AssetSource};
use crate::level::{Level, LevelHandle};
use crate::logger::Logger;
use crate::properties;
use crate::sink::{Sink, TracingSink};

/// Fixed name of the properties resource searched for in the asset tree.
pub const PROPERTIES_FILE_NAME: &str = "android-logger.properties";

/// Tag used for the factory's own diagnostics.
const FACTORY_TAG: &str = "LoggerFactory";

/// Creates tagged [`Logger`] handles sharing one threshold and one sink.
///
/// There is no process-wide singleton: the factory owns the shared
/// [`LevelHandle`] and every logger it creates is bound to that handle, so
/// [`set_level`](Self::set_level) is observed immediately by loggers created
/// both before and after the call.
///
/// # Example
///
/// ```
/// use android_logger::{Level, LoggerFactory};
/// use android_logger::sink::TracingSink;
/// use std::sync::Arc;
///
/// let factory = LoggerFactory::new(Arc::new(TracingSink));
/// factory.set_level(Level::Info);
///
/// let logger = factory.logger("MainActivity");
/// logger.info_arg("created, threshold {}", &factory.level());
/// ```
pub struct LoggerFactory {
    threshold: LevelHandle,
    sink: Arc<dyn Sink>,
}

impl LoggerFactory {
    /// Create a factory with the default threshold ([`Level::DEFAULT`]).
    pub fn new(sink: Arc<dyn Sink>) -> Self {
        Self::with_level(sink, Level::DEFAULT)
    }

    /// Create a factory with an explicit initial threshold.
    pub fn with_level(sink: Arc<dyn Sink>, level: Level) -> Self {
        Self {
            threshold: LevelHandle::new(level),
            sink,
        }
    }

    /// Create a logger bound to `tag`, the shared threshold, and the sink.
    pub fn logger(&self, tag: impl Into<String>) -> Logger {
        Logger::new(tag.into(), self.threshold.clone(), self.sink.clone())
    }

    /// Create a logger tagged with the name of `T`.
    ///
    /// Compile-time alternative to spelling out the tag string by hand.
    ///
    /// # Example
    ///
    /// ```
    /// use android_logger::LoggerFactory;
    /// use android_logger::sink::NoOpSink;
    /// use std::sync::Arc;
    ///
    /// struct SyncService;
    ///
    /// let factory = LoggerFactory::new(Arc::new(NoOpSink));
    /// let logger = factory.logger_for::<SyncService>();
    /// assert!(logger.tag().ends_with("SyncService"));
    /// ```
    pub fn logger_for<T: ?Sized>(&self) -> Logger {
        self.logger(any::type_name::<T>())
    }

    /// Current minimum level.
    pub fn level(&self) -> Level {
        self.threshold.get()
    }

    /// Overwrite the minimum level for every logger created by this factory.
    pub fn set_level(&self, level: Level) {
        self.threshold.set(level);
    }

    /// Handle to the shared threshold, for callers that gate work themselves.
    pub fn level_handle(&self) -> LevelHandle {
        self.threshold.clone()
    }

    /// Configure the minimum level from a properties resource.
    ///
    /// Searches `assets` depth-first for a file named
    /// [`PROPERTIES_FILE_NAME`] and reads its `log-level` key. The value must
    /// be one of `TRACE`, `DEBUG`, `INFO`, `WARN`, `ERROR`, `NONE`
    /// (case-sensitive).
    ///
    /// Failures never reach the caller: a missing file, an unreadable file,
    /// a missing key, or an invalid value each emit one diagnostic through
    /// the factory's sink under the `LoggerFactory` tag and leave the
    /// threshold at [`Level::DEFAULT`].
    pub fn load_level_from_properties(&self, assets: &dyn AssetSource) {
        self.threshold.set(self.level_from_properties(assets));
    }

    fn level_from_properties(&self, assets: &dyn AssetSource) -> Level {
        let path = match find_asset(assets, PROPERTIES_FILE_NAME) {
            Ok(Some(path)) => path,
            Ok(None) => {
                self.diagnose_warn(&format!(
                    "no properties file named '{PROPERTIES_FILE_NAME}' found, \
                     using default level '{}'",
                    Level::DEFAULT
                ));
                return Level::DEFAULT;
            }
            Err(err) => {
                self.diagnose_err(
                    &format!(
                        "error searching for '{PROPERTIES_FILE_NAME}', \
                         using default level '{}'",
                        Level::DEFAULT
                    ),
                    &err,
                );
                return Level::DEFAULT;
            }
        };

        let mut reader = match assets.open(&path) {
            Ok(reader) => reader,
            Err(err) => {
                self.diagnose_err(
                    &format!(
                        "error opening '{path}', using default level '{}'",
                        Level::DEFAULT
                    ),
                    &err,
                );
                return Level::DEFAULT;
            }
        };

        match properties::load_level(&mut reader) {
            Ok(level) => level,
            Err(err) => {
                self.diagnose_err(
                    &format!(
                        "no valid level in '{path}', using default level '{}'",
                        Level::DEFAULT
                    ),
                    &err,
                );
                Level::DEFAULT
            }
        }
    }

    // Factory diagnostics go straight to the sink and are not
    // threshold-gated.
    fn diagnose_warn(&self, message: &str) {
        self.sink.write(Level::Warn, FACTORY_TAG, message, None);
    }

    fn diagnose_err(&self, message: &str, error: &dyn std::error::Error) {
        self.sink.write(Level::Error, FACTORY_TAG, message, Some(error));
    }
}

impl Default for LoggerFactory {
    /// Factory writing to a [`TracingSink`] at the default threshold.
    fn default() -> Self {
        Self::new(Arc::new(TracingSink))
    }
}
