//! Parsing the `log-level` key out of a properties byte stream.
//!
//! Properties files are `key=value` lines, which the `ini` crate reads as the
//! sectionless general section.

use std::io::Read;

use ini::Ini;
use thiserror::Error;

use crate::level::{Level, ParseLevelError};

/// Recognized configuration key.
pub(crate) const LEVEL_KEY: &str = "log-level";

/// Failures while reading a properties stream.
///
/// Never escapes the crate: the factory converts these into a single sink
/// diagnostic and falls back to the default level.
#[derive(Debug, Error)]
pub(crate) enum PropertiesError {
    #[error("failed to read properties: {0}")]
    Read(#[from] ini::Error),

    #[error("no 'log-level' key in properties file")]
    MissingKey,

    #[error(transparent)]
    InvalidLevel(#[from] ParseLevelError),
}

/// Extract the configured level from a properties stream.
///
/// The value must match a level name exactly (case-sensitive).
pub(crate) fn load_level<R: Read>(reader: &mut R) -> Result<Level, PropertiesError> {
    let ini = Ini::read_from(reader)?;
    let value = ini
        .general_section()
        .get(LEVEL_KEY)
        .ok_or(PropertiesError::MissingKey)?;
    Ok(value.parse::<Level>()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(contents: &str) -> Result<Level, PropertiesError> {
        load_level(&mut Cursor::new(contents))
    }

    #[test]
    fn test_parses_each_level_name() {
        assert_eq!(parse("log-level=TRACE").unwrap(), Level::Trace);
        assert_eq!(parse("log-level=DEBUG").unwrap(), Level::Debug);
        assert_eq!(parse("log-level=INFO").unwrap(), Level::Info);
        assert_eq!(parse("log-level=WARN").unwrap(), Level::Warn);
        assert_eq!(parse("log-level=ERROR").unwrap(), Level::Error);
        assert_eq!(parse("log-level=NONE").unwrap(), Level::None);
    }

    #[test]
    fn test_ignores_unrelated_keys() {
        let contents = "app-name=demo\nlog-level=INFO\nretention-days=7\n";
        assert_eq!(parse(contents).unwrap(), Level::Info);
    }

    #[test]
    fn test_missing_key_is_an_error() {
        assert!(matches!(
            parse("app-name=demo\n"),
            Err(PropertiesError::MissingKey)
        ));
    }

    #[test]
    fn test_empty_stream_is_missing_key() {
        assert!(matches!(parse(""), Err(PropertiesError::MissingKey)));
    }

    #[test]
    fn test_lower_case_value_is_rejected() {
        assert!(matches!(
            parse("log-level=warn"),
            Err(PropertiesError::InvalidLevel(_))
        ));
    }

    #[test]
    fn test_unknown_value_is_rejected() {
        let err = parse("log-level=VERBOSE").unwrap_err();
        assert!(err.to_string().contains("'VERBOSE'"));
    }
}
