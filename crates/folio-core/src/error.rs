//! Error types for the folio application.

use thiserror::Error;

/// A shared error type for the entire folio application.
///
/// These are infrastructure-level failures (I/O, malformed documents).
/// User-visible conditions like "unknown command" or "no previous page" are
/// not errors; the session surfaces them as ordinary render output.
#[derive(Error, Debug, Clone)]
pub enum FolioError {
    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FolioError {
    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }
}

impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, FolioError>`.
pub type Result<T> = std::result::Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_helper() {
        let err = FolioError::config("cannot find config directory");
        assert_eq!(
            err.to_string(),
            "Configuration error: cannot find config directory"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: FolioError = io.into();
        assert!(err.is_io());
    }

    #[test]
    fn test_toml_conversion() {
        let parse_err = toml::from_str::<toml::Value>("not = = toml").unwrap_err();
        let err: FolioError = parse_err.into();
        assert!(matches!(err, FolioError::Serialization { .. }));
    }
}
