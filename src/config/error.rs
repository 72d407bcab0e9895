//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Malformed config: `{field}`: {reason}")]
    Malformed { field: String, reason: String },
}

impl ConfigError {
    /// Build a `Malformed` error naming the offending field.
    pub fn malformed(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let malformed = ConfigError::malformed("site.title", "required field is empty");
        let display = format!("{malformed}");
        assert!(display.contains("site.title"));
        assert!(display.contains("required field is empty"));
    }

    #[test]
    fn test_malformed_keeps_field_name() {
        let err = ConfigError::malformed("scan.content", "must list at least one glob");
        match err {
            ConfigError::Malformed { field, .. } => assert_eq!(field, "scan.content"),
            _ => panic!("expected Malformed"),
        }
    }
}
