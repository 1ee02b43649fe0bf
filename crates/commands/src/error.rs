//! Errors raised while building benchmark commands.

use std::path::PathBuf;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// A parameter failed validation. Nothing is built when this is returned.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl CommandError {
    pub fn invalid(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// True for the `InvalidArgument` kind.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message() {
        let err = CommandError::invalid("keypair", "must not be empty");
        assert_eq!(
            err.to_string(),
            "invalid argument `keypair`: must not be empty"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_io_is_not_invalid_argument() {
        let err = CommandError::Io {
            path: PathBuf::from("bench.json"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(!err.is_invalid_argument());
        assert!(err.to_string().starts_with("failed to read config bench.json"));
    }
}
