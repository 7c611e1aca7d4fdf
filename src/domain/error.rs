use std::io;

use thiserror::Error;

/// Library-wide error type for asset-launch operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Repository address is not of the form `name@location`.
    #[error("Invalid repository address '{0}': expected <repository>@<location>")]
    InvalidRepoAddress(String),

    /// Launch requested through a disabled control.
    #[error("Launch control for job '{0}' is disabled")]
    LaunchDisabled(String),

    /// The launch endpoint could not be reached or answered with a failure status.
    #[error("Launch request failed: {message}")]
    LaunchTransport { message: String, status: Option<u16> },

    /// The launch endpoint refused the run.
    #[error("Launch rejected ({kind}): {message}")]
    LaunchRejected { kind: String, message: String },

    /// JSON encoding failure.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::ParseError { .. }
            | AppError::InvalidRepoAddress(_)
            | AppError::Serialization(_) => io::ErrorKind::InvalidInput,
            AppError::LaunchDisabled(_) => io::ErrorKind::PermissionDenied,
            AppError::LaunchTransport { .. } | AppError::LaunchRejected { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
