//! Error types for the maxline dashboard.

use thiserror::Error;

/// The main error type for maxline.
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Low-level transport failures (connect, TLS, body read).
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success HTTP status. The body text is the message.
    #[error("{body}")]
    Http { status: u16, body: String },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input or state
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic application error
    #[error("{0}")]
    Application(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new HTTP status error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create a new application error.
    pub fn application(msg: impl Into<String>) -> Self {
        Self::Application(msg.into())
    }

    /// Check if this error is recoverable (the next poll may succeed).
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Http { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_message_is_body_verbatim() {
        let err = Error::http(503, "Failed to load market data: NetworkError");
        assert_eq!(err.to_string(), "Failed to load market data: NetworkError");
    }

    #[test]
    fn test_recoverable() {
        assert!(Error::http(503, "down").is_recoverable());
        assert!(Error::http(429, "slow down").is_recoverable());
        assert!(!Error::http(400, "bad timeframe").is_recoverable());
        assert!(!Error::config("missing").is_recoverable());
    }
}
