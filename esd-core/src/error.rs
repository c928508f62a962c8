//! Error types for esd-core.

use thiserror::Error;

/// Result type alias using esd-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for directory operations
#[derive(Error, Debug)]
pub enum Error {
    // Context errors
    #[error("operation cancelled")]
    Cancelled,

    #[error("deadline exceeded")]
    DeadlineExceeded,

    // Directory errors
    #[error("session already exists: {0}")]
    SessionExists(String),

    #[error("invalid scan cursor: {0}")]
    InvalidCursor(u64),

    // Backing store errors
    #[error("store error: {0}")]
    Store(String),

    // Config errors
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an error from a backing-store failure
    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// True for errors raised by the operation's context rather than the
    /// operation itself. These are always safe to retry with a fresh context.
    pub fn is_context(&self) -> bool {
        matches!(self, Self::Cancelled | Self::DeadlineExceeded)
    }
}
