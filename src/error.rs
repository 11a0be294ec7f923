//! Error types for pagekit
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Cursor Errors (client input)
    // ============================================================================
    /// Client supplied an empty cursor token
    #[error("Empty cursor is invalid")]
    EmptyCursor,

    /// Client supplied a malformed cursor token
    #[error("Cursor {value} is invalid")]
    InvalidCursor { value: String },

    /// Client supplied an out-of-range pagination argument
    #[error("Invalid pagination argument '{argument}': {message}")]
    InvalidPaginationArgument { argument: String, message: String },

    // ============================================================================
    // Contract Errors (upstream data source)
    // ============================================================================
    /// The data source violated the paginator contract
    #[error("Collection returned by the collection data provider must implement the full or partial paginator capability.")]
    UnsupportedCollectionType,

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    /// Invalid pagination options
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// YAML options could not be parsed
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// JSON options could not be parsed
    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Serializer Boundary Errors
    // ============================================================================
    /// The item serializer failed
    #[error("Serialization failed: {message}")]
    Serialize { message: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    /// Catch-all error with a message
    #[error("{0}")]
    Other(String),

    /// Wrapped external error
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid cursor error echoing the offending raw token
    pub fn invalid_cursor(value: impl Into<String>) -> Self {
        Self::InvalidCursor {
            value: value.into(),
        }
    }

    /// Create an invalid pagination argument error
    pub fn argument(argument: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPaginationArgument {
            argument: argument.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a serializer boundary error
    pub fn serialize(message: impl Into<String>) -> Self {
        Self::Serialize {
            message: message.into(),
        }
    }

    /// Check if this error was caused by client-supplied input
    ///
    /// Client errors (malformed cursors, bad pagination arguments) should be
    /// surfaced as 4xx-class failures by the transport layer; everything else
    /// is a programming or configuration error on the server side.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::EmptyCursor
                | Error::InvalidCursor { .. }
                | Error::InvalidPaginationArgument { .. }
        )
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
