//! Error types for the itinerary library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all itinerary operations.
///
/// Missing trips, buckets and items are deliberately absent from this enum:
/// those are reported as [`crate::engine::Mutation::Skipped`] or `None`
/// rather than as failures.
#[derive(Error, Debug)]
pub enum ItineraryError {
    /// Storage connection or query errors
    #[error("Storage error: {message}")]
    Storage {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// A write would exceed the storage quota
    #[error("Storage quota exceeded writing '{key}': {needed} bytes needed, limit is {limit}")]
    QuotaExceeded {
        key: String,
        needed: usize,
        limit: usize,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization errors when writing a stored value
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration and runtime errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating storage errors with optional context.
pub struct StorageErrorBuilder {
    message: String,
}

impl StorageErrorBuilder {
    /// Create a new storage error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> ItineraryError {
        ItineraryError::Storage {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ItineraryError {
        ItineraryError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ItineraryError {
    /// Creates a builder for storage errors.
    pub fn storage(message: impl Into<String>) -> StorageErrorBuilder {
        StorageErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether this error came from the persistence layer rather than from
    /// caller input.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(
            self,
            ItineraryError::Storage { .. }
                | ItineraryError::QuotaExceeded { .. }
                | ItineraryError::Serialization { .. }
                | ItineraryError::FileSystem { .. }
        )
    }
}

/// Extension trait for Result to provide concise error mapping with
/// anyhow-style context.
pub trait ResultExt<T, E> {
    /// Add context to any error type, converting to ItineraryError.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

/// Specialized extension trait for storage-related Results.
pub trait StorageResultExt<T> {
    /// Map storage errors with a message.
    fn storage_context(self, message: &str) -> Result<T>;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|e| ItineraryError::Configuration {
            message: format!("{context}: {e}"),
        })
    }
}

impl<T> StorageResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn storage_context(self, message: &str) -> Result<T> {
        self.map_err(|e| ItineraryError::storage(message).with_source(e))
    }
}

/// Result type alias for itinerary operations
pub type Result<T> = std::result::Result<T, ItineraryError>;
