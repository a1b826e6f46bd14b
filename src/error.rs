//! Error types for solace-tools operations.
//!
//! This module defines [`SolaceError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - `Validation` aborts a write before any state changes
//! - `Parse` rejects a malformed backup file
//! - `Storage` covers the persistent key/value layer
//! - Use `anyhow::Error` (via `SolaceError::Other`) for unexpected errors
//!
//! Every error ends the user action that triggered it. Nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for solace-tools operations.
#[derive(Debug, Error)]
pub enum SolaceError {
    /// A required field was missing or empty.
    #[error("Validation failed: {message}")]
    Validation { message: String },

    /// No saved result with the given id.
    #[error("Result not found: {id}")]
    NotFound { id: String },

    /// Backup payload could not be parsed.
    #[error("Failed to parse backup: {message}")]
    Parse { message: String },

    /// Persistent storage could not be read or written.
    #[error("Storage error: {message}")]
    Storage { message: String },

    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SolaceError {
    /// Build a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Build a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Result type alias for solace-tools operations.
pub type Result<T> = std::result::Result<T, SolaceError>;
