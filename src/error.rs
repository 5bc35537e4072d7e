//! Error types for UXRay operations.
//!
//! This module defines [`UxrayError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `UxrayError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `UxrayError::Other`) for unexpected errors
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for UXRay operations.
#[derive(Debug, Error)]
pub enum UxrayError {
    /// Source file could not be read.
    #[error("Cannot read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    /// Source file could not be parsed into a markup tree.
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: PathBuf, message: String },

    /// Report format string not recognized.
    #[error("Unknown report format: {format} (expected json or md)")]
    UnknownFormat { format: String },

    /// Report file could not be written.
    #[error("Failed to write report to {path}: {message}")]
    ExportError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for UXRay operations.
pub type Result<T> = std::result::Result<T, UxrayError>;
