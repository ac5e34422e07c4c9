//! Error types for triangle-layout.
//!
//! Board file errors live in [`crate::board::error`]; this module covers
//! configuration and the layout/maintenance operations built on top of it.

use std::path::PathBuf;

use thiserror::Error;

use crate::board::BoardError;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Errors that can occur while laying out or maintaining a board.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// A board lookup or file operation failed.
    #[error(transparent)]
    Board(#[from] BoardError),

    /// A pad named in the pad map is missing from a component.
    #[error("component {reference} has no pad '{pad}' required by the pad map")]
    MissingPad {
        /// Component reference.
        reference: String,
        /// Pad name that was not found.
        pad: String,
    },

    /// The triangle has more components per edge than can be laid out.
    #[error("triangle side {side} is out of range (at most {max} components per edge)")]
    SideOutOfRange {
        /// Requested components per edge.
        side: usize,
        /// Largest supported value.
        max: usize,
    },

    /// The selected operation is disabled.
    #[error("{operation} is disabled: {reason}")]
    OperationDisabled {
        /// Operation that was requested.
        operation: &'static str,
        /// Why it cannot run.
        reason: &'static str,
    },
}

/// Result type for layout operations.
pub type LayoutResult<T> = Result<T, LayoutError>;
