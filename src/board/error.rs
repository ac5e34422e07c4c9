//! Error types for board file operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors that can occur while loading, querying, or saving a board.
#[derive(Debug, Error)]
pub enum BoardError {
    /// Failed to open or read the board file.
    #[error("Failed to read board file: {path}")]
    FileRead {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Failed to write the board file.
    #[error("Failed to write board file: {path}")]
    FileWrite {
        /// Path to the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The board file is not valid JSON or does not match the board schema.
    #[error("Failed to parse board file: {path}")]
    Parse {
        /// Path to the file.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The board could not be serialised.
    #[error("Failed to serialise board")]
    Serialize {
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The existing board file could not be moved to its backup path.
    #[error("Failed to back up {path} to {backup}")]
    Backup {
        /// Board file being backed up.
        path: PathBuf,
        /// Backup destination.
        backup: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Component reference not present on the board.
    #[error("Component not found: {reference}")]
    ComponentNotFound {
        /// Reference designator that was not found.
        reference: String,
    },

    /// Net name not present on the board.
    #[error("Net not found: {name}")]
    NetNotFound {
        /// Net name that was not found.
        name: String,
    },

    /// Layer name not present in the layer table.
    #[error("Unknown layer: {name}")]
    UnknownLayer {
        /// Layer name that was requested.
        name: String,
    },

    /// The board contents are inconsistent.
    #[error("Invalid board: {message}")]
    Invalid {
        /// Description of what's wrong.
        message: String,
    },
}

impl BoardError {
    /// Creates a file read error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a file write error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }

    /// Creates a backup error.
    pub fn backup(path: impl Into<PathBuf>, backup: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Backup {
            path: path.into(),
            backup: backup.into(),
            source,
        }
    }

    /// Creates a component lookup error.
    pub fn component_not_found(reference: impl Into<String>) -> Self {
        Self::ComponentNotFound {
            reference: reference.into(),
        }
    }

    /// Creates a net lookup error.
    pub fn net_not_found(name: impl Into<String>) -> Self {
        Self::NetNotFound { name: name.into() }
    }

    /// Creates an unknown layer error.
    pub fn unknown_layer(name: impl Into<String>) -> Self {
        Self::UnknownLayer { name: name.into() }
    }

    /// Creates an invalid board error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}
