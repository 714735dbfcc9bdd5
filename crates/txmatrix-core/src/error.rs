//! Error types for version table construction and loading.

use std::path::PathBuf;

/// Errors that can occur while building or loading a version table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error reading a table file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Table file not found.
    #[error("table file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// A version entry lacks a required field.
    #[error("version '{version}' is missing required field `{field}`")]
    MissingField {
        /// The offending version key.
        version: String,
        /// Name of the absent field.
        field: &'static str,
    },

    /// A version entry lists no operating systems.
    #[error("version '{version}' lists no operating systems")]
    EmptyOses {
        /// The offending version key.
        version: String,
    },

    /// A string field is empty or whitespace only.
    #[error("version '{version}' has a blank `{field}`")]
    Blank {
        /// The offending version key (empty when the key itself is blank).
        version: String,
        /// Name of the blank field.
        field: &'static str,
    },

    /// The same version key was inserted twice.
    #[error("version '{version}' is declared more than once")]
    DuplicateVersion {
        /// The repeated version key.
        version: String,
    },
}

impl TableError {
    /// The version key this error refers to, if any.
    pub fn version(&self) -> Option<&str> {
        match self {
            TableError::MissingField { version, .. }
            | TableError::EmptyOses { version }
            | TableError::Blank { version, .. }
            | TableError::DuplicateVersion { version } => Some(version.as_str()),
            _ => None,
        }
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
