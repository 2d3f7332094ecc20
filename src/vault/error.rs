//! Vault error types.

use std::io;
use thiserror::Error;

/// Errors surfaced by a [`VaultAdapter`](super::VaultAdapter).
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("failed to {op} `{path}`")]
    Io {
        op: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("path `{0}` escapes the vault root")]
    InvalidPath(String),
}

impl VaultError {
    /// Wrap an I/O error with the operation and vault path that caused it.
    pub fn io(op: &'static str, path: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.into(),
            source,
        }
    }

    /// Build an I/O error of the given kind without an underlying OS error.
    pub fn kind_error(op: &'static str, path: impl Into<String>, kind: io::ErrorKind) -> Self {
        Self::io(op, path, io::Error::from(kind))
    }

    /// Underlying I/O error kind.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
            Self::InvalidPath(_) => io::ErrorKind::InvalidInput,
        }
    }
}

pub type Result<T> = std::result::Result<T, VaultError>;
