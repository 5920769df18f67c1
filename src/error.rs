//! Error types for po2lmo
//!
//! Provides a unified error type for parsing and encoding.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias using Po2LmoError
pub type Result<T> = std::result::Result<T, Po2LmoError>;

/// Unified error type for po2lmo operations
#[derive(Debug, Error)]
pub enum Po2LmoError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Cannot open input file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write to output file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // -------------------------------------------------------------------------
    // Parse Errors
    // -------------------------------------------------------------------------
    #[error("Parse error at line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Duplicate msgid {key:?} at line {line} (first defined at line {first_line})")]
    DuplicateKey {
        key: String,
        first_line: usize,
        line: usize,
    },

    // -------------------------------------------------------------------------
    // Encode Errors
    // -------------------------------------------------------------------------
    #[error("Entry too large: translation of {key:?} is {len} bytes")]
    EntryTooLarge { key: String, len: usize },

    #[error("Data section too large: {size} bytes exceeds the 32-bit offset range")]
    DataTooLarge { size: u64 },

    #[error("Hash collision: {first:?} and {second:?} both hash to 0x{hash:08x}")]
    HashCollision {
        hash: u32,
        first: String,
        second: String,
    },
}

impl Po2LmoError {
    /// Build a parse error for the given 1-based line
    pub(crate) fn parse(line: usize, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            reason: reason.into(),
        }
    }

    /// Wrap a failure reading `path`
    pub(crate) fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap a failure writing `path`
    pub(crate) fn write(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Source line the error points at, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Parse { line, .. } | Self::DuplicateKey { line, .. } => Some(*line),
            _ => None,
        }
    }
}
