/*!
 * Error types for the ccremover application.
 *
 * `CleanError` is what the per-file cleaning pipeline reports. It keeps the
 * read and write failure kinds apart from the legitimate "no captions" outcome,
 * and a write failure still carries the captions that were extracted.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while cleaning a single subtitle file
#[derive(Error, Debug)]
pub enum CleanError {
    /// The input file could not be opened, read or decoded
    #[error("Failed to read subtitle file {path:?}: {source}")]
    Read {
        /// Input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Captions were extracted but the rebuilt file could not be written
    #[error("Failed to write cleaned subtitle file {path:?}: {source}")]
    Write {
        /// Destination file
        path: PathBuf,
        /// Captions extracted before the write failed
        captions: Vec<String>,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl CleanError {
    /// Captions extracted before the failure (always empty for read errors)
    pub fn captions(&self) -> &[String] {
        match self {
            Self::Read { .. } => &[],
            Self::Write { captions, .. } => captions,
        }
    }

    /// Path of the file the failure is about
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Write { path, .. } => path,
        }
    }
}

/// Batch-level application errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(format!("{:#}", error))
    }
}
