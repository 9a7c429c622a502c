//! Error types for marker-core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in marker-core
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV error tied to a specific sheet file
    #[error("CSV error in '{path}': {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// CSV error with no file context (in-memory reader/writer)
    #[error("CSV error: {0}")]
    CsvWrite(#[from] csv::Error),

    /// A sheet is missing one of the required columns
    #[error("sheet '{path}' is missing required column '{column}'")]
    MissingColumn { path: PathBuf, column: String },

    /// No spreadsheet file could be auto-detected in a directory
    #[error("no CSV sheet found in '{0}'")]
    NoSheetFound(PathBuf),

    /// Directory traversal error
    #[error("failed to traverse directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
