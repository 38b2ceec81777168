//! Error types for `CourseBuddy`

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// `CourseBuddy` errors
#[derive(Error, Debug)]
pub enum Error {
    /// A course code that is not in the catalog. Recoverable: callers show
    /// a message and abort the current operation without writing anything.
    #[error("This course is not recognized. Please check your input. ({0})")]
    UnknownCourse(String),

    /// The feedback file is required but does not exist
    #[error("Feedback file not found: {}", .0.display())]
    FeedbackNotFound(PathBuf),

    /// The feedback file exists but is not valid feedback JSON
    #[error("Failed to parse feedback file {}: {source}", path.display())]
    FeedbackParse {
        /// File that failed to parse
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// The catalog definition is structurally invalid
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// The catalog file is not valid TOML for the catalog schema
    #[error("Catalog TOML error: {0}")]
    CatalogToml(#[from] toml::de::Error),

    /// A report could not be produced
    #[error("Report error: {0}")]
    Report(String),

    /// HTML template rendering failed
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the caller can report this error and carry on
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownCourse(_))
    }
}
