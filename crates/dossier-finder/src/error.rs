//! Error types for the Finder

use dossier_domain::QcodeError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from the query template store
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Named template is not in the store
    #[error("query template not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Template exists but could not be read
    #[error("failed to read query template {}: {source}", .path.display())]
    Io {
        /// Path that failed to read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

/// Errors that can occur during a lookup
///
/// Nothing here is recoverable: any failure aborts the current lookup and
/// surfaces to the caller. There is no partial report.
#[derive(Error, Debug)]
pub enum FinderError {
    /// Input failed the identifier syntax check; the lookup never started
    #[error("invalid identifier: {0}")]
    InvalidQcode(#[from] QcodeError),

    /// Query template missing or unreadable
    #[error("query template error: {0}")]
    Template(#[from] TemplateError),

    /// Transport-level or empty-result failure from the graph endpoint
    #[error("endpoint failure: {0}")]
    Endpoint(String),

    /// A field did not match the upstream timestamp or JSON array shape
    #[error("malformed field {field:?}: {detail} (value: {value:?})")]
    MalformedField {
        /// Name of the offending result field
        field: String,
        /// The value that failed to parse
        value: String,
        /// What was expected
        detail: String,
    },
}
