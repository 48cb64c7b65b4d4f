//! Error types for the docmerge library.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for docmerge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Batch-level errors.
///
/// These abort the whole merge: either a configuration problem detected
/// before any row is processed, or an aggregate failure afterwards.
/// Per-row problems are [`RowError`] and never abort the batch.
#[derive(Error, Debug)]
pub enum Error {
    /// The chosen key column does not exist in the dataset.
    #[error("key column '{0}' is not present in the dataset")]
    KeyColumnMissing(String),

    /// The dataset contains no rows.
    #[error("dataset contains no rows")]
    EmptyDataset,

    /// Every row failed to merge.
    #[error("no rows merged successfully ({failed} failed)")]
    NoRowsSucceeded {
        /// Number of rows that failed
        failed: usize,
    },

    /// Error serializing the batch report.
    #[error("report serialization error: {0}")]
    Report(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Report(err.to_string())
    }
}

/// Errors scoped to a single row.
///
/// A row failing is recorded and the batch continues with the remaining
/// rows.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowError {
    /// The key column has no value in this row.
    #[error("key column '{0}' is absent from this row")]
    KeyColumnAbsent(String),

    /// The template could not be instantiated for this row.
    #[error("failed to instantiate the template: {0}")]
    TemplateCopy(String),
}
