//! Merge results, statistics, and diagnostics.
//!
//! Match tracing that used to live in ambient debug state is carried
//! here instead: each row accumulates a [`MergeStats`], and the batch
//! derives warnings from the collected outcomes.

use crate::error::{Result, RowError};
use crate::model::Document;
use serde::{Deserialize, Serialize};

/// Statistics collected while merging one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MergeStats {
    /// Number of substitutions performed
    pub substitutions: u32,

    /// Number of paragraphs visited
    pub paragraph_count: u32,

    /// Number of tables visited (nested tables included)
    pub table_count: u32,

    /// Names of delimited tokens that resolved to no column
    pub unresolved: Vec<String>,
}

impl MergeStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an unresolved delimited token.
    pub fn record_unresolved(&mut self, name: &str) {
        if !self.unresolved.iter().any(|n| n == name) {
            self.unresolved.push(name.to_string());
        }
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &MergeStats) {
        self.substitutions += other.substitutions;
        self.paragraph_count += other.paragraph_count;
        self.table_count += other.table_count;
        for name in &other.unresolved {
            self.record_unresolved(name);
        }
    }
}

/// One successfully merged row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeOutput {
    /// The row's ordinal index in the dataset
    pub row: usize,

    /// Identifier derived from the key column, unique within the batch
    pub identifier: String,

    /// The completed document
    pub document: Document,

    /// Statistics for this row's merge
    pub stats: MergeStats,
}

/// One failed row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    /// The row's ordinal index in the dataset
    pub row: usize,

    /// Why the row failed
    pub error: RowError,
}

/// A non-fatal observation surfaced for observability.
///
/// Warnings never alter output content; unresolved placeholders remain
/// literally in the merged text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// A merged document received zero substitutions
    NoSubstitutions {
        /// Row index
        row: usize,
    },

    /// A scanned placeholder resolved to no column
    UnresolvedPlaceholder {
        /// Row index
        row: usize,
        /// The token name as scanned
        name: String,
    },
}

/// The aggregated outcome of a merge batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchOutput {
    /// Completed documents in dataset row order
    pub outputs: Vec<MergeOutput>,

    /// Recorded per-row failures
    pub failures: Vec<RowFailure>,
}

impl BatchOutput {
    /// Number of rows that merged successfully.
    pub fn success_count(&self) -> usize {
        self.outputs.len()
    }

    /// Number of rows that failed.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Derive the batch's warnings from the collected outcomes.
    pub fn warnings(&self) -> Vec<Warning> {
        let mut warnings = Vec::new();
        for output in &self.outputs {
            if output.stats.substitutions == 0 {
                warnings.push(Warning::NoSubstitutions { row: output.row });
            }
            for name in &output.stats.unresolved {
                warnings.push(Warning::UnresolvedPlaceholder {
                    row: output.row,
                    name: name.clone(),
                });
            }
        }
        warnings
    }

    /// Serialize a JSON report of the batch (identifiers, stats,
    /// failures, warnings) without the documents themselves.
    pub fn report_json(&self) -> Result<String> {
        #[derive(Serialize)]
        struct RowReport<'a> {
            row: usize,
            identifier: &'a str,
            substitutions: u32,
            unresolved: &'a [String],
        }

        #[derive(Serialize)]
        struct Report<'a> {
            succeeded: usize,
            failed: usize,
            rows: Vec<RowReport<'a>>,
            failures: &'a [RowFailure],
            warnings: Vec<Warning>,
        }

        let report = Report {
            succeeded: self.success_count(),
            failed: self.failure_count(),
            rows: self
                .outputs
                .iter()
                .map(|o| RowReport {
                    row: o.row,
                    identifier: &o.identifier,
                    substitutions: o.stats.substitutions,
                    unresolved: &o.stats.unresolved,
                })
                .collect(),
            failures: &self.failures,
            warnings: self.warnings(),
        };

        Ok(serde_json::to_string_pretty(&report)?)
    }
}
