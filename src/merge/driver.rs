//! Per-row merge driver.

use super::context::MergeContext;
use super::options::MergeOptions;
use super::report::{MergeOutput, MergeStats, RowFailure};
use super::walker::walk_document;
use crate::data::{Dataset, Row};
use crate::error::RowError;
use crate::model::Document;
use crate::scan::Scanner;
use regex::Regex;
use std::sync::OnceLock;

/// Yields independent working copies of the template document.
///
/// Implemented by [`Document`] itself via deep clone. External
/// collaborators that materialize templates lazily implement this to
/// surface per-row instantiation failures, which are recorded without
/// aborting the batch.
pub trait TemplateSource: Sync {
    /// Produce a fresh copy of the template.
    ///
    /// Mutating the returned document must never affect the source or
    /// any other copy.
    fn instantiate(&self) -> Result<Document, RowError>;
}

impl TemplateSource for Document {
    fn instantiate(&self) -> Result<Document, RowError> {
        Ok(self.clone())
    }
}

/// Merge one row into a fresh copy of the template.
///
/// The key column must carry a value in this row; its formatted form
/// names the output. A document produced with zero substitutions is
/// still a success and is surfaced as a warning by the batch.
pub fn merge_row<T: TemplateSource + ?Sized>(
    template: &T,
    dataset: &Dataset,
    row: &Row,
    index: usize,
    key_column: &str,
    options: &MergeOptions,
    scanner: &Scanner,
) -> Result<MergeOutput, RowFailure> {
    let key_value = row.get(key_column).ok_or_else(|| RowFailure {
        row: index,
        error: RowError::KeyColumnAbsent(key_column.to_string()),
    })?;

    let mut document = template
        .instantiate()
        .map_err(|error| RowFailure { row: index, error })?;

    let context = MergeContext::new(dataset.columns(), row, options.trim_values);
    let mut stats = MergeStats::new();
    let total = walk_document(&mut document, &context, scanner, &mut stats);

    if total == 0 {
        log::warn!("row {index}: document produced with zero substitutions");
    }

    let identifier = derive_identifier(&key_value.to_merge_string(), index);

    Ok(MergeOutput {
        row: index,
        identifier,
        document,
        stats,
    })
}

/// Derive a filename-safe identifier from the formatted key value.
///
/// The ordinal suffix keeps identifiers unique when multiple rows share
/// a key value; an empty or fully stripped key falls back to a synthetic
/// name from the row's position alone.
fn derive_identifier(key_value: &str, index: usize) -> String {
    let base = sanitize_fragment(key_value);
    if base.is_empty() {
        format!("document_{index}")
    } else {
        format!("{base}_{index}")
    }
}

fn sanitize_fragment(value: &str) -> String {
    static NON_IDENTIFIER: OnceLock<Regex> = OnceLock::new();
    let re = NON_IDENTIFIER.get_or_init(|| Regex::new(r"[^A-Za-z0-9_.\-]+").unwrap());
    re.replace_all(value.trim(), "_")
        .trim_matches(|c| c == '_' || c == '.' || c == '-')
        .to_string()
}
