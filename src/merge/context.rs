//! Per-row merge context.

use crate::data::Row;
use crate::scan::{resolve, ColumnEntry};

/// One row's columns, formatted and prepared for matching.
///
/// Entries follow the dataset's declared column order; that order is the
/// resolver's tie-break. Columns the row structurally lacks are skipped,
/// so tokens naming them stay unresolved for this row.
#[derive(Debug, Clone)]
pub struct MergeContext {
    entries: Vec<ColumnEntry>,
}

impl MergeContext {
    /// Build the context for one row.
    pub fn new(columns: &[String], row: &Row, trim_values: bool) -> Self {
        let entries = columns
            .iter()
            .filter_map(|column| {
                row.get(column).map(|value| {
                    let mut formatted = value.to_merge_string();
                    if trim_values {
                        formatted = formatted.trim().to_string();
                    }
                    ColumnEntry::new(column.as_str(), formatted)
                })
            })
            .collect();

        Self { entries }
    }

    /// The prepared column entries in declared order.
    pub fn entries(&self) -> &[ColumnEntry] {
        &self.entries
    }

    /// Resolve a token name against this row's columns.
    pub fn resolve(&self, token: &str) -> Option<&ColumnEntry> {
        resolve(token, &self.entries)
    }
}
