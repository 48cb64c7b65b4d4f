//! Tabular dataset abstraction.
//!
//! A dataset is an ordered sequence of rows, each mapping column names to
//! typed [`CellValue`]s. The declared column order matters: it drives the
//! resolver's tie-break when two columns collide under fuzzy matching,
//! and row order determines output ordering and naming.

mod value;

pub use value::CellValue;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An ordered collection of rows with a declared column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    /// Column names in declared order
    columns: Vec<String>,

    /// Rows in natural order
    rows: Vec<Row>,
}

impl Dataset {
    /// Create a new empty dataset with the given column order.
    pub fn new<S: Into<String>>(columns: impl IntoIterator<Item = S>) -> Self {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the declared column names in order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Check if a column is declared.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    /// Get the rows in natural order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One dataset row: a mapping from column name to value.
///
/// A row may structurally lack a declared column; tokens resolving to
/// such a column stay unresolved for that row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Row {
    values: HashMap<String, CellValue>,
}

impl Row {
    /// Create a new empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from (column, value) pairs.
    pub fn from_pairs<S, V>(pairs: impl IntoIterator<Item = (S, V)>) -> Self
    where
        S: Into<String>,
        V: Into<CellValue>,
    {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Set a column value, returning self for chaining.
    pub fn with(mut self, column: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.values.insert(column.into(), value.into());
        self
    }

    /// Set a column value.
    pub fn set(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.values.insert(column.into(), value.into());
    }

    /// Get a column value, if present in this row.
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.values.get(column)
    }

    /// Check if the row carries a value for a column.
    pub fn contains(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    /// Get the number of values in the row.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
