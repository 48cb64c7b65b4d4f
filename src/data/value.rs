//! Typed cell values and their merge-ready string forms.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single dataset cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum CellValue {
    /// Text content
    Text(String),

    /// Numeric content
    Number(f64),

    /// Date-time content
    Date(NaiveDateTime),

    /// Missing value (empty cell, NaN-equivalent)
    Missing,
}

impl CellValue {
    /// Convert the value into its merge-ready string form.
    ///
    /// Dates format as zero-padded `DD/MM/YYYY`, missing values become
    /// the empty string, text and numbers use their natural display
    /// form. Every value has a defined string form; this never fails.
    pub fn to_merge_string(&self) -> String {
        match self {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Date(dt) => dt.format("%d/%m/%Y").to_string(),
            CellValue::Missing => String::new(),
        }
    }

    /// Check if the value is missing.
    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_merge_string())
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::Date(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(CellValue::Missing)
    }
}
