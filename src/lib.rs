//! # docmerge
//!
//! Template-driven document generation ("mail merge") for Rust.
//!
//! Given a rich-text template whose text is fragmented across
//! independently styled runs and a tabular dataset, docmerge produces
//! one completed document per data row: placeholder tokens (`«Name»`,
//! `<<Name>>`, `<Name>`, `{Name}`) are located across run boundaries,
//! resolved to dataset columns under exact, case-insensitive, and fuzzy
//! naming, and substituted with the row's formatted values while the
//! document's paragraph and table structure is preserved.
//!
//! ## Quick Start
//!
//! ```
//! use docmerge::{merge, Dataset, Document, Paragraph, Row};
//!
//! let mut template = Document::new();
//! template.add_paragraph(Paragraph::with_text("Dear «First_Name» «Last_Name»,"));
//!
//! let mut dataset = Dataset::new(["First Name", "Last Name"]);
//! dataset.add_row(Row::new().with("First Name", "Ada").with("Last Name", "Lovelace"));
//!
//! let batch = merge(&template, &dataset, "Last Name")?;
//! assert_eq!(batch.outputs[0].identifier, "Lovelace_0");
//! assert_eq!(batch.outputs[0].document.plain_text(), "Dear Ada Lovelace,");
//! # Ok::<(), docmerge::Error>(())
//! ```
//!
//! ## Features
//!
//! - **Fragment-aware matching**: placeholders split across runs are
//!   spliced back together before substitution
//! - **Multiple syntaxes**: one ordered, configurable delimiter list
//!   instead of per-call-site pattern code
//! - **Fuzzy column resolution**: case-, space-, and
//!   underscore-insensitive, with a deterministic declared-order
//!   tie-break
//! - **Recursive traversal**: tables nested to arbitrary depth
//! - **Parallel batches**: rows merge independently via Rayon
//! - **Structured diagnostics**: per-row stats, warnings, and a JSON
//!   report instead of ambient debug state

pub mod data;
pub mod error;
pub mod merge;
pub mod model;
pub mod scan;

// Re-export commonly used types
pub use data::{CellValue, Dataset, Row};
pub use error::{Error, Result, RowError};
pub use merge::{
    merge_batch, BatchOutput, MergeOptions, MergeOutput, MergeStats, RowFailure, TemplateSource,
    Warning,
};
pub use model::{Block, Document, Paragraph, Run, RunStyle, Table, TableCell, TableRow};
pub use scan::{default_delimiters, DelimiterPair, PlaceholderToken, Scanner};

/// Merge every dataset row against the template with default options.
///
/// # Arguments
///
/// * `template` - The read-only template master
/// * `dataset` - Rows to merge, in natural order
/// * `key_column` - Column whose formatted value names each output
///
/// # Example
///
/// ```
/// use docmerge::{merge, Dataset, Document, Paragraph, Row};
///
/// let mut template = Document::new();
/// template.add_paragraph(Paragraph::with_text("Hi «Name»"));
///
/// let mut dataset = Dataset::new(["Name"]);
/// dataset.add_row(Row::new().with("Name", "Ada"));
///
/// let batch = merge(&template, &dataset, "Name")?;
/// assert_eq!(batch.success_count(), 1);
/// # Ok::<(), docmerge::Error>(())
/// ```
pub fn merge<T: TemplateSource + ?Sized>(
    template: &T,
    dataset: &Dataset,
    key_column: &str,
) -> Result<BatchOutput> {
    merge_batch(template, dataset, key_column, &MergeOptions::default())
}

/// Builder for configuring and running merge batches.
///
/// # Example
///
/// ```no_run
/// use docmerge::{Dataset, DelimiterPair, Document, Merger};
///
/// # let template = Document::new();
/// # let dataset = Dataset::new(["Name"]);
/// let batch = Merger::new()
///     .sequential()
///     .with_bare_words(true)
///     .with_delimiters(vec![DelimiterPair::new("[[", "]]")])
///     .merge(&template, &dataset, "Name")?;
/// # Ok::<(), docmerge::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Merger {
    options: MergeOptions,
}

impl Merger {
    /// Create a new merger with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the scanner's delimiter pairs.
    pub fn with_delimiters(mut self, delimiters: Vec<DelimiterPair>) -> Self {
        self.options = self.options.with_delimiters(delimiters);
        self
    }

    /// Enable the bare-word fallback.
    pub fn with_bare_words(mut self, enabled: bool) -> Self {
        self.options = self.options.with_bare_words(enabled);
        self
    }

    /// Disable parallel row processing.
    pub fn sequential(mut self) -> Self {
        self.options = self.options.sequential();
        self
    }

    /// Strip surrounding whitespace from formatted values.
    pub fn with_trim_values(mut self, trim: bool) -> Self {
        self.options = self.options.with_trim_values(trim);
        self
    }

    /// Get the configured options.
    pub fn options(&self) -> &MergeOptions {
        &self.options
    }

    /// Run the batch.
    pub fn merge<T: TemplateSource + ?Sized>(
        &self,
        template: &T,
        dataset: &Dataset,
        key_column: &str,
    ) -> Result<BatchOutput> {
        merge_batch(template, dataset, key_column, &self.options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merger_builder() {
        let merger = Merger::new().sequential().with_bare_words(true);
        assert!(!merger.options().parallel);
        assert!(merger.options().bare_words);
    }

    #[test]
    fn test_merge_convenience() {
        let mut template = Document::new();
        template.add_paragraph(Paragraph::with_text("«Name»"));

        let mut dataset = Dataset::new(["Name"]);
        dataset.add_row(Row::new().with("Name", "Ada"));

        let batch = merge(&template, &dataset, "Name").unwrap();
        assert_eq!(batch.outputs[0].document.plain_text(), "Ada");
    }
}
