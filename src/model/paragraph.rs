//! Paragraph and run types.

use serde::{Deserialize, Serialize};

/// A paragraph of template text.
///
/// A paragraph's logical text is the concatenation of its runs' text in
/// order. A placeholder token may span a run boundary, which is why the
/// engine splices runs together before matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Text runs in the paragraph
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Create a paragraph holding one plain run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![Run::new(text)],
        }
    }

    /// Append a run.
    pub fn add_run(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Append a plain text run.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.runs.push(Run::new(text));
    }

    /// Logical text: the concatenation of run texts in order.
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Drop all runs.
    pub fn clear_runs(&mut self) {
        self.runs.clear();
    }

    /// Check if the paragraph has no text content.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}

impl Default for Paragraph {
    fn default() -> Self {
        Self::new()
    }
}

/// A contiguous span of text sharing one formatting attribute set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Run {
    /// The text content
    pub text: String,

    /// Formatting attributes, opaque to the substitution engine
    pub style: RunStyle,
}

impl Run {
    /// Create a new run with default style.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: RunStyle::default(),
        }
    }

    /// Create a run with an explicit style.
    pub fn styled(text: impl Into<String>, style: RunStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Check if this run is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Formatting attributes of a run.
///
/// The engine carries these through untouched. The only documented loss
/// is the run collapse after a spliced substitution, where a paragraph's
/// runs are replaced by a single run inheriting the first run's style.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStyle {
    /// Bold text
    pub bold: bool,

    /// Italic text
    pub italic: bool,

    /// Underlined text
    pub underline: bool,

    /// Font name
    pub font_name: Option<String>,

    /// Font size in points
    pub font_size: Option<f32>,

    /// Text color (hex format, e.g., "#FF0000")
    pub color: Option<String>,
}

impl RunStyle {
    /// Check if any styling is applied.
    pub fn has_styling(&self) -> bool {
        self.bold
            || self.italic
            || self.underline
            || self.font_name.is_some()
            || self.font_size.is_some()
            || self.color.is_some()
    }
}
