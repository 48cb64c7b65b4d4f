//! Merge options and configuration.

use crate::scan::{default_delimiters, DelimiterPair};

/// Options controlling a merge batch.
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// Delimiter pairs recognized by the scanner, in precedence order
    pub delimiters: Vec<DelimiterPair>,

    /// Treat bare words as candidate tokens when a text contains no
    /// delimited token (resolver last-resort pass)
    pub bare_words: bool,

    /// Whether to merge rows in parallel
    pub parallel: bool,

    /// Strip surrounding whitespace from formatted values
    pub trim_values: bool,
}

impl MergeOptions {
    /// Create new merge options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the delimiter pairs, replacing the defaults.
    pub fn with_delimiters(mut self, delimiters: Vec<DelimiterPair>) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Enable or disable the bare-word fallback.
    pub fn with_bare_words(mut self, enabled: bool) -> Self {
        self.bare_words = enabled;
        self
    }

    /// Enable or disable parallel row processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Disable parallel row processing.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Enable or disable trimming of formatted values.
    pub fn with_trim_values(mut self, trim: bool) -> Self {
        self.trim_values = trim;
        self
    }
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            delimiters: default_delimiters(),
            bare_words: false,
            parallel: true,
            trim_values: false,
        }
    }
}
