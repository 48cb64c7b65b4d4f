//! Placeholder token scanner.
//!
//! Templates accumulated several placeholder syntaxes over time:
//! guillemets (`«Name»`), double and single angle brackets (`<<Name>>`,
//! `<Name>`), and braces (`{Name}`). The scanner unifies them behind one
//! ordered list of delimiter pairs; earlier pairs claim their span first,
//! so `«»` beats `<<>>` beats `<>` when they could overlap.

use serde::{Deserialize, Serialize};

/// An open/close delimiter pair recognized by the scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelimiterPair {
    /// Opening delimiter
    pub open: String,

    /// Closing delimiter
    pub close: String,
}

impl DelimiterPair {
    /// Create a new delimiter pair.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }
}

/// The default delimiter pairs, in precedence order.
pub fn default_delimiters() -> Vec<DelimiterPair> {
    vec![
        DelimiterPair::new("«", "»"),
        DelimiterPair::new("<<", ">>"),
        DelimiterPair::new("<", ">"),
        DelimiterPair::new("{", "}"),
    ]
}

/// How a token was recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Enclosed in one of the configured delimiter pairs
    Delimited,

    /// A bare whitespace-delimited word (fallback mode only)
    Bare,
}

/// A placeholder token found in scanned text.
///
/// `start..end` is the byte span of the full delimited form (or the bare
/// word) in the scanned string. Tokens are transient; they live for one
/// substitution pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceholderToken {
    /// The inner name, trimmed
    pub name: String,

    /// Byte offset of the token start (including the open delimiter)
    pub start: usize,

    /// Byte offset one past the token end (including the close delimiter)
    pub end: usize,

    /// How the token was recognized
    pub kind: TokenKind,
}

impl PlaceholderToken {
    /// The token's original text within the scanned string.
    pub fn raw<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Finds placeholder tokens in a block of text.
#[derive(Debug, Clone)]
pub struct Scanner {
    delimiters: Vec<DelimiterPair>,
    bare_words: bool,
}

impl Scanner {
    /// Create a scanner with an explicit delimiter list and bare-word
    /// fallback flag.
    pub fn new(delimiters: Vec<DelimiterPair>, bare_words: bool) -> Self {
        Self {
            delimiters,
            bare_words,
        }
    }

    /// Get the configured delimiter pairs in precedence order.
    pub fn delimiters(&self) -> &[DelimiterPair] {
        &self.delimiters
    }

    /// Scan a text for placeholder tokens, sorted by position.
    ///
    /// Delimited tokens are found first, pair by pair in precedence
    /// order; a span claimed by an earlier pair is invisible to later
    /// pairs. Only when the text contains no delimited token at all and
    /// bare-word fallback is enabled does every whitespace-delimited
    /// word become a candidate token. Bare words are resolver bait, not
    /// placeholders: a word that matches no column is simply prose.
    pub fn scan(&self, text: &str) -> Vec<PlaceholderToken> {
        let mut tokens = self.scan_delimited(text);

        if tokens.is_empty() && self.bare_words {
            tokens = bare_word_tokens(text);
        }

        tokens.sort_by_key(|t| t.start);
        tokens
    }

    fn scan_delimited(&self, text: &str) -> Vec<PlaceholderToken> {
        let mut tokens: Vec<PlaceholderToken> = Vec::new();
        let mut claimed: Vec<(usize, usize)> = Vec::new();

        for pair in &self.delimiters {
            if pair.open.is_empty() || pair.close.is_empty() {
                continue;
            }

            let mut at = 0;
            while let Some(rel) = text[at..].find(&pair.open) {
                let mut open_at = at + rel;
                let mut inner_start = open_at + pair.open.len();

                let Some(rel_close) = text[inner_start..].find(&pair.close) else {
                    break;
                };
                let inner_end = inner_start + rel_close;

                // Pair the close with the innermost open, so a stray
                // unmatched opener earlier in the text stays prose
                // instead of swallowing a real token.
                if let Some(rel_inner) = text[inner_start..inner_end].rfind(&pair.open) {
                    open_at = inner_start + rel_inner;
                    inner_start = open_at + pair.open.len();
                }

                let end = inner_end + pair.close.len();

                let name = text[inner_start..inner_end].trim();
                let overlaps = claimed.iter().any(|&(s, e)| open_at < e && s < end);
                if !name.is_empty() && !overlaps {
                    claimed.push((open_at, end));
                    tokens.push(PlaceholderToken {
                        name: name.to_string(),
                        start: open_at,
                        end,
                        kind: TokenKind::Delimited,
                    });
                }

                at = end;
            }
        }

        tokens
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(default_delimiters(), false)
    }
}

/// Treat every whitespace-delimited word as a candidate token.
fn bare_word_tokens(text: &str) -> Vec<PlaceholderToken> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = word_start.take() {
                tokens.push(PlaceholderToken {
                    name: text[start..i].to_string(),
                    start,
                    end: i,
                    kind: TokenKind::Bare,
                });
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(PlaceholderToken {
            name: text[start..].to_string(),
            start,
            end: text.len(),
            kind: TokenKind::Bare,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tokens: &[PlaceholderToken]) -> Vec<&str> {
        tokens.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn test_scan_guillemets() {
        let scanner = Scanner::default();
        let tokens = scanner.scan("Dear «First_Name» «Last_Name»,");
        assert_eq!(names(&tokens), ["First_Name", "Last_Name"]);
        assert_eq!(tokens[0].raw("Dear «First_Name» «Last_Name»,"), "«First_Name»");
    }

    #[test]
    fn test_scan_mixed_syntaxes() {
        let scanner = Scanner::default();
        let tokens = scanner.scan("«A» <<B>> <C> {D}");
        assert_eq!(names(&tokens), ["A", "B", "C", "D"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Delimited));
    }

    #[test]
    fn test_double_angle_beats_single() {
        let scanner = Scanner::default();
        let tokens = scanner.scan("<<Name>>");
        assert_eq!(names(&tokens), ["Name"]);
        assert_eq!(tokens[0].start, 0);
        assert_eq!(tokens[0].end, "<<Name>>".len());
    }

    #[test]
    fn test_embedded_whitespace_in_name() {
        let scanner = Scanner::default();
        let tokens = scanner.scan("«First Name»");
        assert_eq!(names(&tokens), ["First Name"]);
    }

    #[test]
    fn test_empty_name_is_not_a_token() {
        let scanner = Scanner::default();
        assert!(scanner.scan("«» { } text").is_empty());
    }

    #[test]
    fn test_unclosed_delimiter() {
        let scanner = Scanner::default();
        assert!(scanner.scan("Dear «Name").is_empty());
    }

    #[test]
    fn test_stray_open_pairs_close_with_innermost_open() {
        let text = "Note « draft «First_Name» end";
        let scanner = Scanner::default();
        let tokens = scanner.scan(text);

        assert_eq!(names(&tokens), ["First_Name"]);
        assert_eq!(tokens[0].raw(text), "«First_Name»");
    }

    #[test]
    fn test_multiple_stray_opens() {
        let scanner = Scanner::default();
        let tokens = scanner.scan("« a « b «Name» «Other» «");
        assert_eq!(names(&tokens), ["Name", "Other"]);
    }

    #[test]
    fn test_bare_words_only_without_delimited() {
        let scanner = Scanner::new(default_delimiters(), true);

        let tokens = scanner.scan("Name Age");
        assert_eq!(names(&tokens), ["Name", "Age"]);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Bare));

        // A single delimited token disables the fallback for the text.
        let tokens = scanner.scan("Name «Age»");
        assert_eq!(names(&tokens), ["Age"]);
    }

    #[test]
    fn test_bare_words_disabled_by_default() {
        let scanner = Scanner::default();
        assert!(scanner.scan("Name Age").is_empty());
    }
}
