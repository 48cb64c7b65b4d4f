//! Text normalization for placeholder matching.
//!
//! Template text arrives fragmented and frequently carries invisible
//! characters pasted in from word processors: non-breaking spaces inside
//! a placeholder name, zero-width joiners between delimiter halves, soft
//! hyphens at old line-break positions. Normalization collapses all of
//! those to plain ASCII spaces so matching sees one canonical form.
//! Normalization is for matching only; write-back semantics live in the
//! reassembler.

use unicode_normalization::UnicodeNormalization;

/// Characters that collapse to a space alongside Unicode whitespace.
///
/// Zero-width and format characters are not `White_Space` but still break
/// naive substring matching.
fn is_collapsible(c: char) -> bool {
    c.is_whitespace()
        || matches!(
            c,
            '\u{200B}'..='\u{200F}' // ZWSP, ZWNJ, ZWJ, LRM, RLM
                | '\u{00AD}' // soft hyphen
                | '\u{202A}'..='\u{202E}' // directional embeddings/overrides
                | '\u{2060}' // word joiner
                | '\u{FEFF}' // BOM / zero-width no-break space
        )
}

/// Normalize text for matching: NFC, collapse whitespace and invisible
/// format characters to single ASCII spaces, trim the ends.
pub fn normalize_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.nfc() {
        if is_collapsible(c) {
            // Collapses runs and drops leading space in one condition.
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }

    out
}

/// Fold a name for fuzzy comparison: lowercase with all whitespace and
/// underscores removed.
pub fn fold_name(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_unicode_whitespace() {
        assert_eq!(normalize_text("a\u{00A0}b"), "a b");
        assert_eq!(normalize_text("a \t \u{2028} b"), "a b");
    }

    #[test]
    fn test_zero_width_characters() {
        assert_eq!(normalize_text("«Fir\u{200B}st»"), "«Fir st»");
        assert_eq!(normalize_text("\u{FEFF}x\u{00AD}y"), "x y");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize_text("  hello  "), "hello");
        assert_eq!(normalize_text("\u{200B}"), "");
    }

    #[test]
    fn test_fold_name() {
        assert_eq!(fold_name("First_Name"), "firstname");
        assert_eq!(fold_name("first name"), "firstname");
        assert_eq!(fold_name("FIRSTNAME"), "firstname");
    }
}
