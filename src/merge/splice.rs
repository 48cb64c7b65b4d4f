//! Text reassembly: run splicing and write-back.
//!
//! Placeholders routinely straddle run boundaries; word processors split
//! text mid-token on spell-check and revision marks. The splice pass
//! therefore matches against the paragraph's concatenated, normalized
//! text. Writing the result back collapses the paragraph to a single run
//! carrying the first run's style. This is a deliberate, documented
//! policy: formatting finer than whole-paragraph granularity does not
//! survive a spliced substitution. When the splice pass substitutes
//! nothing, a direct per-run pass handles tokens fully contained in one
//! run without any run churn.

use super::context::MergeContext;
use super::report::MergeStats;
use crate::model::{Paragraph, Run};
use crate::scan::{normalize_text, ColumnEntry, DelimiterPair, Scanner, TokenKind};

/// Apply one row's substitutions to a paragraph.
///
/// Returns the number of substitutions performed; the paragraph is
/// mutated only if the count is greater than zero.
pub fn splice_paragraph(
    paragraph: &mut Paragraph,
    context: &MergeContext,
    scanner: &Scanner,
    stats: &mut MergeStats,
) -> u32 {
    if paragraph.runs.is_empty() {
        return 0;
    }

    let logical = normalize_text(&paragraph.plain_text());
    let tokens = scanner.scan(&logical);

    let mut spliced = logical.clone();
    let mut count = 0u32;

    // Replace back to front so earlier token spans stay valid.
    for token in tokens.iter().rev() {
        match context.resolve(&token.name) {
            Some(entry) => {
                log::debug!(
                    "substituting {:?} -> column {:?}",
                    token.raw(&logical),
                    entry.name
                );
                spliced.replace_range(token.start..token.end, &entry.value);
                count += 1;
            }
            None if token.kind == TokenKind::Delimited => {
                stats.record_unresolved(&token.name);
            }
            None => {}
        }
    }

    if count > 0 {
        let style = paragraph.runs[0].style.clone();
        paragraph.clear_runs();
        paragraph.add_run(Run::styled(spliced, style));
        return count;
    }

    direct_pass(paragraph, context, scanner.delimiters())
}

/// Per-run fallback: exact delimited forms of each column name,
/// substituted in the raw run text without touching other runs.
fn direct_pass(
    paragraph: &mut Paragraph,
    context: &MergeContext,
    delimiters: &[DelimiterPair],
) -> u32 {
    let mut count = 0u32;

    for run in &mut paragraph.runs {
        for entry in context.entries() {
            for tag in delimited_forms(entry, delimiters) {
                let occurrences = run.text.matches(&tag).count() as u32;
                if occurrences > 0 {
                    run.text = run.text.replace(&tag, &entry.value);
                    count += occurrences;
                }
            }
        }
    }

    count
}

/// The exact delimited forms of a column's merge name: as declared,
/// lowercase, and uppercase, across every delimiter pair.
fn delimited_forms(entry: &ColumnEntry, delimiters: &[DelimiterPair]) -> Vec<String> {
    let mut variants = vec![entry.merge_name.clone()];
    for variant in [entry.merge_name.to_lowercase(), entry.merge_name.to_uppercase()] {
        if !variants.contains(&variant) {
            variants.push(variant);
        }
    }

    let mut forms = Vec::with_capacity(variants.len() * delimiters.len());
    for pair in delimiters {
        for variant in &variants {
            forms.push(format!("{}{}{}", pair.open, variant, pair.close));
        }
    }
    forms
}
