//! Recursive document traversal.
//!
//! Applies the reassembler to every paragraph reachable from a document:
//! top-level blocks in order, then each table's cells' paragraphs,
//! recursing into nested tables to unbounded depth. Substitution is a
//! pure per-paragraph operation, so sibling order is stable but carries
//! no semantic weight.

use super::context::MergeContext;
use super::report::MergeStats;
use super::splice::splice_paragraph;
use crate::model::{Block, Document, Paragraph, Table};
use crate::scan::Scanner;

/// Run substitution over every paragraph in the document.
///
/// Returns the total substitution count. A zero total is a reportable
/// warning condition for the caller, not an error.
pub fn walk_document(
    document: &mut Document,
    context: &MergeContext,
    scanner: &Scanner,
    stats: &mut MergeStats,
) -> u32 {
    let mut total = 0;
    for block in &mut document.blocks {
        match block {
            Block::Paragraph(paragraph) => {
                total += visit_paragraph(paragraph, context, scanner, stats);
            }
            Block::Table(table) => {
                total += walk_table(table, context, scanner, stats);
            }
        }
    }
    total
}

fn visit_paragraph(
    paragraph: &mut Paragraph,
    context: &MergeContext,
    scanner: &Scanner,
    stats: &mut MergeStats,
) -> u32 {
    stats.paragraph_count += 1;
    let count = splice_paragraph(paragraph, context, scanner, stats);
    stats.substitutions += count;
    count
}

fn walk_table(
    table: &mut Table,
    context: &MergeContext,
    scanner: &Scanner,
    stats: &mut MergeStats,
) -> u32 {
    stats.table_count += 1;
    let mut total = 0;
    for row in &mut table.rows {
        for cell in &mut row.cells {
            for paragraph in &mut cell.paragraphs {
                total += visit_paragraph(paragraph, context, scanner, stats);
            }
            for nested in &mut cell.tables {
                total += walk_table(nested, context, scanner, stats);
            }
        }
    }
    total
}
