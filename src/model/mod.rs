//! In-memory document model.
//!
//! The model mirrors the fragment structure of word-processing formats:
//! a document is a sequence of paragraphs and tables, a paragraph is a
//! sequence of independently styled runs, and table cells may hold both
//! paragraphs and further nested tables. The substitution engine rewrites
//! run text only; it never changes the block structure.

mod document;
mod paragraph;
mod table;

pub use document::{Block, Document};
pub use paragraph::{Paragraph, Run, RunStyle};
pub use table::{Table, TableCell, TableRow};
