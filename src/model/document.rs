//! Document-level types.

use super::{Paragraph, Table};
use serde::{Deserialize, Serialize};

/// A template or merged document: an ordered sequence of blocks.
///
/// `Clone` is the deep copy used to instantiate the template for each
/// data row; a clone shares nothing with its source.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Top-level blocks in document order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self { blocks: Vec::new() }
    }

    /// Append a paragraph block.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Append a table block.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Get the number of top-level blocks.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Check if the document has any blocks.
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get plain text content of the entire document.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(|block| match block {
                Block::Paragraph(p) => p.plain_text(),
                Block::Table(t) => t.plain_text(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// A top-level document block.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of runs
    Paragraph(Paragraph),

    /// A table of cells
    Table(Table),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableRow;

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_plain_text() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Dear «Name»,"));
        let mut table = Table::new();
        table.add_row(TableRow::from_strings(["a", "b"]));
        doc.add_table(table);

        assert_eq!(doc.plain_text(), "Dear «Name»,\na\tb");
    }

    #[test]
    fn test_clone_is_independent() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("«Name»"));

        let mut copy = doc.clone();
        if let Block::Paragraph(p) = &mut copy.blocks[0] {
            p.runs[0].text = "Alice".to_string();
        }

        assert_eq!(doc.plain_text(), "«Name»");
        assert_eq!(copy.plain_text(), "Alice");
    }
}
