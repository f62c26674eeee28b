//! Document-level types.

use super::{Alignment, Paragraph, Table};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// A converted document: an ordered, append-only sequence of blocks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Document-wide defaults, stamped at creation time
    pub defaults: DocumentDefaults,

    /// Content blocks in source order
    pub blocks: Vec<Block>,
}

impl Document {
    /// Create a new empty document with standard defaults.
    pub fn new() -> Self {
        Self::with_defaults(DocumentDefaults::default())
    }

    /// Create a new empty document with the given defaults.
    pub fn with_defaults(defaults: DocumentDefaults) -> Self {
        Self {
            defaults,
            blocks: Vec::new(),
        }
    }

    /// Append a block to the document.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Append a paragraph block.
    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.blocks.push(Block::Paragraph(paragraph));
    }

    /// Append a table block.
    pub fn add_table(&mut self, table: Table) {
        self.blocks.push(Block::Table(table));
    }

    /// Get the number of blocks.
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

    /// Serialize the document to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        let json = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(self)?,
            JsonFormat::Compact => serde_json::to_string(self)?,
        };
        Ok(json)
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Document-wide formatting defaults.
///
/// Passed into the conversion entry point as a value rather than held as
/// process-wide state, so conversions with different defaults can run
/// without interference. Line spacing is a hard invariant of the output
/// and is applied to every emitted paragraph regardless of source markup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentDefaults {
    /// Default font family
    pub font_family: String,

    /// Default font size in points
    pub font_size: f32,

    /// Line spacing as a multiple of single-line height
    pub line_spacing: f32,

    /// Default paragraph alignment
    pub alignment: Alignment,
}

impl DocumentDefaults {
    /// Create defaults (Arial 10pt, 1.5 line spacing, justified).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default font family.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the default font size in points.
    pub fn with_font_size(mut self, points: f32) -> Self {
        self.font_size = points;
        self
    }

    /// Set the default paragraph alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

impl Default for DocumentDefaults {
    fn default() -> Self {
        Self {
            font_family: "Arial".to_string(),
            font_size: 10.0,
            line_spacing: 1.5,
            alignment: Alignment::Justify,
        }
    }
}

/// A content block in the document.
///
/// Headings and list items are carried as `Paragraph` blocks with the
/// corresponding `ParagraphStyle` fields set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),

    /// A table
    Table(Table),
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}
