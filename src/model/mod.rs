//! Document model types for converted HTML content.
//!
//! This module defines the output contract of the conversion engine: an
//! ordered, append-only sequence of blocks that a DOCX assembly component
//! can consume wholesale. The model is constructed fresh per conversion
//! and never mutated after handoff.

mod document;
mod paragraph;
mod table;

pub use document::{Block, Document, DocumentDefaults, JsonFormat};
pub use paragraph::{
    Alignment, ListInfo, ListStyle, Paragraph, ParagraphStyle, Rgb, TextRun, TextStyle,
    LIST_INDENT_CM,
};
pub use table::{Table, TableCell, TableRow};
