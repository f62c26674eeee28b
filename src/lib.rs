//! # htmldocx
//!
//! Rich-text HTML to structured document model conversion for DOCX
//! assembly.
//!
//! This library takes the constrained HTML dialect produced by rich-text
//! editors and Microsoft Word paste operations and deterministically
//! re-expresses it as an ordered sequence of document blocks (paragraphs
//! with styled runs, list items, tables, headings) ready for a document
//! assembly component to splice into a template.
//!
//! ## Quick Start
//!
//! ```
//! use htmldocx::{clean, HtmlConverter};
//!
//! let html = clean("<p class=\"MsoNormal\"><strong>Hello</strong> world</p>");
//! let doc = HtmlConverter::new().convert(&html);
//! assert_eq!(doc.plain_text(), "Hello world");
//! ```
//!
//! ## Guarantees
//!
//! - **Never fails on input shape**: malformed markup is recovered
//!   best-effort, unknown tags are ignored, bad CSS values are skipped.
//! - **Line spacing invariant**: every emitted paragraph, list item,
//!   table cell, and heading carries 1.5x multiple line spacing,
//!   regardless of source `line-height`.
//! - **Deterministic defaults**: Arial 10pt, justified, applied wherever
//!   the source does not override them.

pub mod convert;
pub mod error;
pub mod model;
pub mod sanitize;

pub use convert::HtmlConverter;
pub use error::{Error, Result};
pub use model::{
    Alignment, Block, Document, DocumentDefaults, JsonFormat, ListInfo, ListStyle, Paragraph,
    ParagraphStyle, Rgb, Table, TableCell, TableRow, TextRun, TextStyle, LIST_INDENT_CM,
};
pub use sanitize::clean;

/// Convert an HTML fragment into a fresh document with standard defaults.
///
/// # Example
///
/// ```
/// let doc = htmldocx::convert("<p>Hello</p>");
/// assert_eq!(doc.block_count(), 1);
/// ```
pub fn convert(html: &str) -> Document {
    HtmlConverter::new().convert(html)
}

/// Convert an HTML fragment, appending blocks to an existing document.
///
/// Existing content and defaults are left untouched.
pub fn convert_into(html: &str, doc: &mut Document) {
    HtmlConverter::new().convert_into(html, doc)
}

/// Convert an HTML fragment with custom document defaults.
pub fn convert_with_defaults(html: &str, defaults: DocumentDefaults) -> Document {
    HtmlConverter::with_defaults(defaults).convert(html)
}

/// Sanitize and convert in one step: the typical pipeline for HTML
/// pasted from Word.
pub fn clean_and_convert(html: &str) -> Document {
    convert(&clean(html))
}

/// Builder for configuring and running conversions.
///
/// # Example
///
/// ```
/// use htmldocx::{Alignment, DocumentDefaults, HtmlDocx};
///
/// let doc = HtmlDocx::new()
///     .with_defaults(DocumentDefaults::new().with_alignment(Alignment::Left))
///     .convert("<p>Hello</p>");
/// assert_eq!(doc.defaults.alignment, Alignment::Left);
/// ```
pub struct HtmlDocx {
    defaults: DocumentDefaults,
    sanitize: bool,
}

impl HtmlDocx {
    /// Create a new builder with standard defaults and sanitization on.
    pub fn new() -> Self {
        Self {
            defaults: DocumentDefaults::default(),
            sanitize: true,
        }
    }

    /// Set the document defaults.
    pub fn with_defaults(mut self, defaults: DocumentDefaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enable or disable sanitization before conversion.
    ///
    /// The converter also handles unsanitized input; skipping the
    /// sanitizer is less reliable but never unsafe.
    pub fn sanitize(mut self, sanitize: bool) -> Self {
        self.sanitize = sanitize;
        self
    }

    /// Convert an HTML fragment into a fresh document.
    pub fn convert(&self, html: &str) -> Document {
        let converter = HtmlConverter::with_defaults(self.defaults.clone());
        if self.sanitize {
            converter.convert(&clean(html))
        } else {
            converter.convert(html)
        }
    }

    /// Convert an HTML fragment, appending blocks to an existing document.
    pub fn convert_into(&self, html: &str, doc: &mut Document) {
        let converter = HtmlConverter::with_defaults(self.defaults.clone());
        if self.sanitize {
            converter.convert_into(&clean(html), doc)
        } else {
            converter.convert_into(html, doc)
        }
    }
}

impl Default for HtmlDocx {
    fn default() -> Self {
        Self::new()
    }
}
