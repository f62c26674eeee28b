//! Structural transduction from HTML to the document model.
//!
//! The converter parses an HTML fragment with a lenient parser, walks the
//! direct element children of the fragment root in source order, and
//! emits one block per recognized element. Unrecognized tags are ignored
//! rather than rejected; the walk never fails for input-shape reasons.

mod css;
mod inline;

use crate::model::{
    Alignment, Document, DocumentDefaults, ListInfo, Paragraph, Table, TableCell, TableRow,
    TextRun, TextStyle,
};
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;

static TR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("tr").expect("TR_SELECTOR: hardcoded selector is valid"));

static CELL_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse("td, th").expect("CELL_SELECTOR: hardcoded selector is valid")
});

/// Converter from rich-text HTML fragments to the document model.
///
/// Holds no mutable state between calls; concurrent conversions against
/// independent target documents are safe.
#[derive(Debug, Clone)]
pub struct HtmlConverter {
    defaults: DocumentDefaults,
}

impl HtmlConverter {
    /// Create a converter with standard defaults (Arial 10pt, 1.5 line
    /// spacing, justified).
    pub fn new() -> Self {
        Self {
            defaults: DocumentDefaults::default(),
        }
    }

    /// Create a converter with the given defaults.
    pub fn with_defaults(defaults: DocumentDefaults) -> Self {
        Self { defaults }
    }

    /// Get the defaults this converter applies.
    pub fn defaults(&self) -> &DocumentDefaults {
        &self.defaults
    }

    /// Convert an HTML fragment into a fresh document stamped with this
    /// converter's defaults.
    pub fn convert(&self, html: &str) -> Document {
        let mut doc = Document::with_defaults(self.defaults.clone());
        self.convert_into(html, &mut doc);
        doc
    }

    /// Convert an HTML fragment, appending blocks to an existing document
    /// without altering its content or defaults.
    pub fn convert_into(&self, html: &str, doc: &mut Document) {
        let before = doc.block_count();
        let fragment = Html::parse_fragment(html);
        for child in fragment.root_element().children() {
            if let Some(element) = ElementRef::wrap(child) {
                self.process_element(element, doc);
            }
        }
        log::debug!(
            "converted {} bytes of HTML into {} blocks",
            html.len(),
            doc.block_count() - before
        );
    }

    /// Dispatch a top-level element by tag name.
    fn process_element(&self, element: ElementRef<'_>, doc: &mut Document) {
        match element.value().name() {
            "p" => self.add_paragraph(element, doc),
            "ul" | "ol" => self.add_list(element, doc),
            "table" => self.add_table(element, doc),
            "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => self.add_heading(element, doc),
            "br" => doc.add_paragraph(self.blank_paragraph()),
            "div" => {
                // Transparent container: dispatch its children in place.
                for child in element.children() {
                    if let Some(inner) = ElementRef::wrap(child) {
                        self.process_element(inner, doc);
                    }
                }
            }
            _ => {}
        }
    }

    fn add_paragraph(&self, element: ElementRef<'_>, doc: &mut Document) {
        let mut paragraph = self.blank_paragraph();
        let style_attr = element.value().attr("style").unwrap_or("");
        paragraph.style.alignment =
            css::parse_alignment(style_attr).unwrap_or(self.defaults.alignment);
        paragraph.runs = inline::resolve_runs(element, &self.defaults);
        doc.add_paragraph(paragraph);
    }

    fn add_list(&self, element: ElementRef<'_>, doc: &mut Document) {
        let ordered = element.value().name() == "ol";
        let level = list_level(element);

        for item in direct_children(element, &["li"]) {
            let mut paragraph = self.blank_paragraph();
            paragraph.style.list_info = Some(if ordered {
                ListInfo::numbered(level)
            } else {
                ListInfo::bullet(level)
            });
            paragraph.runs = inline::resolve_runs(item, &self.defaults);
            doc.add_paragraph(paragraph);

            // Sub-lists follow their parent item, one indent level deeper.
            for sub_list in direct_children(item, &["ul", "ol"]) {
                self.add_list(sub_list, doc);
            }
        }
    }

    fn add_table(&self, element: ElementRef<'_>, doc: &mut Document) {
        let rows: Vec<ElementRef<'_>> = element.select(&TR_SELECTOR).collect();
        if rows.is_empty() {
            log::debug!("table with no rows produced no block");
            return;
        }

        let cells_per_row: Vec<Vec<ElementRef<'_>>> = rows
            .iter()
            .map(|row| row.select(&CELL_SELECTOR).collect())
            .collect();
        let columns = cells_per_row.iter().map(Vec::len).max().unwrap_or(0);
        if columns == 0 {
            log::debug!("table with no cells produced no block");
            return;
        }

        let mut table = Table::new();
        for row_cells in cells_per_row {
            let mut cells = Vec::with_capacity(columns);
            for cell in row_cells {
                cells.push(self.build_cell(cell));
            }
            // Ragged rows are padded, not rejected.
            while cells.len() < columns {
                let mut padding = TableCell::empty();
                padding.paragraph.style.line_spacing = Some(self.defaults.line_spacing);
                cells.push(padding);
            }
            table.add_row(TableRow::new(cells));
        }
        doc.add_table(table);
    }

    fn build_cell(&self, cell: ElementRef<'_>) -> TableCell {
        let mut paragraph = self.blank_paragraph();
        paragraph.runs = inline::resolve_runs(cell, &self.defaults);

        if cell.value().name() == "th" {
            // Header emphasis always wins over run and paragraph styles.
            for run in &mut paragraph.runs {
                run.style.bold = true;
            }
            paragraph.style.alignment = Alignment::Center;
            TableCell::header(paragraph)
        } else {
            TableCell::new(paragraph)
        }
    }

    fn add_heading(&self, element: ElementRef<'_>, doc: &mut Document) {
        let name = element.value().name();
        let level = name.as_bytes()[1].saturating_sub(b'0');

        // Inline styling inside headings is not preserved; only the
        // flattened text is used. Font family is forced to the default,
        // size stays structural.
        let text: String = element.text().collect();
        let style = TextStyle {
            font_name: Some(self.defaults.font_family.clone()),
            ..Default::default()
        };

        let mut paragraph = self.blank_paragraph();
        paragraph.style.heading_level = Some(level);
        paragraph.add_run(TextRun::styled(text, style));
        doc.add_paragraph(paragraph);
    }

    /// A paragraph carrying the unconditional defaults: 1.5 line spacing
    /// and the default alignment.
    fn blank_paragraph(&self) -> Paragraph {
        let mut paragraph = Paragraph::new();
        paragraph.style.line_spacing = Some(self.defaults.line_spacing);
        paragraph.style.alignment = self.defaults.alignment;
        paragraph
    }
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Count ancestor `ul`/`ol` elements to find the nesting level.
fn list_level(element: ElementRef<'_>) -> u8 {
    element
        .ancestors()
        .filter(|node| {
            node.value()
                .as_element()
                .is_some_and(|el| matches!(el.name(), "ul" | "ol"))
        })
        .count() as u8
}

/// Direct element children of `element` with one of the given tag names.
fn direct_children<'a>(
    element: ElementRef<'a>,
    names: &'static [&'static str],
) -> Vec<ElementRef<'a>> {
    element
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| names.contains(&el.value().name()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Block;

    fn paragraphs(doc: &Document) -> Vec<&Paragraph> {
        doc.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Paragraph(p) => Some(p),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_unknown_tags_ignored() {
        let doc = HtmlConverter::new().convert("<blockquote>quoted</blockquote><p>kept</p>");
        assert_eq!(doc.block_count(), 1);
        assert_eq!(doc.plain_text(), "kept");
    }

    #[test]
    fn test_top_level_text_ignored() {
        let doc = HtmlConverter::new().convert("stray text<p>kept</p>more stray");
        assert_eq!(doc.block_count(), 1);
    }

    #[test]
    fn test_div_is_transparent() {
        let doc = HtmlConverter::new().convert("<div><p>one</p><div><p>two</p></div></div>");
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.plain_text(), "one\ntwo");
    }

    #[test]
    fn test_br_emits_blank_paragraph() {
        let doc = HtmlConverter::new().convert("<p>a</p><br><p>b</p>");
        assert_eq!(doc.block_count(), 3);
        let ps = paragraphs(&doc);
        assert!(ps[1].runs.is_empty());
        assert_eq!(ps[1].style.line_spacing, Some(1.5));
    }

    #[test]
    fn test_paragraph_alignment_falls_back_to_default() {
        let doc = HtmlConverter::new().convert("<p>plain</p>");
        assert_eq!(paragraphs(&doc)[0].style.alignment, Alignment::Justify);
    }

    #[test]
    fn test_paragraph_alignment_from_style() {
        let doc = HtmlConverter::new().convert("<p style=\"text-align: center\">c</p>");
        assert_eq!(paragraphs(&doc)[0].style.alignment, Alignment::Center);
    }

    #[test]
    fn test_line_height_never_overrides_spacing() {
        let doc = HtmlConverter::new().convert("<p style=\"line-height: 3\">x</p>");
        assert_eq!(paragraphs(&doc)[0].style.line_spacing, Some(1.5));
    }

    #[test]
    fn test_heading_levels() {
        let doc = HtmlConverter::new().convert("<h1>One</h1><h6>Six</h6>");
        let ps = paragraphs(&doc);
        assert_eq!(ps[0].heading_level(), Some(1));
        assert_eq!(ps[1].heading_level(), Some(6));
    }

    #[test]
    fn test_heading_flattens_inline_markup() {
        let doc = HtmlConverter::new().convert("<h2>Plain <strong>bold</strong></h2>");
        let ps = paragraphs(&doc);
        assert_eq!(ps[0].runs.len(), 1);
        assert_eq!(ps[0].runs[0].text, "Plain bold");
        assert_eq!(ps[0].runs[0].style.font_name.as_deref(), Some("Arial"));
        assert_eq!(ps[0].runs[0].style.font_size, None);
    }

    #[test]
    fn test_empty_table_produces_no_block() {
        let doc = HtmlConverter::new().convert("<table></table>");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_convert_into_appends() {
        let converter = HtmlConverter::new();
        let mut doc = converter.convert("<p>first</p>");
        converter.convert_into("<p>second</p>", &mut doc);
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.plain_text(), "first\nsecond");
    }

    #[test]
    fn test_custom_defaults_flow_into_runs() {
        let defaults = DocumentDefaults::new()
            .with_font_family("Calibri")
            .with_font_size(11.0)
            .with_alignment(Alignment::Left);
        let doc = HtmlConverter::with_defaults(defaults).convert("<p>x</p>");
        let ps = paragraphs(&doc);
        assert_eq!(ps[0].style.alignment, Alignment::Left);
        assert_eq!(ps[0].runs[0].style.font_name.as_deref(), Some("Calibri"));
        assert_eq!(ps[0].runs[0].style.font_size, Some(11.0));
    }

    #[test]
    fn test_malformed_html_does_not_panic() {
        let converter = HtmlConverter::new();
        let doc = converter.convert("<p>unclosed <strong>nested<table><tr><td>x");
        assert!(doc.block_count() >= 1);
    }
}
