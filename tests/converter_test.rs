//! Integration tests for HTML-to-document-model conversion.

use htmldocx::{
    clean_and_convert, convert, Alignment, Block, Document, HtmlConverter, Paragraph, Rgb,
};

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
fn test_end_to_end_styled_paragraph() {
    let doc = convert("<p style=\"text-align:center\"><strong>Bold</strong> and <em>italic</em></p>");

    assert_eq!(doc.block_count(), 1);
    let p = &paragraphs(&doc)[0];
    assert_eq!(p.style.alignment, Alignment::Center);
    assert_eq!(p.runs.len(), 3);

    assert_eq!(p.runs[0].text, "Bold");
    assert!(p.runs[0].style.bold);

    // Inter-element plain text is preserved untrimmed as its own run.
    assert_eq!(p.runs[1].text, " and ");
    assert!(!p.runs[1].style.bold);
    assert!(!p.runs[1].style.italic);

    assert_eq!(p.runs[2].text, "italic");
    assert!(p.runs[2].style.italic);
}

#[test]
fn test_whitespace_only_paragraph_has_no_runs() {
    let doc = convert("<p>   <span>   </span>  </p>");
    assert_eq!(doc.block_count(), 1);
    assert!(paragraphs(&doc)[0].runs.is_empty());
}

#[test]
fn test_line_spacing_invariant_across_block_kinds() {
    let doc = convert(
        "<h1>Heading</h1>\
         <p style=\"line-height: 2.0\">paragraph</p>\
         <ul><li>item</li></ul>\
         <table><tr><td>cell</td></tr></table>\
         <br>",
    );

    for block in &doc.blocks {
        match block {
            Block::Paragraph(p) => assert_eq!(p.style.line_spacing, Some(1.5)),
            Block::Table(t) => {
                for row in &t.rows {
                    for cell in &row.cells {
                        assert_eq!(cell.paragraph.style.line_spacing, Some(1.5));
                    }
                }
            }
        }
    }
}

#[test]
fn test_font_size_px_conversion() {
    let doc = convert("<p><span style=\"font-size: 16px\">x</span></p>");
    let p = &paragraphs(&doc)[0];
    assert_eq!(p.runs[0].style.font_size, Some(12.0));
}

#[test]
fn test_color_forms_all_resolve_to_red() {
    let html = "<p>\
        <span style=\"color: #FF0000\">a</span>\
        <span style=\"color: #f00\">b</span>\
        <span style=\"color: rgb(255, 0, 0)\">c</span>\
        <span style=\"color: red\">d</span>\
        </p>";
    let doc = convert(html);
    let p = &paragraphs(&doc)[0];

    let colored: Vec<_> = p
        .runs
        .iter()
        .filter(|r| !r.text.trim().is_empty())
        .collect();
    assert_eq!(colored.len(), 4);
    for run in colored {
        assert_eq!(run.style.color, Some(Rgb(255, 0, 0)));
    }
}

#[test]
fn test_header_cell_emphasis_wins() {
    let doc = convert("<table><tr><th style=\"font-weight:normal\">X</th></tr></table>");

    let table = match &doc.blocks[0] {
        Block::Table(t) => t,
        other => panic!("expected table, got {:?}", other),
    };
    let cell = table.cell(0, 0).expect("header cell");
    assert!(cell.is_header);
    assert_eq!(cell.paragraph.style.alignment, Alignment::Center);
    assert!(cell.paragraph.runs[0].style.bold);
}

#[test]
fn test_ragged_table_is_padded_to_rectangle() {
    let html = "<table>\
        <tr><td>a</td><td>b</td><td>c</td></tr>\
        <tr><td>d</td><td>e</td></tr>\
        <tr><td>f</td><td>g</td><td>h</td><td>i</td></tr>\
        </table>";
    let doc = convert(html);

    let table = match &doc.blocks[0] {
        Block::Table(t) => t,
        other => panic!("expected table, got {:?}", other),
    };
    assert_eq!(table.row_count(), 3);
    assert_eq!(table.column_count(), 4);

    // Every row holds the full column count; missing cells are present
    // but empty.
    for row in &table.rows {
        assert_eq!(row.cells.len(), 4);
    }
    assert!(table.cell(0, 3).unwrap().is_empty());
    assert!(table.cell(1, 2).unwrap().is_empty());
    assert_eq!(table.cell(2, 3).unwrap().plain_text(), "i");
}

#[test]
fn test_list_nesting_depth() {
    let doc = convert("<ul><li>A<ul><li>B</li></ul></li></ul>");

    let items = paragraphs(&doc);
    assert_eq!(items.len(), 2);

    assert_eq!(items[0].plain_text(), "A");
    let info_a = items[0].style.list_info.as_ref().expect("list item A");
    assert_eq!(info_a.level, 0);

    assert_eq!(items[1].plain_text(), "B");
    let info_b = items[1].style.list_info.as_ref().expect("list item B");
    assert_eq!(info_b.level, 1);
    assert!((info_b.indent_cm() - 1.27).abs() < 1e-6);
}

#[test]
fn test_ordered_and_unordered_list_styles() {
    let doc = convert("<ol><li>one</li></ol><ul><li>two</li></ul>");
    let items = paragraphs(&doc);
    assert!(items[0].style.list_info.as_ref().unwrap().is_ordered());
    assert!(!items[1].style.list_info.as_ref().unwrap().is_ordered());
}

#[test]
fn test_sub_lists_follow_parent_item_in_source_order() {
    let doc = convert(
        "<ul>\
         <li>first<ol><li>first.1</li><li>first.2</li></ol></li>\
         <li>second</li>\
         </ul>",
    );
    let texts: Vec<String> = paragraphs(&doc).iter().map(|p| p.plain_text()).collect();
    assert_eq!(texts, vec!["first", "first.1", "first.2", "second"]);
}

#[test]
fn test_zero_row_table_emits_nothing() {
    let doc = convert("<table><caption>empty</caption></table>");
    assert!(doc.is_empty());
}

#[test]
fn test_convert_into_existing_document() {
    let converter = HtmlConverter::new();
    let mut doc = converter.convert("<h1>Title</h1>");
    converter.convert_into("<p>body</p><table><tr><td>x</td></tr></table>", &mut doc);

    assert_eq!(doc.block_count(), 3);
    assert!(matches!(doc.blocks[0], Block::Paragraph(_)));
    assert!(matches!(doc.blocks[2], Block::Table(_)));
}

#[test]
fn test_full_word_paste_pipeline() {
    let pasted = "<!--[if gte mso 9]><xml><w:WordDocument></w:WordDocument></xml><![endif]-->\
        <p class=\"MsoNormal\" style=\"text-align: justify; mso-pagination: widow-orphan\">\
        <span lang=\"PT-BR\" style=\"font-size: 12.0pt; color: #333333\">Regulamento</span></p>";

    let doc = clean_and_convert(pasted);
    assert_eq!(doc.block_count(), 1);

    let p = &paragraphs(&doc)[0];
    assert_eq!(p.style.alignment, Alignment::Justify);
    assert_eq!(p.runs.len(), 1);
    assert_eq!(p.runs[0].text, "Regulamento");
    assert_eq!(p.runs[0].style.font_size, Some(12.0));
    assert_eq!(p.runs[0].style.color, Some(Rgb(0x33, 0x33, 0x33)));
}

#[test]
fn test_conversion_never_panics_on_garbage() {
    let inputs = [
        "",
        "   ",
        "<",
        "<p",
        "</p>",
        "<p><table><ul></p>",
        "<table><tr></tr></table>",
        "<div><div><div><p>deep</p></div></div></div>",
        "\u{0000}binary\u{FFFD}",
    ];
    for input in inputs {
        let _ = convert(input);
        let _ = clean_and_convert(input);
    }
}
