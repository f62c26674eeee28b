//! Word-paste HTML sanitization.
//!
//! HTML pasted from Microsoft Word or rich-text editors carries vendor
//! markup that contributes nothing to visible formatting: namespaced
//! elements (`o:p`, `w:sdt`, `v:shape`), `Mso*` classes, language
//! attributes, and long inline style strings. `clean` strips that noise
//! while keeping the allow-listed style properties, so the converter
//! downstream sees only markup it understands. The function is pure,
//! never fails on malformed input, and is idempotent on its own output.

use scraper::node::Node;
use scraper::Html;

/// Style properties kept during sanitization. Matching is by substring,
/// so `border-top` survives via `border`.
const KEPT_STYLE_PROPS: &[&str] = &[
    "font-size",
    "font-family",
    "color",
    "background-color",
    "text-align",
    "font-weight",
    "font-style",
    "text-decoration",
    "line-height",
    "margin",
    "padding",
    "border",
    "vertical-align",
    "width",
    "height",
];

/// Class token prefix identifying Word-generated classes.
const VENDOR_CLASS_MARKER: &str = "Mso";

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Clean pasted HTML, keeping only formatting-relevant markup.
///
/// Removes vendor-namespaced elements with their subtrees, comments,
/// `id`/`lang`/`xml:lang` attributes, `class` attributes carrying any
/// `Mso`-prefixed token, and style declarations outside the allow list.
/// Sibling text content is preserved.
pub fn clean(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    let mut out = String::with_capacity(html.len());
    for child in fragment.root_element().children() {
        write_node(child, &mut out);
    }
    log::debug!("sanitized {} bytes of HTML into {}", html.len(), out.len());
    out
}

fn write_node(node: ego_tree::NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => escape_text(text, out),
        Node::Element(element) => {
            let name = element.name();
            // Vendor-namespaced element: drop it and its whole subtree.
            if name.contains(':') {
                return;
            }

            out.push('<');
            out.push_str(name);
            for (attr, value) in element.attrs() {
                match attr {
                    "id" | "lang" | "xml:lang" => {}
                    "class" => {
                        if !has_vendor_class(value) {
                            write_attribute(attr, value, out);
                        }
                    }
                    "style" => {
                        let kept = clean_style(value);
                        if !kept.is_empty() {
                            write_attribute(attr, &kept, out);
                        }
                    }
                    _ => write_attribute(attr, value, out),
                }
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&name) {
                return;
            }
            for child in node.children() {
                write_node(child, out);
            }
            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        // Comments, doctypes, and processing instructions are dropped.
        _ => {}
    }
}

/// Keep only declarations whose property name contains an allow-listed
/// substring, re-emitted in source order as `property: value`.
fn clean_style(style: &str) -> String {
    let mut kept = Vec::new();
    for declaration in style.split(';') {
        if let Some((prop, value)) = declaration.split_once(':') {
            let prop = prop.trim();
            let value = value.trim();
            if prop.is_empty() || value.is_empty() {
                continue;
            }
            let prop_lower = prop.to_ascii_lowercase();
            if KEPT_STYLE_PROPS.iter().any(|keep| prop_lower.contains(keep)) {
                kept.push(format!("{}: {}", prop, value));
            }
        }
    }
    kept.join("; ")
}

/// Check whether any class token carries the vendor marker. The whole
/// attribute is removed when one does; tokens are not removed surgically.
fn has_vendor_class(value: &str) -> bool {
    value
        .split_ascii_whitespace()
        .any(|token| token.contains(VENDOR_CLASS_MARKER))
}

fn write_attribute(name: &str, value: &str, out: &mut String) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            _ => out.push(c),
        }
    }
    out.push('"');
}

fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}
