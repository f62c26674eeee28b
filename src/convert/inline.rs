//! Inline-content resolution shared by paragraph, list item, and table
//! cell construction.
//!
//! Only direct children of the containing element are inspected. An
//! element child contributes one run holding the flattened text of its
//! whole subtree, styled by the outer element's tag and `style` attribute.
//! Nested inline formatting therefore collapses into a single run; this
//! matches the observed behavior of the editors this crate supports and
//! is kept deliberately.

use super::css;
use crate::model::{DocumentDefaults, Rgb, TextRun, TextStyle};
use scraper::ElementRef;

/// Fixed foreground color applied to hyperlink runs.
const HYPERLINK_COLOR: Rgb = Rgb::BLUE;

/// Resolve the inline children of `element` into styled text runs.
///
/// Whitespace-only text nodes and elements never produce a run. Nested
/// `ul`/`ol` children are structural content handled by the block walk
/// and are skipped here.
pub(crate) fn resolve_runs(element: ElementRef<'_>, defaults: &DocumentDefaults) -> Vec<TextRun> {
    let mut runs = Vec::new();

    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            if text.trim().is_empty() {
                continue;
            }
            runs.push(TextRun::styled(text.to_string(), base_style(defaults)));
        } else if let Some(el) = ElementRef::wrap(child) {
            let name = el.value().name();
            if matches!(name, "ul" | "ol") {
                continue;
            }

            let text: String = el.text().collect();
            if text.trim().is_empty() {
                continue;
            }

            let mut style = base_style(defaults);
            apply_tag_style(name, &mut style);
            if let Some(style_attr) = el.value().attr("style") {
                apply_declared_style(style_attr, &mut style);
            }
            runs.push(TextRun::styled(text, style));
        }
    }

    runs
}

/// Baseline style carrying the document default font.
fn base_style(defaults: &DocumentDefaults) -> TextStyle {
    TextStyle {
        font_name: Some(defaults.font_family.clone()),
        font_size: Some(defaults.font_size),
        ..Default::default()
    }
}

/// Apply formatting implied by the element's tag name.
fn apply_tag_style(name: &str, style: &mut TextStyle) {
    match name {
        "strong" | "b" => style.bold = true,
        "em" | "i" => style.italic = true,
        "u" => style.underline = true,
        "s" | "strike" | "del" => style.strikethrough = true,
        "a" => {
            style.color = Some(HYPERLINK_COLOR);
            style.underline = true;
        }
        _ => {}
    }
}

/// Apply inline CSS declarations on top of the tag-driven style.
///
/// Later writes to the same field win, so an explicit `color` overrides
/// the hyperlink blue. Unparseable values leave the field untouched.
fn apply_declared_style(style_attr: &str, style: &mut TextStyle) {
    let declarations = css::parse_declarations(style_attr);

    if let Some(value) = declarations.get("font-size") {
        if let Some(points) = css::parse_font_size(value) {
            style.font_size = Some(points);
        }
    }

    if let Some(value) = declarations.get("font-family") {
        if let Some(family) = css::parse_font_family(value) {
            style.font_name = Some(family);
        }
    }

    if let Some(value) = declarations.get("color") {
        if let Some(rgb) = css::parse_color(value) {
            style.color = Some(rgb);
        }
    }

    if let Some(value) = declarations.get("font-weight") {
        if css::is_bold_weight(value) {
            style.bold = true;
        }
    }

    if let Some(value) = declarations.get("font-style") {
        if value.trim() == "italic" {
            style.italic = true;
        }
    }

    if let Some(value) = declarations.get("text-decoration") {
        if value.contains("underline") {
            style.underline = true;
        }
        if value.contains("line-through") {
            style.strikethrough = true;
        }
    }
}
