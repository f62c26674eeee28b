//! CSS declaration parsing helpers.
//!
//! Only the small, non-shorthand property set produced by rich-text
//! editors is supported. Unrecognized values contribute nothing to the
//! resolved style; nothing here can fail.

use crate::model::{Alignment, Rgb};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static RGB_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"rgb\((\d+),\s*(\d+),\s*(\d+)\)").expect("RGB_FN_RE: hardcoded regex is valid")
});

/// Parse a `;`-separated declaration string into a property/value map.
///
/// Property names are lowercased and trimmed; the last occurrence of a
/// duplicate property wins.
pub fn parse_declarations(style: &str) -> HashMap<String, String> {
    let mut declarations = HashMap::new();
    for item in style.split(';') {
        if let Some((prop, value)) = item.split_once(':') {
            declarations.insert(
                prop.trim().to_ascii_lowercase(),
                value.trim().to_string(),
            );
        }
    }
    declarations
}

/// Parse a CSS color value into an RGB triple.
///
/// Accepts `#RRGGBB`, `#RGB`, `rgb(r, g, b)`, and a small name table.
/// Anything else yields `None`.
pub fn parse_color(value: &str) -> Option<Rgb> {
    let value = value.trim().to_ascii_lowercase();

    if let Some(hex) = value.strip_prefix('#') {
        return parse_hex(hex);
    }

    if value.starts_with("rgb") {
        if let Some(caps) = RGB_FN_RE.captures(&value) {
            let r = caps[1].parse::<u8>().ok()?;
            let g = caps[2].parse::<u8>().ok()?;
            let b = caps[3].parse::<u8>().ok()?;
            return Some(Rgb(r, g, b));
        }
        return None;
    }

    match value.as_str() {
        "black" => Some(Rgb::BLACK),
        "white" => Some(Rgb::WHITE),
        "red" => Some(Rgb::RED),
        "green" => Some(Rgb::GREEN),
        "blue" => Some(Rgb::BLUE),
        "yellow" => Some(Rgb::YELLOW),
        "gray" | "grey" => Some(Rgb::GRAY),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Rgb(r, g, b))
        }
        3 => {
            // Each nibble duplicated: #f0a -> #ff00aa
            let mut parts = [0u8; 3];
            for (i, c) in hex.chars().enumerate() {
                let nibble = c.to_digit(16)? as u8;
                parts[i] = nibble << 4 | nibble;
            }
            Some(Rgb(parts[0], parts[1], parts[2]))
        }
        _ => None,
    }
}

/// Parse a `font-size` value into points.
///
/// `pt` values are taken directly, `px` values are converted at 0.75
/// points per pixel. Unrecognized units yield `None`.
pub fn parse_font_size(value: &str) -> Option<f32> {
    let value = value.trim().to_ascii_lowercase();
    if let Some(points) = value.strip_suffix("pt") {
        return points.trim().parse::<f32>().ok();
    }
    if let Some(pixels) = value.strip_suffix("px") {
        return pixels.trim().parse::<f32>().ok().map(|px| px * 0.75);
    }
    None
}

/// Parse a `font-family` value: first comma-separated token, quotes stripped.
pub fn parse_font_family(value: &str) -> Option<String> {
    let first = value.split(',').next()?;
    let family = first.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if family.is_empty() {
        None
    } else {
        Some(family.to_string())
    }
}

/// Check whether a `font-weight` value means bold.
///
/// "bold" and numeric weights of 700 and above count as bold.
pub fn is_bold_weight(value: &str) -> bool {
    let value = value.trim().to_ascii_lowercase();
    if value == "bold" {
        return true;
    }
    value.parse::<u32>().map(|w| w >= 700).unwrap_or(false)
}

/// Extract a paragraph alignment from a full style string.
///
/// The scan is substring-based: if `text-align` is present anywhere, the
/// first of left/center/right/justify found in the string selects the
/// alignment.
pub fn parse_alignment(style: &str) -> Option<Alignment> {
    if !style.contains("text-align") {
        return None;
    }
    if style.contains("left") {
        Some(Alignment::Left)
    } else if style.contains("center") {
        Some(Alignment::Center)
    } else if style.contains("right") {
        Some(Alignment::Right)
    } else if style.contains("justify") {
        Some(Alignment::Justify)
    } else {
        None
    }
}
