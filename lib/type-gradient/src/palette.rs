//! Elemental type colors used for the window background.

use crate::Color;

pub const FALLBACK_TYPE: &str = "normal";

const TYPE_COLORS: [(&str, Color); 18] = [
    ("fire", Color::new(0xF0, 0x80, 0x30)),
    ("water", Color::new(0x68, 0x90, 0xF0)),
    ("grass", Color::new(0x78, 0xC8, 0x50)),
    ("poison", Color::new(0xA0, 0x40, 0xA0)),
    ("electric", Color::new(0xF8, 0xD0, 0x30)),
    ("bug", Color::new(0xA8, 0xB8, 0x20)),
    ("normal", Color::new(0xA8, 0xA8, 0x78)),
    ("fairy", Color::new(0xEE, 0x99, 0xAC)),
    ("flying", Color::new(0xA8, 0x90, 0xF0)),
    ("psychic", Color::new(0xF8, 0x58, 0x88)),
    ("ground", Color::new(0xE0, 0xC0, 0x68)),
    ("rock", Color::new(0xB8, 0xA0, 0x38)),
    ("ghost", Color::new(0x70, 0x58, 0x98)),
    ("ice", Color::new(0x98, 0xD8, 0xD8)),
    ("dragon", Color::new(0x70, 0x38, 0xF8)),
    ("dark", Color::new(0x70, 0x58, 0x48)),
    ("steel", Color::new(0xB8, 0xB8, 0xD0)),
    ("fighting", Color::new(0xC0, 0x30, 0x28)),
];

/// Case-insensitive lookup of one type name.
pub fn type_color(name: &str) -> Option<Color> {
    let name = name.trim().to_lowercase();

    TYPE_COLORS
        .iter()
        .find(|(ty, _)| *ty == name)
        .map(|(_, color)| *color)
}

/// Maps type names to colors, keeping their order.
///
/// Unknown names are skipped. The result is never empty: when nothing
/// matches it holds the [`FALLBACK_TYPE`] color.
pub fn type_colors<S: AsRef<str>>(names: &[S]) -> Vec<Color> {
    let colors = names
        .iter()
        .filter_map(|name| {
            let color = type_color(name.as_ref());
            if color.is_none() {
                log::warn!("no color for type `{}`", name.as_ref());
            }
            color
        })
        .collect::<Vec<_>>();

    if colors.is_empty() {
        type_color(FALLBACK_TYPE).into_iter().collect()
    } else {
        colors
    }
}
