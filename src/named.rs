//! Named reference colours used to label a garment's dominant colour.

use std::sync::LazyLock;

use crate::colour::{Rgb, hex_to_rgb, rgb_to_hex};
use crate::error::Result;

/// Wardrobe colour names offered to users, in lookup order.
///
/// Order matters: when two entries are equally close to a colour the earlier
/// one wins, so Fuchsia shadows Magenta.
pub const STANDARD_COLOURS: [(&str, &str); 24] = [
    ("Black", "#000000"),
    ("White", "#FFFFFF"),
    ("Grey", "#808080"),
    ("Navy", "#000080"),
    ("Beige", "#F5F5DC"),
    ("Brown", "#8B4513"),
    ("Red", "#FF0000"),
    ("Pink", "#FFC0CB"),
    ("Orange", "#FFA500"),
    ("Yellow", "#FFFF00"),
    ("Green", "#008000"),
    ("Blue", "#0000FF"),
    ("Purple", "#800080"),
    ("Cream", "#FFFDD0"),
    ("Khaki", "#C3B091"),
    ("Teal", "#008080"),
    ("Mustard", "#FFDB58"),
    ("Lavender", "#E6E6FA"),
    ("Olive", "#808000"),
    ("Maroon", "#800000"),
    ("Coral", "#FF7F50"),
    ("Fuchsia", "#FF00FF"),
    ("Turquoise", "#40E0D0"),
    ("Magenta", "#FF00FF"),
];

static STANDARD: LazyLock<ColourPalette> = LazyLock::new(|| ColourPalette {
    entries: STANDARD_COLOURS
        .iter()
        .map(|&(name, hex)| NamedColour {
            name: name.to_string(),
            hex: hex.to_string(),
            rgb: hex_to_rgb(hex).expect("standard colour table is corrupt"),
        })
        .collect(),
});

#[derive(Debug, Clone, PartialEq)]
pub struct NamedColour {
    pub name: String,
    /// Canonical `#RRGGBB` form.
    pub hex: String,
    pub rgb: Rgb,
}

/// An ordered, read-only set of named colours.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColourPalette {
    entries: Vec<NamedColour>,
}

impl ColourPalette {
    /// The wardrobe palette, built once per process.
    pub fn standard() -> &'static ColourPalette {
        &STANDARD
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a palette from `(name, hex)` pairs, keeping their order.
    pub fn from_entries<I, N, H>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (N, H)>,
        N: Into<String>,
        H: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|(name, hex)| {
                let rgb = hex_to_rgb(hex.as_ref())?;
                Ok(NamedColour {
                    name: name.into(),
                    hex: rgb_to_hex(rgb),
                    rgb,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NamedColour> {
        self.entries.iter()
    }

    /// First entry with the given name, compared case-insensitively.
    pub fn get(&self, name: &str) -> Option<&NamedColour> {
        self.entries
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(name))
    }
}

impl<'a> IntoIterator for &'a ColourPalette {
    type Item = &'a NamedColour;
    type IntoIter = std::slice::Iter<'a, NamedColour>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[path = "named_test.rs"]
mod tests;
