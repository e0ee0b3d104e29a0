use serde::{Deserialize, Serialize};

use crate::colour::{Rgb, euclidean, to_point, validate_point};
use crate::error::Result;
use crate::named::{ColourPalette, NamedColour};
use crate::sampler::{PixelBuffer, sample_dominant_colour};

/// The palette entry chosen for a colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColourMatch {
    pub name: String,
    /// `#RRGGBB` of the palette entry, not of the input colour.
    pub value: String,
}

impl From<&NamedColour> for ColourMatch {
    fn from(entry: &NamedColour) -> Self {
        Self {
            name: entry.name.clone(),
            value: entry.hex.clone(),
        }
    }
}

/// Closest palette entry to `rgb`, or `None` for an empty palette.
pub fn match_colour(rgb: Rgb, palette: &ColourPalette) -> Option<ColourMatch> {
    nearest(&to_point(rgb), palette)
}

/// Like [`match_colour`] for untyped input, which must be three finite numbers.
pub fn match_components(components: &[f64], palette: &ColourPalette) -> Result<Option<ColourMatch>> {
    let point = validate_point(components)?;
    Ok(nearest(&point, palette))
}

fn nearest(point: &[f64; 3], palette: &ColourPalette) -> Option<ColourMatch> {
    let mut best: Option<(&NamedColour, f64)> = None;
    for entry in palette {
        let d = euclidean(point, &to_point(entry.rgb));
        // Strictly smaller only: earlier entries win ties.
        if best.is_none_or(|(_, best_d)| d < best_d) {
            best = Some((entry, d));
        }
    }
    best.map(|(entry, _)| ColourMatch::from(entry))
}

/// Name the dominant colour of `buffer` using the standard palette.
pub fn get_colour(buffer: &PixelBuffer<'_>) -> Result<Option<ColourMatch>> {
    get_colour_with(buffer, ColourPalette::standard())
}

pub fn get_colour_with(buffer: &PixelBuffer<'_>, palette: &ColourPalette) -> Result<Option<ColourMatch>> {
    let dominant = sample_dominant_colour(buffer)?;
    let matched = match_colour(dominant, palette);
    tracing::debug!(?matched, "matched dominant colour");
    Ok(matched)
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod tests;
