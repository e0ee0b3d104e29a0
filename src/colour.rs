use palette::Srgb;

use crate::error::{ColourError, Result};

/// An exact 8-bit RGB triple.
pub type Rgb = Srgb<u8>;

/// Format a colour as `#RRGGBB` with uppercase digits.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}

/// Build a colour from a slice that must hold exactly three components.
pub fn rgb_from_components(components: &[u8]) -> Result<Rgb> {
    match components {
        &[r, g, b] => Ok(Srgb::new(r, g, b)),
        _ => Err(ColourError::invalid_colour(format!(
            "invalid RGB tuple {components:?}: expected 3 components, got {}",
            components.len()
        ))),
    }
}

/// Fallible counterpart of [`rgb_to_hex`] for untyped input.
pub fn components_to_hex(components: &[u8]) -> Result<String> {
    rgb_from_components(components).map(rgb_to_hex)
}

/// Parse `#RRGGBB` (the leading `#` is optional, digits are case-insensitive).
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(ColourError::invalid_colour(format!(
            "hex colour {hex:?} must have 6 digits"
        )));
    }
    // from_str_radix tolerates a leading sign, so check the digits first.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColourError::invalid_colour(format!(
            "hex colour {hex:?} contains non-hex characters"
        )));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| ColourError::invalid_colour(format!("hex colour {hex:?}: {e}")))
    };
    Ok(Srgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

/// Euclidean distance between two colours in RGB space.
pub fn distance(a: Rgb, b: Rgb) -> f64 {
    euclidean(&to_point(a), &to_point(b))
}

/// Euclidean distance between two untyped colours.
///
/// Both sides must have exactly three finite components. Fractional values
/// are accepted, so averaged or scaled colours can be compared too.
pub fn calculate_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    let a = validate_point(a)?;
    let b = validate_point(b)?;
    Ok(euclidean(&a, &b))
}

pub(crate) fn to_point(rgb: Rgb) -> [f64; 3] {
    [rgb.red.into(), rgb.green.into(), rgb.blue.into()]
}

pub(crate) fn validate_point(components: &[f64]) -> Result<[f64; 3]> {
    let point: [f64; 3] = components.try_into().map_err(|_| {
        ColourError::invalid_colour(format!(
            "colour must have exactly 3 components (R, G, B), got {}",
            components.len()
        ))
    })?;
    if point.iter().any(|c| !c.is_finite()) {
        return Err(ColourError::invalid_colour(format!(
            "colour components must be finite numbers, got {point:?}"
        )));
    }
    Ok(point)
}

pub(crate) fn euclidean(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
#[path = "colour_test.rs"]
mod tests;
