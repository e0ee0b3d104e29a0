//! Dominant-colour sampling over RGBA buffers whose background has
//! already been made transparent.

use std::collections::HashMap;

use image::RgbaImage;
use palette::Srgb;

use crate::colour::Rgb;
use crate::error::{ColourError, Result};

/// Alpha values at or below this are leftovers from background removal.
pub const VISIBILITY_THRESHOLD: u8 = 10;

const RGBA_CHANNELS: usize = 4;

/// A borrowed, row-major view over interleaved pixel data.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    width: u32,
    height: u32,
    channels: usize,
    data: &'a [u8],
}

impl<'a> PixelBuffer<'a> {
    pub fn new(width: u32, height: u32, channels: usize, data: &'a [u8]) -> Result<Self> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(channels));
        if expected != Some(data.len()) {
            return Err(ColourError::BufferSize {
                width,
                height,
                channels,
                expected: expected.unwrap_or(usize::MAX),
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    pub fn from_rgba(image: &'a RgbaImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            channels: RGBA_CHANNELS,
            data: image.as_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &'a [u8] {
        self.data
    }

    fn rgba_pixels(&self) -> Result<std::slice::ChunksExact<'a, u8>> {
        if self.channels != RGBA_CHANNELS {
            return Err(ColourError::Shape {
                channels: self.channels,
            });
        }
        Ok(self.data.chunks_exact(RGBA_CHANNELS))
    }
}

fn is_visible(pixel: &[u8]) -> bool {
    pixel[3] > VISIBILITY_THRESHOLD
}

/// Number of pixels that count towards the dominant colour.
pub fn visible_pixel_count(buffer: &PixelBuffer<'_>) -> Result<usize> {
    Ok(buffer.rgba_pixels()?.filter(|px| is_visible(px)).count())
}

/// The most frequent exact RGB triple among visible pixels.
///
/// Equally frequent triples resolve to the one scanned first.
pub fn sample_dominant_colour(buffer: &PixelBuffer<'_>) -> Result<Rgb> {
    let pixels = buffer.rgba_pixels()?;

    let mut counts: HashMap<[u8; 3], u32> = HashMap::new();
    let mut first_seen: Vec<[u8; 3]> = Vec::new();
    for px in pixels.filter(|px| is_visible(px)) {
        let rgb = [px[0], px[1], px[2]];
        *counts.entry(rgb).or_insert_with(|| {
            first_seen.push(rgb);
            0
        }) += 1;
    }

    let mut best: Option<([u8; 3], u32)> = None;
    for rgb in first_seen {
        let count = counts[&rgb];
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((rgb, count));
        }
    }

    let Some(([r, g, b], count)) = best else {
        tracing::warn!(
            width = buffer.width(),
            height = buffer.height(),
            "no visible pixels after background removal"
        );
        return Err(ColourError::NoVisiblePixels);
    };
    tracing::debug!(r, g, b, count, distinct = counts.len(), "sampled dominant colour");
    Ok(Srgb::new(r, g, b))
}

#[cfg(test)]
#[path = "sampler_test.rs"]
mod tests;
