//! Helpers around a single garment upload: decoding the photo, encoding the
//! processed image for storage, and preparing the shape-classifier input.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use image::{DynamicImage, GenericImageView, ImageFormat, RgbaImage, imageops::FilterType};

use crate::colour::{Rgb, rgb_to_hex};
use crate::error::{ColourError, Result};
use crate::matcher::{ColourMatch, match_colour};
use crate::named::ColourPalette;
use crate::sampler::{PixelBuffer, sample_dominant_colour};

/// Side length of the square greyscale image the classifier expects.
pub const CLASSIFIER_SIDE: u32 = 28;

/// Garment labels in the classifier's output order (Fashion-MNIST).
pub const CLASS_NAMES: [&str; 10] = [
    "T-shirt/top",
    "Trouser",
    "Pullover",
    "Dress",
    "Coat",
    "Sandal",
    "Shirt",
    "Sneaker",
    "Bag",
    "Ankle boot",
];

/// Colour findings for one upload.
#[derive(Debug, Clone, PartialEq)]
pub struct GarmentColour {
    pub dominant: Rgb,
    pub hex: String,
    pub colour: Option<ColourMatch>,
}

/// Decode a JPEG or PNG upload. Other formats are refused even if decodable.
pub fn decode_image(input: &[u8]) -> Result<DynamicImage> {
    let format = image::guess_format(input).map_err(ColourError::Decode)?;
    if !matches!(format, ImageFormat::Png | ImageFormat::Jpeg) {
        tracing::warn!(?format, "rejected upload format");
        return Err(ColourError::UnsupportedFormat(format));
    }
    let img = image::load_from_memory_with_format(input, format).map_err(ColourError::Decode)?;
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return Err(ColourError::EmptyImage);
    }
    Ok(img)
}

/// PNG-encode an RGBA image, keeping its transparency.
pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    {
        let mut cursor = std::io::Cursor::new(&mut buf);
        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(ColourError::Encode)?;
    }
    Ok(buf)
}

/// [`encode_png`] as a base64 string, for inline transport.
pub fn encode_png_base64(img: &RgbaImage) -> Result<String> {
    Ok(BASE64.encode(encode_png(img)?))
}

/// Greyscale, 28×28, row-major intensities in `[0, 1]`.
pub fn classifier_input(img: &DynamicImage) -> Vec<f32> {
    let grey = img.to_luma8();
    let small = image::imageops::resize(&grey, CLASSIFIER_SIDE, CLASSIFIER_SIDE, FilterType::CatmullRom);
    small
        .into_raw()
        .into_iter()
        .map(|v| f32::from(v) / 255.0)
        .collect()
}

/// Label for the highest classifier score; the first wins on equal scores.
pub fn class_label(scores: &[f32]) -> Result<&'static str> {
    let invalid = || ColourError::ClassifierScores {
        len: scores.len(),
        expected: CLASS_NAMES.len(),
    };
    if scores.len() != CLASS_NAMES.len() || scores.iter().any(|s| !s.is_finite()) {
        return Err(invalid());
    }
    let mut best = 0;
    for (i, &score) in scores.iter().enumerate() {
        if score > scores[best] {
            best = i;
        }
    }
    Ok(CLASS_NAMES[best])
}

/// Decode an upload whose background is already transparent and name its colour.
pub fn analyse_colour(input: &[u8], palette: &ColourPalette) -> Result<GarmentColour> {
    let rgba = decode_image(input)?.to_rgba8();
    let dominant = sample_dominant_colour(&PixelBuffer::from_rgba(&rgba))?;
    let colour = match_colour(dominant, palette);
    tracing::debug!(
        width = rgba.width(),
        height = rgba.height(),
        hex = %rgb_to_hex(dominant),
        ?colour,
        "analysed upload"
    );
    Ok(GarmentColour {
        dominant,
        hex: rgb_to_hex(dominant),
        colour,
    })
}

#[cfg(test)]
#[path = "upload_test.rs"]
mod tests;
