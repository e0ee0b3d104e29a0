//! Garment colour extraction for the outfit app's upload pipeline.
//!
//! An uploaded photo arrives here after background removal. The most common
//! visible RGB triple is taken as the garment's colour and labelled with the
//! nearest entry of a fixed palette of wardrobe colour names.
use wasm_bindgen::prelude::*;
use js_sys::{Float32Array, Object, Reflect};

pub mod colour;
pub mod error;
pub mod matcher;
pub mod named;
pub mod sampler;
pub mod upload;

pub use colour::{Rgb, calculate_distance, components_to_hex, distance, hex_to_rgb, rgb_to_hex};
pub use error::{ColourError, Result};
pub use matcher::{ColourMatch, get_colour_with, match_colour, match_components};
pub use named::{ColourPalette, NamedColour};
pub use sampler::{PixelBuffer, VISIBILITY_THRESHOLD, sample_dominant_colour};
pub use upload::{
    GarmentColour, analyse_colour, class_label, classifier_input, decode_image, encode_png, encode_png_base64,
};

fn js_err(e: ColourError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Name the dominant colour of an encoded JPEG or PNG upload.
///
/// Resolves to `{ name, value }`, or `null` when the palette is empty.
#[wasm_bindgen(js_name = getColour)]
pub fn get_colour(input: Vec<u8>) -> std::result::Result<JsValue, JsValue> {
    let garment = analyse_colour(&input, ColourPalette::standard()).map_err(js_err)?;

    let Some(colour) = garment.colour else {
        return Ok(JsValue::NULL);
    };
    let result = Object::new();
    Reflect::set(&result, &JsValue::from_str("name"), &JsValue::from_str(&colour.name))?;
    Reflect::set(&result, &JsValue::from_str("value"), &JsValue::from_str(&colour.value))?;
    Ok(result.into())
}

/// The dominant visible colour of an encoded image as `#RRGGBB`.
#[wasm_bindgen(js_name = dominantColour)]
pub fn dominant_colour(input: Vec<u8>) -> std::result::Result<String, JsValue> {
    let rgba = decode_image(&input).map_err(js_err)?.to_rgba8();
    let rgb = sample_dominant_colour(&PixelBuffer::from_rgba(&rgba)).map_err(js_err)?;
    Ok(rgb_to_hex(rgb))
}

/// 28×28 greyscale intensities for the garment-shape classifier.
#[wasm_bindgen(js_name = classifierInput)]
pub fn classifier_input_js(input: Vec<u8>) -> std::result::Result<Float32Array, JsValue> {
    let img = decode_image(&input).map_err(js_err)?;
    Ok(Float32Array::from(classifier_input(&img).as_slice()))
}

/// Native counterpart of [`get_colour`].
#[cfg(not(target_arch = "wasm32"))]
pub fn get_colour_bytes(input: &[u8]) -> Result<Option<ColourMatch>> {
    Ok(analyse_colour(input, ColourPalette::standard())?.colour)
}

/// Native counterpart of [`dominant_colour`].
#[cfg(not(target_arch = "wasm32"))]
pub fn dominant_colour_bytes(input: &[u8]) -> Result<String> {
    Ok(analyse_colour(input, ColourPalette::standard())?.hex)
}
