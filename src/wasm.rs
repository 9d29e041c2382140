//! WebAssembly exports for rgbfilter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen. Images travel
//! as flat interleaved RGB bytes (length = width * height * 3); each call
//! returns a new buffer of the same size.

use wasm_bindgen::prelude::*;

use crate::{Filter, Image};

fn run(data: &[u8], width: usize, height: usize, filter: Filter) -> Result<Vec<u8>, JsError> {
    let mut img = Image::from_rgb_bytes(height, width, data)?;
    filter.apply(&mut img);
    Ok(img.to_rgb_bytes())
}

/// Convert RGB bytes to grayscale (mean of R, G, B).
///
/// # Arguments
/// * `data` - Flat array of RGB bytes (length = width * height * 3)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
#[wasm_bindgen]
pub fn grayscale_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Grayscale)
}

/// Apply sepia toning to RGB bytes.
#[wasm_bindgen]
pub fn sepia_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Sepia)
}

/// Mirror RGB bytes left to right.
#[wasm_bindgen]
pub fn reflect_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Reflect)
}

/// Apply a 3x3 box blur to RGB bytes.
#[wasm_bindgen]
pub fn blur_rgb_wasm(data: &[u8], width: usize, height: usize) -> Result<Vec<u8>, JsError> {
    run(data, width, height, Filter::Blur)
}

/// Apply a filter selected by name ("grayscale", "sepia", "reflect", "blur").
#[wasm_bindgen]
pub fn apply_filter_rgb_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    name: &str,
) -> Result<Vec<u8>, JsError> {
    let filter: Filter = name.parse()?;
    run(data, width, height, filter)
}
