use image::{GrayImage, Luma, RgbImage};

// ITU-R BT.601 luma weights.
const WEIGHT_R: f64 = 0.299;
const WEIGHT_G: f64 = 0.587;
const WEIGHT_B: f64 = 0.114;

/// Reduce an RGB image to single-channel luma.
///
/// The weighted sum is computed in floating point and truncated (not
/// rounded) to 8 bits, so e.g. (100, 150, 200) maps to 140, not 141.
pub fn to_grayscale(rgb: &RgbImage) -> GrayImage {
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let pixel = rgb.get_pixel(x, y);
        let luma = WEIGHT_R * pixel[0] as f64
            + WEIGHT_G * pixel[1] as f64
            + WEIGHT_B * pixel[2] as f64;
        Luma([luma as u8])
    })
}
