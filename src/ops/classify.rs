use image::{GrayImage, Luma};

/// Pixel value for classified foreground ("ink").
pub const FOREGROUND: u8 = 255;
/// Pixel value for classified background ("page").
pub const BACKGROUND: u8 = 0;

/// Which side of the threshold counts as foreground.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Polarity {
    /// Luma strictly above the threshold is foreground.
    BrightForeground,
    /// Luma strictly below the threshold is foreground. This is the
    /// polarity for dark ink on a light page.
    DarkForeground,
}

/// Classify a luma image into a strict binary image.
///
/// Every output pixel is exactly [`FOREGROUND`] or [`BACKGROUND`]; luma
/// equal to the threshold is background under both polarities.
pub fn classify(luma: &GrayImage, threshold: u8, polarity: Polarity) -> GrayImage {
    GrayImage::from_fn(luma.width(), luma.height(), |x, y| {
        let value = luma.get_pixel(x, y)[0];
        let is_foreground = match polarity {
            Polarity::BrightForeground => value > threshold,
            Polarity::DarkForeground => value < threshold,
        };
        Luma([if is_foreground { FOREGROUND } else { BACKGROUND }])
    })
}

/// Force the outermost pixel ring to background, in place.
///
/// Edge artifacts from the photograph border would otherwise anchor the
/// morphological cleanup that follows.
pub fn mask_border(image: &mut GrayImage) {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return;
    }
    for x in 0..width {
        image.put_pixel(x, 0, Luma([BACKGROUND]));
        image.put_pixel(x, height - 1, Luma([BACKGROUND]));
    }
    for y in 0..height {
        image.put_pixel(0, y, Luma([BACKGROUND]));
        image.put_pixel(width - 1, y, Luma([BACKGROUND]));
    }
}
