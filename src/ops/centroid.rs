use crate::ops::classify::FOREGROUND;
use image::GrayImage;

/// Unweighted center of mass of the foreground, in pixel-center units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    pub x: f64,
    pub y: f64,
}

impl Centroid {
    /// Round to integer pixel coordinates, half away from zero.
    pub fn to_pixel(self) -> (i64, i64) {
        (self.x.round() as i64, self.y.round() as i64)
    }
}

/// Compute the arithmetic mean position of all foreground pixels.
///
/// Returns `None` when the image contains no foreground at all.
pub fn centroid(binary: &GrayImage) -> Option<Centroid> {
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut count = 0u64;
    for (x, y, pixel) in binary.enumerate_pixels() {
        if pixel[0] == FOREGROUND {
            sum_x += x as f64;
            sum_y += y as f64;
            count += 1;
        }
    }
    (count > 0).then(|| Centroid {
        x: sum_x / count as f64,
        y: sum_y / count as f64,
    })
}
