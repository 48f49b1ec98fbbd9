//! 3×3 morphology: erosion, dilation, and their iterated compositions.
//!
//! The structuring element is the fixed full 3×3 neighborhood. Neighbors
//! that fall outside the image are omitted from the aggregate rather than
//! padded with 0 or 255, which changes edge-pixel results versus a
//! zero-padded implementation.

use image::{GrayImage, Luma};

/// Dilation: each output pixel is the maximum over its in-bounds 3×3
/// neighborhood.
pub fn dilate(input: &GrayImage) -> GrayImage {
    neighborhood_map(input, u8::max)
}

/// Erosion: each output pixel is the minimum over its in-bounds 3×3
/// neighborhood.
pub fn erode(input: &GrayImage) -> GrayImage {
    neighborhood_map(input, u8::min)
}

fn neighborhood_map(input: &GrayImage, fold: fn(u8, u8) -> u8) -> GrayImage {
    let (width, height) = input.dimensions();
    let mut output = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            // The center is always in bounds, so it seeds the fold.
            let mut acc = input.get_pixel(x, y)[0];
            for dy in -1i64..=1 {
                for dx in -1i64..=1 {
                    let nx = x as i64 + dx;
                    let ny = y as i64 + dy;
                    if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                        continue;
                    }
                    acc = fold(acc, input.get_pixel(nx as u32, ny as u32)[0]);
                }
            }
            output.put_pixel(x, y, Luma([acc]));
        }
    }
    output
}

/// Opening: `iterations` rounds of erode-then-dilate.
///
/// Removes small foreground protrusions while approximately preserving
/// the silhouette of large regions. Each round consumes the fully
/// committed result of the previous one.
pub fn open(input: &GrayImage, iterations: u32) -> GrayImage {
    let mut current = input.clone();
    for _ in 0..iterations {
        let eroded = erode(&current);
        current = dilate(&eroded);
    }
    current
}

/// Closing: `iterations` rounds of dilate-then-erode.
///
/// Fills small background gaps inside foreground regions; same iteration
/// discipline as [`open`].
pub fn close(input: &GrayImage, iterations: u32) -> GrayImage {
    let mut current = input.clone();
    for _ in 0..iterations {
        let dilated = dilate(&current);
        current = erode(&dilated);
    }
    current
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::classify::{BACKGROUND, FOREGROUND};

    fn all_of(image: &GrayImage, value: u8) -> bool {
        image.pixels().all(|p| p[0] == value)
    }

    #[test]
    fn dilate_grows_a_single_pixel_to_a_block() {
        let mut input = GrayImage::from_pixel(5, 5, Luma([BACKGROUND]));
        input.put_pixel(2, 2, Luma([FOREGROUND]));
        let output = dilate(&input);
        for (x, y, pixel) in output.enumerate_pixels() {
            let near = (1..=3).contains(&x) && (1..=3).contains(&y);
            let expected = if near { FOREGROUND } else { BACKGROUND };
            assert_eq!(pixel[0], expected, "at ({x},{y})");
        }
    }

    #[test]
    fn erode_removes_a_single_pixel() {
        let mut input = GrayImage::from_pixel(5, 5, Luma([BACKGROUND]));
        input.put_pixel(2, 2, Luma([FOREGROUND]));
        assert!(all_of(&erode(&input), BACKGROUND));
    }

    #[test]
    fn out_of_range_neighbors_are_omitted_not_padded() {
        // A zero-padded erosion would clear the edges of a uniform image;
        // clamped neighborhoods leave it untouched.
        let input = GrayImage::from_pixel(4, 4, Luma([FOREGROUND]));
        assert!(all_of(&erode(&input), FOREGROUND));
        // The dual: dilation of uniform background stays background.
        let input = GrayImage::from_pixel(4, 4, Luma([BACKGROUND]));
        assert!(all_of(&dilate(&input), BACKGROUND));
    }

    #[test]
    fn dilate_is_monotonic_and_erode_is_its_dual() {
        let a = GrayImage::from_fn(6, 6, |x, y| Luma([((x * 31 + y * 57) % 200) as u8]));
        let b = GrayImage::from_fn(6, 6, |x, y| {
            Luma([a.get_pixel(x, y)[0].saturating_add(((x + y) % 40) as u8)])
        });
        // a <= b pointwise by construction.
        let (da, db) = (dilate(&a), dilate(&b));
        let (ea, eb) = (erode(&a), erode(&b));
        for (x, y, _) in a.enumerate_pixels() {
            assert!(da.get_pixel(x, y)[0] <= db.get_pixel(x, y)[0]);
            assert!(ea.get_pixel(x, y)[0] <= eb.get_pixel(x, y)[0]);
        }
    }

    #[test]
    fn opening_uniform_foreground_is_identity() {
        let input = GrayImage::from_pixel(5, 5, Luma([FOREGROUND]));
        assert!(all_of(&open(&input, 1), FOREGROUND));
    }

    #[test]
    fn opening_removes_an_isolated_speck() {
        let mut input = GrayImage::from_pixel(9, 9, Luma([BACKGROUND]));
        input.put_pixel(1, 1, Luma([FOREGROUND]));
        // A 4x4 block survives one opening round; the speck does not.
        for y in 4..8 {
            for x in 4..8 {
                input.put_pixel(x, y, Luma([FOREGROUND]));
            }
        }
        let output = open(&input, 1);
        assert_eq!(output.get_pixel(1, 1)[0], BACKGROUND);
        assert_eq!(output.get_pixel(5, 5)[0], FOREGROUND);
    }

    #[test]
    fn closing_fills_an_interior_hole() {
        let mut input = GrayImage::from_pixel(7, 7, Luma([FOREGROUND]));
        input.put_pixel(3, 3, Luma([BACKGROUND]));
        assert!(all_of(&close(&input, 1), FOREGROUND));
    }

    #[test]
    fn repeated_opening_is_idempotent() {
        let mut input = GrayImage::from_pixel(9, 9, Luma([BACKGROUND]));
        for y in 2..7 {
            for x in 3..8 {
                input.put_pixel(x, y, Luma([FOREGROUND]));
            }
        }
        input.put_pixel(0, 8, Luma([FOREGROUND]));
        assert_eq!(open(&input, 2), open(&input, 1));
    }
}
