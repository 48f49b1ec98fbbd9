//! Dashed-line annotation on binary images.
//!
//! The rasterizer is a general Bresenham walk between any two endpoints;
//! the pipeline only ever asks for axis-aligned crosshair segments, but
//! diagonal annotations draw just as well.

use crate::ops::classify::FOREGROUND;
use image::{GrayImage, Luma};

// A step counter ticks once per rasterized point; the 3x3 brush is down
// while `counter % DASH_PERIOD < DASH_ON`, giving 10-point dashes.
const DASH_PERIOD: u64 = 20;
const DASH_ON: u64 = 10;

/// Draw a dashed 3-pixel-thick line from `from` to `to`, in place.
///
/// Every painted coordinate is clipped to the image bounds; out-of-bounds
/// writes are silently dropped, so endpoints outside the image are fine.
pub fn draw_dashed_line(image: &mut GrayImage, from: (i64, i64), to: (i64, i64)) {
    let (mut x, mut y) = from;
    let (x1, y1) = to;
    let dx = (x1 - x).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let dy = -(y1 - y).abs();
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    let mut counter = 0u64;

    loop {
        if counter % DASH_PERIOD < DASH_ON {
            stamp(image, x, y);
        }
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
        counter += 1;
    }
}

/// Draw a dashed crosshair through `center`: a horizontal segment across
/// the full width and a vertical segment across the full height.
pub fn draw_crosshair(image: &mut GrayImage, center: (i64, i64)) {
    let width = image.width() as i64;
    let height = image.height() as i64;
    let (cx, cy) = center;
    draw_dashed_line(image, (0, cy), (width - 1, cy));
    draw_dashed_line(image, (cx, 0), (cx, height - 1));
}

/// Paint a 3×3 foreground block centered on (cx, cy), clipped to bounds.
fn stamp(image: &mut GrayImage, cx: i64, cy: i64) {
    for dy in -1..=1 {
        for dx in -1..=1 {
            let nx = cx + dx;
            let ny = cy + dy;
            if nx >= 0 && ny >= 0 && (nx as u32) < image.width() && (ny as u32) < image.height() {
                image.put_pixel(nx as u32, ny as u32, Luma([FOREGROUND]));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::classify::BACKGROUND;

    fn blank(w: u32, h: u32) -> GrayImage {
        GrayImage::from_pixel(w, h, Luma([BACKGROUND]))
    }

    #[test]
    fn horizontal_dashes_alternate_every_ten_steps() {
        let mut image = blank(60, 9);
        draw_dashed_line(&mut image, (0, 4), (59, 4));
        for x in 0..60u32 {
            let lit = image.get_pixel(x, 4)[0] == FOREGROUND;
            // Step s of the walk is lit while s % 20 < 10; the 3-wide brush
            // also reaches pixel x from the steps on either side.
            let expected = (x.saturating_sub(1)..=(x + 1).min(59)).any(|s| s % 20 < 10);
            assert_eq!(lit, expected, "at x={x}");
        }
    }

    #[test]
    fn first_dash_starts_lit() {
        let mut image = blank(30, 5);
        draw_dashed_line(&mut image, (0, 2), (29, 2));
        assert_eq!(image.get_pixel(0, 2)[0], FOREGROUND);
    }

    #[test]
    fn out_of_bounds_endpoints_are_clipped_silently() {
        let mut image = blank(10, 10);
        draw_dashed_line(&mut image, (-5, -5), (14, 14));
        // Nothing to assert beyond "did not panic" and bounds: every pixel
        // is either untouched or foreground.
        assert!(image
            .pixels()
            .all(|p| p[0] == FOREGROUND || p[0] == BACKGROUND));
    }

    #[test]
    fn diagonal_lines_rasterize() {
        let mut image = blank(25, 25);
        draw_dashed_line(&mut image, (0, 0), (24, 24));
        // The first dash covers the first ten diagonal steps.
        assert_eq!(image.get_pixel(5, 5)[0], FOREGROUND);
        assert!(image.pixels().any(|p| p[0] == FOREGROUND));
    }

    #[test]
    fn crosshair_spans_both_axes_through_the_center() {
        let mut image = blank(41, 31);
        draw_crosshair(&mut image, (20, 15));
        // Dash starts are lit at the segment origins and at the center.
        assert_eq!(image.get_pixel(0, 15)[0], FOREGROUND);
        assert_eq!(image.get_pixel(20, 0)[0], FOREGROUND);
        assert_eq!(image.get_pixel(20, 15)[0], FOREGROUND);
    }
}
