use image::{GrayImage, Luma};

/// Remove impulse noise with a 3×3 median filter.
///
/// Each interior pixel becomes the median of its 9-sample neighborhood
/// (sort and take the middle element). The filter only defines values for
/// interior pixels; the outermost ring passes through from the input
/// unchanged so the output stays complete.
pub fn median_filter(input: &GrayImage) -> GrayImage {
    let (width, height) = input.dimensions();
    let mut output = input.clone();
    if width < 3 || height < 3 {
        return output;
    }

    let mut window = [0u8; 9];
    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut k = 0;
            for dy in -1i32..=1 {
                for dx in -1i32..=1 {
                    let nx = (x as i32 + dx) as u32;
                    let ny = (y as i32 + dy) as u32;
                    window[k] = input.get_pixel(nx, ny)[0];
                    k += 1;
                }
            }
            window.sort_unstable();
            output.put_pixel(x, y, Luma([window[4]]));
        }
    }
    output
}
