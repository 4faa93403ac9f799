//! Raster quantization: pixel grid in, palette-id sequence out.

use image::RgbImage;

use crate::matcher::ColorMatcher;

/// Map every pixel of `image` to its nearest palette id, in row-major
/// order (top row first, left to right).
///
/// The caller is responsible for shape validation (see
/// [`crate::source::load_source`]); this walk assumes the raster is
/// already the required 128×128 RGB grid. Row-major order is load-bearing:
/// it determines the spatial layout the game client renders.
///
/// # Arguments
/// * `image` - Decoded RGB raster
/// * `matcher` - Color matcher (and its memo cache) to resolve pixels with
///
/// # Returns
/// One palette id per pixel, `width * height` bytes.
pub fn quantize(image: &RgbImage, matcher: &mut ColorMatcher) -> Vec<u8> {
    let mut colors = Vec::with_capacity((image.width() * image.height()) as usize);

    // ImageBuffer iterates pixels row-major, matching the output layout.
    for pixel in image.pixels() {
        colors.push(matcher.nearest(pixel.0));
    }

    log::debug!(
        "quantized {} pixels into {} distinct palette colors",
        colors.len(),
        matcher.cached_colors()
    );

    colors
}
