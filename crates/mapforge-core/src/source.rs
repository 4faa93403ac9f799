//! Source image loading and input validation.
//!
//! The conversion contract is strict: the source must decode to exactly
//! a 128×128 color raster. Wrong dimensions, grayscale color modes, and
//! undecodable bytes are all rejected here, before any quantization
//! work starts and before anything reaches the output sink.

use std::io::Cursor;

use image::{ImageReader, RgbImage};
use thiserror::Error;

use crate::MAP_DIMENSION;

/// Errors raised while loading and validating a source image.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The bytes are not a decodable image.
    #[error("corrupted or unsupported image file: {0}")]
    Undecodable(String),

    /// The image is not the required square size.
    #[error("image must be {expected}x{expected} pixels, got {width}x{height}")]
    WrongDimensions {
        expected: u32,
        width: u32,
        height: u32,
    },

    /// The image uses a grayscale color mode.
    #[error("grayscale images are not supported")]
    Grayscale,
}

/// Decode a source image and enforce the input contract.
///
/// Accepts any format the decoder recognizes from the byte content
/// (PNG or JPEG with this crate's feature set). RGBA input is fine;
/// the alpha channel is dropped in the RGB conversion.
///
/// # Errors
///
/// Returns [`SourceError::WrongDimensions`] unless the image is exactly
/// 128×128, and [`SourceError::Grayscale`] for grayscale color modes.
pub fn load_source(bytes: &[u8]) -> Result<RgbImage, SourceError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| SourceError::Undecodable(e.to_string()))?;

    let image = reader
        .decode()
        .map_err(|e| SourceError::Undecodable(e.to_string()))?;

    let (width, height) = (image.width(), image.height());
    if width != MAP_DIMENSION || height != MAP_DIMENSION {
        return Err(SourceError::WrongDimensions {
            expected: MAP_DIMENSION,
            width,
            height,
        });
    }

    if !image.color().has_color() {
        return Err(SourceError::Grayscale);
    }

    log::debug!("loaded {}x{} source image ({:?})", width, height, image.color());
    Ok(image.into_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, GrayImage, ImageFormat, Luma, LumaA, Rgb, Rgba, RgbaImage};

    fn to_png(image: DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_valid_rgb_png_loads() {
        let source = RgbImage::from_pixel(128, 128, Rgb([10, 200, 30]));
        let png = to_png(DynamicImage::ImageRgb8(source));

        let loaded = load_source(&png).unwrap();
        assert_eq!(loaded.dimensions(), (128, 128));
        assert_eq!(loaded.get_pixel(0, 0).0, [10, 200, 30]);
        assert_eq!(loaded.get_pixel(127, 127).0, [10, 200, 30]);
    }

    #[test]
    fn test_valid_jpeg_loads() {
        let source = RgbImage::from_pixel(128, 128, Rgb([128, 128, 200]));
        let mut jpeg = Vec::new();
        DynamicImage::ImageRgb8(source)
            .write_to(&mut Cursor::new(&mut jpeg), ImageFormat::Jpeg)
            .unwrap();

        let loaded = load_source(&jpeg).unwrap();
        assert_eq!(loaded.dimensions(), (128, 128));
    }

    #[test]
    fn test_rgba_alpha_is_dropped() {
        let source = RgbaImage::from_pixel(128, 128, Rgba([255, 0, 0, 0]));
        let png = to_png(DynamicImage::ImageRgba8(source));

        let loaded = load_source(&png).unwrap();
        // Fully transparent red still reads as red.
        assert_eq!(loaded.get_pixel(64, 64).0, [255, 0, 0]);
    }

    #[test]
    fn test_small_image_is_rejected() {
        let source = RgbImage::from_pixel(64, 64, Rgb([1, 2, 3]));
        let png = to_png(DynamicImage::ImageRgb8(source));

        let result = load_source(&png);
        assert!(matches!(
            result,
            Err(SourceError::WrongDimensions {
                expected: 128,
                width: 64,
                height: 64,
            })
        ));
    }

    #[test]
    fn test_non_square_image_is_rejected() {
        let source = RgbImage::from_pixel(128, 64, Rgb([1, 2, 3]));
        let png = to_png(DynamicImage::ImageRgb8(source));

        assert!(matches!(
            load_source(&png),
            Err(SourceError::WrongDimensions { .. })
        ));
    }

    #[test]
    fn test_grayscale_image_is_rejected() {
        let source = GrayImage::from_pixel(128, 128, Luma([77]));
        let png = to_png(DynamicImage::ImageLuma8(source));

        assert!(matches!(load_source(&png), Err(SourceError::Grayscale)));
    }

    #[test]
    fn test_grayscale_with_alpha_is_rejected() {
        let source =
            image::GrayAlphaImage::from_pixel(128, 128, LumaA([77, 255]));
        let png = to_png(DynamicImage::ImageLumaA8(source));

        assert!(matches!(load_source(&png), Err(SourceError::Grayscale)));
    }

    #[test]
    fn test_dimension_check_runs_before_color_mode_check() {
        // A wrong-size grayscale image reports the size problem.
        let source = GrayImage::from_pixel(64, 64, Luma([0]));
        let png = to_png(DynamicImage::ImageLuma8(source));

        assert!(matches!(
            load_source(&png),
            Err(SourceError::WrongDimensions { .. })
        ));
    }

    #[test]
    fn test_garbage_bytes_are_rejected() {
        assert!(matches!(
            load_source(&[0x00, 0x01, 0x02, 0x03]),
            Err(SourceError::Undecodable(_))
        ));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        assert!(matches!(load_source(&[]), Err(SourceError::Undecodable(_))));
    }
}
