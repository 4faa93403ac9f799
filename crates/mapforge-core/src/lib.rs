//! Mapforge Core - Image to map item conversion library
//!
//! This crate converts a 128×128 true-color image into the game's map
//! item data file: each pixel is mapped onto the closed base-color
//! palette by perceptual (CIE L*a*b*) distance, and the resulting id
//! grid is serialized into a gzip-compressed NBT document the game
//! client reads verbatim.
//!
//! Pipeline: [`source::load_source`] → [`quantize::quantize`] (driven by
//! a [`matcher::ColorMatcher`]) → [`map::encode`]. The
//! [`convert_image`] helper runs all three stages.

pub mod color;
pub mod map;
pub mod matcher;
pub mod nbt;
pub mod palette;
pub mod quantize;
pub mod source;

pub use map::EncodeError;
pub use matcher::ColorMatcher;
pub use source::SourceError;

use thiserror::Error;

/// Side length of the map raster; source images must match it exactly.
pub const MAP_DIMENSION: u32 = 128;

/// Pixel count of the map raster (one palette id byte per pixel).
pub const MAP_PIXELS: usize = (MAP_DIMENSION as usize) * (MAP_DIMENSION as usize);

/// Map item metadata, fixed configuration supplied by the caller.
///
/// The defaults reproduce a locked, non-tracking custom map centered
/// far outside normal play space, which keeps the rendered image
/// static in the client.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Zoom level (0 = fully zoomed in, 1:1 blocks to pixels).
    pub scale: i8,
    /// Dimension identifier the map claims to chart.
    pub dimension: String,
    /// Whether player markers are shown on the map.
    pub tracking_position: bool,
    /// Whether markers are shown beyond the map's edge.
    pub unlimited_tracking: bool,
    /// Whether the map is locked against in-game updates.
    pub locked: bool,
    /// World X coordinate of the map center.
    pub x_center: i32,
    /// World Z coordinate of the map center.
    pub y_center: i32,
    /// Target client schema version.
    pub data_version: i32,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            scale: 0,
            dimension: "custom".to_string(),
            tracking_position: false,
            unlimited_tracking: false,
            locked: true,
            x_center: 5000,
            y_center: 5000,
            data_version: 2584,
        }
    }
}

/// Errors from the full conversion pipeline.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The source image failed to load or violated the input contract.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Encoding the map data file failed.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Convert encoded image bytes into a finished map data file.
///
/// Runs load → quantize → encode. Validation failures abort before any
/// quantization happens; the returned buffer is always a complete,
/// valid file.
pub fn convert_image(bytes: &[u8], settings: &MapSettings) -> Result<Vec<u8>, ConvertError> {
    let image = source::load_source(bytes)?;
    let mut matcher = ColorMatcher::new();
    let colors = quantize::quantize(&image, &mut matcher);
    Ok(map::encode(settings, colors)?)
}
