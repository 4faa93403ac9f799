//! Map data file assembly and compression.
//!
//! Builds the NBT document the game client expects for a map item
//! (an empty-named root compound wrapping a `data` compound with the
//! conventional field order, `colors` last), serializes it, and wraps
//! the result in a gzip envelope.
//!
//! Encoding is all-or-nothing: the full document is constructed and
//! compressed into an in-memory buffer, so a failure never leaves
//! partial output behind.

use std::io::Write;

use libflate::gzip;
use thiserror::Error;

use crate::nbt::{self, NbtError, Tag, TagType};
use crate::{MapSettings, MAP_PIXELS};

/// Errors that can occur while encoding a map data file.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// The color buffer does not cover the 128×128 grid.
    #[error("invalid color buffer: expected {expected} palette ids, got {actual}")]
    InvalidColorsLength { expected: usize, actual: usize },

    /// Structural invariant violation in the document tree.
    #[error("NBT serialization failed: {0}")]
    Nbt(#[from] NbtError),

    /// I/O error from the compression writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Build the map item document tree.
///
/// Field order inside `data` is fixed; the consumer relies on the
/// conventional ordering even though the format itself does not.
pub fn build_document(settings: &MapSettings, colors: Vec<u8>) -> Tag {
    let data = Tag::Compound(vec![
        ("scale".to_string(), Tag::Byte(settings.scale)),
        (
            "dimension".to_string(),
            Tag::String(settings.dimension.clone()),
        ),
        (
            "trackingPosition".to_string(),
            Tag::Byte(i8::from(settings.tracking_position)),
        ),
        (
            "unlimitedTracking".to_string(),
            Tag::Byte(i8::from(settings.unlimited_tracking)),
        ),
        ("locked".to_string(), Tag::Byte(i8::from(settings.locked))),
        ("xCenter".to_string(), Tag::Int(settings.x_center)),
        ("yCenter".to_string(), Tag::Int(settings.y_center)),
        (
            "banners".to_string(),
            Tag::List(TagType::Compound, Vec::new()),
        ),
        (
            "frames".to_string(),
            Tag::List(TagType::Compound, Vec::new()),
        ),
        ("DataVersion".to_string(), Tag::Int(settings.data_version)),
        ("colors".to_string(), Tag::ByteArray(colors)),
    ]);

    Tag::Compound(vec![("data".to_string(), data)])
}

/// Encode a quantized raster and its settings into a finished map data
/// file: gzip-compressed NBT, ready to write to disk.
///
/// # Arguments
/// * `settings` - Map metadata (scale, center, data version, ...)
/// * `colors` - Palette ids from the quantizer, row-major, 16384 bytes
///
/// # Errors
///
/// Returns [`EncodeError::InvalidColorsLength`] if `colors` is not
/// exactly one id per pixel of the 128×128 grid; serialization and
/// compression failures are propagated.
pub fn encode(settings: &MapSettings, colors: Vec<u8>) -> Result<Vec<u8>, EncodeError> {
    if colors.len() != MAP_PIXELS {
        return Err(EncodeError::InvalidColorsLength {
            expected: MAP_PIXELS,
            actual: colors.len(),
        });
    }

    let document = build_document(settings, colors);
    let payload = nbt::encode_document("", &document)?;
    log::debug!("map document payload is {} bytes uncompressed", payload.len());

    // Pin the gzip header's modification time so encoding stays a pure
    // function of its inputs.
    let header = gzip::HeaderBuilder::new().modification_time(0).finish();
    let options = gzip::EncodeOptions::new().header(header);
    let mut encoder = gzip::Encoder::with_options(Vec::new(), options)?;
    encoder.write_all(&payload)?;
    let compressed = encoder.finish().into_result()?;

    log::info!(
        "encoded map data file: {} bytes compressed ({} uncompressed)",
        compressed.len(),
        payload.len()
    );
    Ok(compressed)
}
