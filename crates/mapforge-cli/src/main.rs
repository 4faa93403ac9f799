//! Mapforge command line: convert an image file into a map item data file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser as _;
use mapforge_core::{convert_image, MapSettings};

/// Convert a 128x128 image into a game map item data file.
///
/// The input must be a 128x128 PNG or JPEG in a color mode (RGB or
/// RGBA; grayscale is rejected). The output is a gzip-compressed NBT
/// file ready to drop into a world's data directory.
#[derive(clap::Parser)]
#[command(version, about)]
struct Args {
    /// Path to the input image.
    input: PathBuf,

    /// Path to the map data file to write (e.g. map_0.dat).
    output: PathBuf,

    /// Path to a TOML file overriding map settings (scale, x_center,
    /// y_center, locked, data_version, ...). Omitted keys keep their
    /// defaults.
    #[clap(long, short = 's')]
    settings: Option<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
        .context("Error initializing logging")?;

    let args = Args::try_parse().context("Error parsing command line arguments")?;

    let settings = match &args.settings {
        Some(path) => load_settings(path)?,
        None => MapSettings::default(),
    };

    let input = fs::read(&args.input)
        .with_context(|| format!("Error reading input image {}", args.input.display()))?;

    let output = convert_image(&input, &settings)
        .with_context(|| format!("Error converting {}", args.input.display()))?;

    // The buffer is only produced for a fully valid document, so a
    // single write leaves either a complete file or none at all.
    fs::write(&args.output, &output)
        .with_context(|| format!("Error writing output file {}", args.output.display()))?;

    log::info!(
        "wrote {} ({} bytes)",
        args.output.display(),
        output.len()
    );
    Ok(())
}

fn load_settings(path: &Path) -> Result<MapSettings, anyhow::Error> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Error reading settings file {}", path.display()))?;
    toml::from_str(&text)
        .with_context(|| format!("Error parsing settings file {}", path.display()))
}
