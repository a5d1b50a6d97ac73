//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so packing the same inputs twice
//! produces byte-identical files.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

use crate::maps::{GrayscaleBuffer, TextureBuffer};

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration for deterministic output.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level. Use a fixed value for determinism.
    pub compression: Compression,
    /// Filter type. Use a fixed value for determinism.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Create config optimized for file size (slower, but deterministic).
    pub fn best_compression() -> Self {
        Self {
            compression: Compression::Best,
            filter: FilterType::Paeth,
        }
    }

    /// Create config optimized for speed (faster, but larger files).
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

fn write_raw_to_writer<W: Write>(
    data: &[u8],
    width: u32,
    height: u32,
    color_type: ColorType,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    if width == 0 || height == 0 {
        return Err(PngError::InvalidDimensions(format!(
            "{}x{} image has no pixels",
            width, height
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    // The png crate writes no timestamp or other variable chunks
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;
    png_writer.finish()?;

    Ok(())
}

/// Write an RGB texture buffer to any writer.
pub fn write_rgb_to_writer<W: Write>(
    buffer: &TextureBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let data = buffer.to_rgb8();
    write_raw_to_writer(
        &data,
        buffer.width,
        buffer.height,
        ColorType::Rgb,
        writer,
        config,
    )
}

/// Write a grayscale buffer to any writer.
pub fn write_grayscale_to_writer<W: Write>(
    buffer: &GrayscaleBuffer,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    write_raw_to_writer(
        buffer.as_bytes(),
        buffer.width,
        buffer.height,
        ColorType::Grayscale,
        writer,
        config,
    )
}

/// Compute the BLAKE3 hash of encoded file data.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Write RGB to a Vec<u8> and return the hash.
pub fn write_rgb_to_vec_with_hash(
    buffer: &TextureBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_rgb_to_writer(buffer, &mut data, config)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}

/// Write grayscale to a Vec<u8> and return the hash.
pub fn write_grayscale_to_vec_with_hash(
    buffer: &GrayscaleBuffer,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut data = Vec::new();
    write_grayscale_to_writer(buffer, &mut data, config)?;
    let hash = hash_bytes(&data);
    Ok((data, hash))
}
