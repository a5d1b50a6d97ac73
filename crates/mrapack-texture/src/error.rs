//! Error type for packing operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::packing::ChannelSlot;
use crate::png::PngError;

/// Errors that can occur while packing or splitting textures.
#[derive(Debug, Error)]
pub enum PackError {
    /// An input could not be opened or decoded as a raster image.
    #[error("Failed to decode '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An input's size differs from the metalness map.
    #[error(
        "All input textures must have the same dimensions: {slot} is {}x{}, expected {}x{}",
        .found.0, .found.1, .expected.0, .expected.1
    )]
    DimensionMismatch {
        slot: ChannelSlot,
        expected: (u32, u32),
        found: (u32, u32),
    },

    /// A buffer's pixel data does not cover its declared dimensions.
    #[error("{slot} buffer holds {found} samples, expected {expected} for its dimensions")]
    BufferLength {
        slot: ChannelSlot,
        expected: usize,
        found: usize,
    },

    /// The output extension does not name a supported format.
    #[error("Unsupported output format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("Encoding error: {0}")]
    Encode(String),

    /// The encoded bytes could not be written to the destination.
    #[error("Failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PackError {
    /// Stable error code for machine-readable output.
    pub fn code(&self) -> &'static str {
        match self {
            PackError::Decode { .. } => "PACK_001",
            PackError::DimensionMismatch { .. } => "PACK_002",
            PackError::UnsupportedFormat { .. } => "PACK_003",
            PackError::Png(_) => "PACK_004",
            PackError::Encode(_) => "PACK_005",
            PackError::Write { .. } => "PACK_006",
            PackError::BufferLength { .. } => "PACK_007",
        }
    }

    /// Path of the file the error concerns, if any.
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            PackError::Decode { path, .. }
            | PackError::UnsupportedFormat { path }
            | PackError::Write { path, .. } => Some(path.as_path()),
            _ => None,
        }
    }
}
