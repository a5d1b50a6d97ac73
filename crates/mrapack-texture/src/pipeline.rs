//! File-level pack and split operations.
//!
//! Every input is decoded and validated, and every output is encoded in
//! memory, before the first byte is written to disk. A failure at any step
//! leaves the output paths untouched.

use std::path::{Path, PathBuf};

use crate::decode::{load_grayscale, load_rgb};
use crate::encode::{encode_grayscale, encode_rgb, persist, OutputFormat};
use crate::error::PackError;
use crate::packing::{pack_channels, unpack_channels, ChannelSlot, PackInputs};
use crate::png::{hash_bytes, PngConfig};

/// Source file paths for a pack operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackPaths {
    pub metalness: PathBuf,
    pub roughness: PathBuf,
    pub ao: PathBuf,
}

impl PackPaths {
    pub fn new(
        metalness: impl Into<PathBuf>,
        roughness: impl Into<PathBuf>,
        ao: impl Into<PathBuf>,
    ) -> Self {
        Self {
            metalness: metalness.into(),
            roughness: roughness.into(),
            ao: ao.into(),
        }
    }

    /// Path for a slot.
    pub fn get(&self, slot: ChannelSlot) -> &Path {
        match slot {
            ChannelSlot::Metalness => &self.metalness,
            ChannelSlot::Roughness => &self.roughness,
            ChannelSlot::AmbientOcclusion => &self.ao,
        }
    }
}

/// A file written by a pack or split operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    /// Destination path
    pub path: PathBuf,
    /// Format inferred from the extension
    pub format: OutputFormat,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Encoded size in bytes
    pub bytes: usize,
    /// BLAKE3 hash of the encoded bytes
    pub hash: String,
}

/// Result of [`pack`].
pub type PackReport = WrittenFile;

/// Result of [`split`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitReport {
    pub metalness: WrittenFile,
    pub roughness: WrittenFile,
    pub ao: WrittenFile,
}

fn warn_if_lossy(path: &Path, format: OutputFormat) {
    if !format.is_lossless() {
        tracing::warn!(
            output = %path.display(),
            %format,
            "lossy output format; channel values will not round-trip exactly"
        );
    }
}

/// Pack three grayscale texture files into one RGB texture file.
///
/// Metalness becomes red, roughness green and ambient occlusion blue. The
/// output format is inferred from `output`'s extension and PNG output uses
/// the default [`PngConfig`].
pub fn pack(
    metalness: impl AsRef<Path>,
    roughness: impl AsRef<Path>,
    ao: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<PackReport, PackError> {
    let paths = PackPaths::new(metalness.as_ref(), roughness.as_ref(), ao.as_ref());
    pack_with_config(&paths, output.as_ref(), &PngConfig::default())
}

/// Pack with explicit PNG settings.
pub fn pack_with_config(
    paths: &PackPaths,
    output: &Path,
    config: &PngConfig,
) -> Result<PackReport, PackError> {
    let format = OutputFormat::from_path(output)?;
    warn_if_lossy(output, format);

    let metalness = load_grayscale(&paths.metalness)?;
    let roughness = load_grayscale(&paths.roughness)?;
    let ao = load_grayscale(&paths.ao)?;

    let packed = pack_channels(&PackInputs::new(&metalness, &roughness, &ao))?;
    let bytes = encode_rgb(&packed, format, config)?;
    persist(&bytes, output)?;

    let report = WrittenFile {
        path: output.to_path_buf(),
        format,
        width: packed.width,
        height: packed.height,
        hash: hash_bytes(&bytes),
        bytes: bytes.len(),
    };

    tracing::info!(
        output = %output.display(),
        %format,
        width = report.width,
        height = report.height,
        bytes = report.bytes,
        "packed texture saved"
    );

    Ok(report)
}

/// Split a packed RGB texture into three grayscale texture files.
///
/// Each output's format is inferred from its own extension.
pub fn split(
    packed: &Path,
    outputs: &PackPaths,
    config: &PngConfig,
) -> Result<SplitReport, PackError> {
    let formats = [
        OutputFormat::from_path(&outputs.metalness)?,
        OutputFormat::from_path(&outputs.roughness)?,
        OutputFormat::from_path(&outputs.ao)?,
    ];
    for slot in ChannelSlot::ALL {
        warn_if_lossy(outputs.get(slot), formats[slot.index()]);
    }

    let texture = load_rgb(packed)?;
    let channels = unpack_channels(&texture);

    let mut encoded = Vec::with_capacity(formats.len());
    for (slot, format) in ChannelSlot::ALL.into_iter().zip(formats) {
        encoded.push(encode_grayscale(channels.get(slot), format, config)?);
    }

    let write_channel = |slot: ChannelSlot| -> Result<WrittenFile, PackError> {
        let path = outputs.get(slot);
        let format = formats[slot.index()];
        let bytes = &encoded[slot.index()];
        persist(bytes, path)?;
        tracing::info!(%slot, output = %path.display(), %format, "channel saved");
        Ok(WrittenFile {
            path: path.to_path_buf(),
            format,
            width: texture.width,
            height: texture.height,
            bytes: bytes.len(),
            hash: hash_bytes(bytes),
        })
    };

    Ok(SplitReport {
        metalness: write_channel(ChannelSlot::Metalness)?,
        roughness: write_channel(ChannelSlot::Roughness)?,
        ao: write_channel(ChannelSlot::AmbientOcclusion)?,
    })
}
