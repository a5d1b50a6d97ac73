//! Output encoding and persistence.
//!
//! Images are encoded fully in memory before anything touches the
//! destination. The bytes then go to a temporary file beside the target
//! which is renamed into place, so the output path never holds a partial file.

use std::fmt;
use std::io::{Cursor, Write};
use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, RgbImage};

use crate::error::PackError;
use crate::maps::{GrayscaleBuffer, TextureBuffer};
use crate::png::{self, PngConfig};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Bmp,
    Tga,
    /// Lossy; packed channels will not round-trip exactly.
    Jpeg,
}

impl OutputFormat {
    /// Infer the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, PackError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match ext.as_deref() {
            Some("png") => Ok(OutputFormat::Png),
            Some("bmp") => Ok(OutputFormat::Bmp),
            Some("tga") => Ok(OutputFormat::Tga),
            Some("jpg") | Some("jpeg") => Ok(OutputFormat::Jpeg),
            _ => Err(PackError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Whether decoding the output reproduces the encoded samples exactly.
    pub fn is_lossless(self) -> bool {
        !matches!(self, OutputFormat::Jpeg)
    }

    fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Tga => ImageFormat::Tga,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Png => "png",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Tga => "tga",
            OutputFormat::Jpeg => "jpeg",
        };
        f.write_str(name)
    }
}

fn encode_with_image(image: DynamicImage, format: OutputFormat) -> Result<Vec<u8>, PackError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), format.image_format())
        .map_err(|e| PackError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Encode an RGB texture in the given format.
pub fn encode_rgb(
    buffer: &TextureBuffer,
    format: OutputFormat,
    config: &PngConfig,
) -> Result<Vec<u8>, PackError> {
    if format == OutputFormat::Png {
        let mut bytes = Vec::new();
        png::write_rgb_to_writer(buffer, &mut bytes, config)?;
        return Ok(bytes);
    }

    let image = RgbImage::from_raw(buffer.width, buffer.height, buffer.to_rgb8())
        .ok_or_else(|| PackError::Encode("pixel buffer does not match dimensions".into()))?;
    encode_with_image(DynamicImage::ImageRgb8(image), format)
}

/// Encode a grayscale buffer in the given format.
pub fn encode_grayscale(
    buffer: &GrayscaleBuffer,
    format: OutputFormat,
    config: &PngConfig,
) -> Result<Vec<u8>, PackError> {
    if format == OutputFormat::Png {
        let mut bytes = Vec::new();
        png::write_grayscale_to_writer(buffer, &mut bytes, config)?;
        return Ok(bytes);
    }

    let image = GrayImage::from_raw(buffer.width, buffer.height, buffer.data.clone())
        .ok_or_else(|| PackError::Encode("pixel buffer does not match dimensions".into()))?;
    encode_with_image(DynamicImage::ImageLuma8(image), format)
}

/// Write encoded bytes to `path`, replacing any existing file.
///
/// A replaced file keeps its permissions. A new file gets `0o666` minus the
/// process umask, the same as a plain `fs::write`.
pub fn persist(bytes: &[u8], path: &Path) -> Result<(), PackError> {
    let write_error = |source: std::io::Error| PackError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // open(2) applies the umask to the requested mode
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    let mut file = builder.tempfile_in(dir).map_err(write_error)?;
    if let Some(permissions) = existing {
        file.as_file()
            .set_permissions(permissions)
            .map_err(write_error)?;
    }
    file.write_all(bytes).map_err(write_error)?;
    file.as_file().sync_all().map_err(write_error)?;
    file.persist(path).map_err(|e| write_error(e.error))?;

    Ok(())
}
