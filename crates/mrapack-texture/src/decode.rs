//! Loading source maps as 8-bit grayscale.

use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::color::{luminance8, narrow16};
use crate::error::PackError;
use crate::maps::{GrayscaleBuffer, TextureBuffer};

/// Convert a decoded image to 8-bit grayscale.
///
/// Single-channel images keep their samples (16-bit ones are narrowed with
/// rounding). Alpha is dropped. Color images are reduced with BT.601 luma,
/// see [`luminance8`].
pub fn decode_grayscale(image: &DynamicImage) -> GrayscaleBuffer {
    let (width, height) = (image.width(), image.height());
    let data: Vec<u8> = match image {
        DynamicImage::ImageLuma8(buf) => buf.as_raw().clone(),
        DynamicImage::ImageLumaA8(buf) => buf.pixels().map(|p| p.0[0]).collect(),
        DynamicImage::ImageLuma16(buf) => buf.as_raw().iter().map(|&v| narrow16(v)).collect(),
        DynamicImage::ImageLumaA16(buf) => buf.pixels().map(|p| narrow16(p.0[0])).collect(),
        other => other
            .to_rgb8()
            .pixels()
            .map(|p| luminance8(p.0[0], p.0[1], p.0[2]))
            .collect(),
    };

    GrayscaleBuffer {
        width,
        height,
        data,
    }
}

/// Convert a decoded image to 8-bit RGB, dropping alpha.
pub fn decode_rgb(image: &DynamicImage) -> TextureBuffer {
    let rgb = image.to_rgb8();
    TextureBuffer {
        width: rgb.width(),
        height: rgb.height(),
        data: rgb.pixels().map(|p| p.0).collect(),
    }
}

/// Open and decode an image file.
///
/// The format is guessed from the file content, falling back to the extension.
pub fn open_image(path: &Path) -> Result<DynamicImage, PackError> {
    let decode_error = |source: ImageError| PackError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let image = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)?;

    tracing::debug!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        color = ?image.color(),
        "decoded image"
    );

    Ok(image)
}

/// Load an image file as 8-bit grayscale.
pub fn load_grayscale(path: &Path) -> Result<GrayscaleBuffer, PackError> {
    open_image(path).map(|image| decode_grayscale(&image))
}

/// Load an image file as 8-bit RGB.
pub fn load_rgb(path: &Path) -> Result<TextureBuffer, PackError> {
    open_image(path).map(|image| decode_rgb(&image))
}
