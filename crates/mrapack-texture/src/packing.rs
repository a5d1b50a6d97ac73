//! Channel packing for combining grayscale material maps into a single RGB texture.
//!
//! The channel layout is fixed: metalness goes to red, roughness to green and
//! ambient occlusion to blue. Every source must have the same dimensions.
//!
//! # Example
//!
//! ```
//! use mrapack_texture::packing::{pack_channels, unpack_channels, PackInputs};
//! use mrapack_texture::GrayscaleBuffer;
//!
//! let metalness = GrayscaleBuffer::new(4, 4, 10);
//! let roughness = GrayscaleBuffer::new(4, 4, 20);
//! let ao = GrayscaleBuffer::new(4, 4, 30);
//!
//! let packed = pack_channels(&PackInputs::new(&metalness, &roughness, &ao)).unwrap();
//! assert_eq!(packed.get(2, 3), [10, 20, 30]);
//!
//! let split = unpack_channels(&packed);
//! assert_eq!(split.roughness, roughness);
//! ```

use std::fmt;

use crate::error::PackError;
use crate::maps::{GrayscaleBuffer, TextureBuffer};

/// Output channel a material map is packed into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelSlot {
    /// Red channel
    Metalness,
    /// Green channel
    Roughness,
    /// Blue channel
    AmbientOcclusion,
}

impl ChannelSlot {
    /// All slots in channel order.
    pub const ALL: [ChannelSlot; 3] = [
        ChannelSlot::Metalness,
        ChannelSlot::Roughness,
        ChannelSlot::AmbientOcclusion,
    ];

    /// Channel index in the packed texture (0 = R, 1 = G, 2 = B).
    pub const fn index(self) -> usize {
        match self {
            ChannelSlot::Metalness => 0,
            ChannelSlot::Roughness => 1,
            ChannelSlot::AmbientOcclusion => 2,
        }
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            ChannelSlot::Metalness => "metalness",
            ChannelSlot::Roughness => "roughness",
            ChannelSlot::AmbientOcclusion => "ao",
        }
    }
}

impl fmt::Display for ChannelSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The three source maps of a packing operation.
#[derive(Debug, Clone, Copy)]
pub struct PackInputs<'a> {
    pub metalness: &'a GrayscaleBuffer,
    pub roughness: &'a GrayscaleBuffer,
    pub ao: &'a GrayscaleBuffer,
}

impl<'a> PackInputs<'a> {
    pub fn new(
        metalness: &'a GrayscaleBuffer,
        roughness: &'a GrayscaleBuffer,
        ao: &'a GrayscaleBuffer,
    ) -> Self {
        Self {
            metalness,
            roughness,
            ao,
        }
    }

    /// Source buffer for a slot.
    pub fn get(&self, slot: ChannelSlot) -> &'a GrayscaleBuffer {
        match slot {
            ChannelSlot::Metalness => self.metalness,
            ChannelSlot::Roughness => self.roughness,
            ChannelSlot::AmbientOcclusion => self.ao,
        }
    }
}

/// Grayscale maps recovered from a packed texture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnpackedChannels {
    pub metalness: GrayscaleBuffer,
    pub roughness: GrayscaleBuffer,
    pub ao: GrayscaleBuffer,
}

impl UnpackedChannels {
    /// Buffer for a slot.
    pub fn get(&self, slot: ChannelSlot) -> &GrayscaleBuffer {
        match slot {
            ChannelSlot::Metalness => &self.metalness,
            ChannelSlot::Roughness => &self.roughness,
            ChannelSlot::AmbientOcclusion => &self.ao,
        }
    }
}

/// Verify that all inputs share the metalness map's dimensions.
///
/// # Returns
///
/// The common `(width, height)`, or `DimensionMismatch` naming the first
/// slot (in channel order) whose size differs. A buffer whose data length
/// disagrees with its own width and height fails with `BufferLength`.
pub fn check_dimensions(inputs: &PackInputs<'_>) -> Result<(u32, u32), PackError> {
    let expected = inputs.metalness.dimensions();
    for slot in ChannelSlot::ALL {
        let buffer = inputs.get(slot);
        let found = buffer.dimensions();
        if found != expected {
            return Err(PackError::DimensionMismatch {
                slot,
                expected,
                found,
            });
        }

        let samples = found.0 as usize * found.1 as usize;
        if buffer.data.len() != samples {
            return Err(PackError::BufferLength {
                slot,
                expected: samples,
                found: buffer.data.len(),
            });
        }
    }
    Ok(expected)
}

/// Pack three grayscale maps into one RGB texture.
///
/// Output pixel `(x, y)` is `(metalness(x, y), roughness(x, y), ao(x, y))`.
pub fn pack_channels(inputs: &PackInputs<'_>) -> Result<TextureBuffer, PackError> {
    let (width, height) = check_dimensions(inputs)?;

    let data = inputs
        .metalness
        .data
        .iter()
        .zip(&inputs.roughness.data)
        .zip(&inputs.ao.data)
        .map(|((&m, &r), &ao)| [m, r, ao])
        .collect();

    Ok(TextureBuffer {
        width,
        height,
        data,
    })
}

/// Split a packed texture back into its three grayscale maps.
pub fn unpack_channels(packed: &TextureBuffer) -> UnpackedChannels {
    UnpackedChannels {
        metalness: packed.channel(ChannelSlot::Metalness.index()),
        roughness: packed.channel(ChannelSlot::Roughness.index()),
        ao: packed.channel(ChannelSlot::AmbientOcclusion.index()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Helper to create a horizontal gradient buffer
    fn gradient_buffer(width: u32, height: u32) -> GrayscaleBuffer {
        let mut buffer = GrayscaleBuffer::new(width, height, 0);
        for y in 0..height {
            for x in 0..width {
                buffer.set(x, y, (x * 255 / (width - 1)) as u8);
            }
        }
        buffer
    }

    #[test]
    fn test_slot_indices_follow_channel_order() {
        for (i, slot) in ChannelSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }

    #[test]
    fn test_slot_display() {
        assert_eq!(ChannelSlot::Metalness.to_string(), "metalness");
        assert_eq!(ChannelSlot::AmbientOcclusion.to_string(), "ao");
    }

    #[test]
    fn test_pack_solid_inputs() {
        let m = GrayscaleBuffer::new(4, 4, 10);
        let r = GrayscaleBuffer::new(4, 4, 20);
        let ao = GrayscaleBuffer::new(4, 4, 30);

        let packed = pack_channels(&PackInputs::new(&m, &r, &ao)).unwrap();
        assert_eq!(packed, TextureBuffer::new(4, 4, [10, 20, 30]));
    }

    #[test]
    fn test_pack_output_dimensions() {
        let m = GrayscaleBuffer::new(128, 64, 0);
        let packed = pack_channels(&PackInputs::new(&m, &m, &m)).unwrap();
        assert_eq!(packed.dimensions(), (128, 64));
    }

    #[test]
    fn test_pack_preserves_every_pixel() {
        let m = gradient_buffer(16, 8);
        let mut r = GrayscaleBuffer::new(16, 8, 0);
        let mut ao = GrayscaleBuffer::new(16, 8, 0);
        for y in 0..8 {
            for x in 0..16 {
                r.set(x, y, (y * 30) as u8);
                ao.set(x, y, (x + y * 16) as u8);
            }
        }

        let packed = pack_channels(&PackInputs::new(&m, &r, &ao)).unwrap();
        for y in 0..8 {
            for x in 0..16 {
                assert_eq!(
                    packed.get(x, y),
                    [m.get(x, y), r.get(x, y), ao.get(x, y)],
                    "pixel ({}, {})",
                    x,
                    y
                );
            }
        }
    }

    #[test]
    fn test_mismatch_reports_first_offending_slot() {
        let m = GrayscaleBuffer::new(2, 2, 0);
        let r = GrayscaleBuffer::new(3, 3, 0);
        let ao = GrayscaleBuffer::new(4, 4, 0);

        match pack_channels(&PackInputs::new(&m, &r, &ao)) {
            Err(PackError::DimensionMismatch {
                slot,
                expected,
                found,
            }) => {
                assert_eq!(slot, ChannelSlot::Roughness);
                assert_eq!(expected, (2, 2));
                assert_eq!(found, (3, 3));
            }
            other => panic!("Expected DimensionMismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_mismatch_in_width_only() {
        let m = GrayscaleBuffer::new(4, 4, 0);
        let ao = GrayscaleBuffer::new(5, 4, 0);

        let result = check_dimensions(&PackInputs::new(&m, &m, &ao));
        assert!(matches!(
            result,
            Err(PackError::DimensionMismatch {
                slot: ChannelSlot::AmbientOcclusion,
                ..
            })
        ));
    }

    #[test]
    fn test_short_buffer_rejected() {
        let m = GrayscaleBuffer::new(4, 4, 1);
        let mut r = GrayscaleBuffer::new(4, 4, 2);
        r.data.truncate(10);

        match pack_channels(&PackInputs::new(&m, &r, &m)) {
            Err(PackError::BufferLength {
                slot,
                expected,
                found,
            }) => {
                assert_eq!(slot, ChannelSlot::Roughness);
                assert_eq!(expected, 16);
                assert_eq!(found, 10);
            }
            other => panic!("Expected BufferLength, got {:?}", other),
        }
    }

    #[test]
    fn test_unpack_reverses_pack() {
        let m = gradient_buffer(8, 8);
        let r = GrayscaleBuffer::new(8, 8, 128);
        let ao = GrayscaleBuffer::new(8, 8, 255);

        let packed = pack_channels(&PackInputs::new(&m, &r, &ao)).unwrap();
        let split = unpack_channels(&packed);

        assert_eq!(split.metalness, m);
        assert_eq!(split.roughness, r);
        assert_eq!(split.ao, ao);
        assert_eq!(split.get(ChannelSlot::Roughness), &r);
    }
}
