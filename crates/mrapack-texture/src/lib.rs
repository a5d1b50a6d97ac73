//! Metalness / roughness / ambient occlusion texture packer.
//!
//! This crate combines three single-channel material maps into one RGB
//! texture, the layout most real-time PBR shaders sample in a single fetch:
//!
//! | Channel | Source map        |
//! |---------|-------------------|
//! | R       | metalness         |
//! | G       | roughness         |
//! | B       | ambient occlusion |
//!
//! # Example
//!
//! ```no_run
//! use mrapack_texture::pack;
//!
//! let report = pack(
//!     "Ground068_2K-PNG_Metalness.png",
//!     "Ground068_2K-PNG_Roughness.png",
//!     "Ground068_2K-PNG_AmbientOcclusion.png",
//!     "Ground068_2K-PNG_Packed.png",
//! )
//! .unwrap();
//! println!("Packed texture saved to: {}", report.path.display());
//! ```
//!
//! # Grayscale conversion
//!
//! Inputs that are not already single-channel are reduced with ITU-R BT.601
//! luma (`0.299 R + 0.587 G + 0.114 B`), rounded to the nearest 8-bit value.
//! Alpha is ignored.
//!
//! 16-bit grayscale inputs are rescaled to 8 bits (`v * 255 / 65535`,
//! rounded) rather than clipped at 255, so a full-range 16-bit map keeps
//! its full range after packing.
//!
//! # Determinism
//!
//! PNG output uses fixed compression and filter settings, so packing the
//! same inputs always produces byte-identical files. Reports carry the
//! BLAKE3 hash of the written bytes.

pub mod color;
pub mod decode;
pub mod encode;
pub mod error;
pub mod maps;
pub mod packing;
pub mod pipeline;
pub mod png;

// Re-export main types for convenience
pub use encode::OutputFormat;
pub use error::PackError;
pub use maps::{GrayscaleBuffer, TextureBuffer};
pub use packing::{pack_channels, unpack_channels, ChannelSlot, PackInputs, UnpackedChannels};
pub use pipeline::{pack, pack_with_config, split, PackPaths, PackReport, SplitReport, WrittenFile};
pub use png::{PngConfig, PngError};
