//! CLI command implementations

pub mod json_output;
pub mod pack;
pub mod split;

use clap::ValueEnum;
use mrapack_texture::PngConfig;

/// PNG compression preset selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Compression {
    /// Fast compression, larger files
    Fast,
    /// Balanced default
    #[default]
    Default,
    /// Smallest files, slowest
    Best,
}

impl Compression {
    /// PNG writer settings for this preset.
    pub fn png_config(self) -> PngConfig {
        match self {
            Compression::Fast => PngConfig::fast(),
            Compression::Default => PngConfig::default(),
            Compression::Best => PngConfig::best_compression(),
        }
    }
}
