//! mrapack CLI - Packs PBR material maps into a single RGB texture
//!
//! Metalness goes to red, roughness to green, ambient occlusion to blue.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use mrapack_cli::commands::{self, Compression};
use mrapack_cli::logging;
use mrapack_texture::PackPaths;

/// mrapack - Metalness / Roughness / AO texture packer
#[derive(Parser)]
#[command(name = "mrapack")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Pack metalness, roughness and AO maps into the R, G and B channels
    Pack {
        /// Metalness map (red channel)
        #[arg(short, long, default_value = commands::pack::DEFAULT_METALNESS)]
        metalness: PathBuf,

        /// Roughness map (green channel)
        #[arg(short, long, default_value = commands::pack::DEFAULT_ROUGHNESS)]
        roughness: PathBuf,

        /// Ambient occlusion map (blue channel)
        #[arg(short, long, default_value = commands::pack::DEFAULT_AO)]
        ao: PathBuf,

        /// Output path; the extension selects the format (png, bmp, tga, jpg)
        #[arg(short, long, default_value = commands::pack::DEFAULT_OUTPUT)]
        output: PathBuf,

        /// PNG compression preset
        #[arg(long, value_enum, default_value_t = Compression::Default)]
        compression: Compression,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Split a packed texture back into three grayscale maps
    Split {
        /// Packed RGB texture
        #[arg(short, long)]
        input: PathBuf,

        /// Output for the red channel
        #[arg(short, long)]
        metalness: PathBuf,

        /// Output for the green channel
        #[arg(short, long)]
        roughness: PathBuf,

        /// Output for the blue channel
        #[arg(short, long)]
        ao: PathBuf,

        /// PNG compression preset
        #[arg(long, value_enum, default_value_t = Compression::Default)]
        compression: Compression,

        /// Output machine-readable JSON diagnostics (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Pack {
            metalness,
            roughness,
            ao,
            output,
            compression,
            json,
        } => commands::pack::run(
            &PackPaths::new(metalness, roughness, ao),
            &output,
            &compression.png_config(),
            json,
        ),
        Commands::Split {
            input,
            metalness,
            roughness,
            ao,
            compression,
            json,
        } => commands::split::run(
            &input,
            &PackPaths::new(metalness, roughness, ao),
            &compression.png_config(),
            json,
        ),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
