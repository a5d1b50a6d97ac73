//! Pack command implementation
//!
//! Combines metalness, roughness and ambient occlusion maps into one RGB texture.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use mrapack_texture::{pack_with_config, PackPaths, PackReport, PngConfig};

use super::json_output::{ChannelPaths, FileRecord, JsonError, PackOutput, PackResult};

/// Default metalness input, matching the reference asset set.
pub const DEFAULT_METALNESS: &str = "Ground068_2K-PNG_Metalness.png";
/// Default roughness input.
pub const DEFAULT_ROUGHNESS: &str = "Ground068_2K-PNG_Roughness.png";
/// Default ambient occlusion input.
pub const DEFAULT_AO: &str = "Ground068_2K-PNG_AmbientOcclusion.png";
/// Default packed output.
pub const DEFAULT_OUTPUT: &str = "Ground068_2K-PNG_Packed.png";

/// Run the pack command
///
/// # Arguments
/// * `inputs` - Source maps for the R, G and B channels
/// * `output` - Destination path; its extension selects the format
/// * `config` - PNG writer settings
/// * `json_output` - Whether to output machine-readable JSON
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    inputs: &PackPaths,
    output: &Path,
    config: &PngConfig,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(inputs, output, config)
    } else {
        run_human(inputs, output, config)
    }
}

/// Run pack with human-readable (colored) output
fn run_human(inputs: &PackPaths, output: &Path, config: &PngConfig) -> Result<ExitCode> {
    println!("{}", "Packing texture maps:".cyan().bold());
    println!("  {} {}", "R (metalness):".dimmed(), inputs.metalness.display());
    println!("  {} {}", "G (roughness):".dimmed(), inputs.roughness.display());
    println!("  {} {}", "B (ao):       ".dimmed(), inputs.ao.display());

    let report = pack_with_config(inputs, output, config)?;
    print_report(&report);

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &PackReport) {
    println!(
        "\n{} {}",
        "Packed texture saved to:".green().bold(),
        report.path.display()
    );
    println!("  {} {}x{}", "Size:".dimmed(), report.width, report.height);
    println!("  {} {}", "Format:".dimmed(), report.format);
    println!("  {} {} bytes", "Encoded:".dimmed(), report.bytes);
    println!("  {} {}", "Hash:".dimmed(), &report.hash[..16]);
}

/// Run pack with machine-readable JSON output
fn run_json(inputs: &PackPaths, output: &Path, config: &PngConfig) -> Result<ExitCode> {
    let (document, code) = pack_document(inputs, output, config);
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(code)
}

/// Pack and describe the outcome as a JSON document.
fn pack_document(
    inputs: &PackPaths,
    output: &Path,
    config: &PngConfig,
) -> (PackOutput, ExitCode) {
    match pack_with_config(inputs, output, config) {
        Ok(report) => {
            let result = PackResult {
                inputs: ChannelPaths {
                    metalness: inputs.metalness.display().to_string(),
                    roughness: inputs.roughness.display().to_string(),
                    ao: inputs.ao.display().to_string(),
                },
                output: FileRecord::from(&report),
            };
            (PackOutput::success(result), ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::debug!(error = %e, "pack failed");
            (
                PackOutput::failure(vec![JsonError::from(&e)]),
                ExitCode::from(1),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};
    use mrapack_texture::png::hash_bytes;
    use pretty_assertions::assert_eq;

    fn write_gray(dir: &Path, name: &str, size: u32, value: u8) -> std::path::PathBuf {
        let path = dir.join(name);
        GrayImage::from_pixel(size, size, Luma([value]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_run_writes_packed_texture() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = PackPaths::new(
            write_gray(dir.path(), "m.png", 4, 10),
            write_gray(dir.path(), "r.png", 4, 20),
            write_gray(dir.path(), "ao.png", 4, 30),
        );
        let output = dir.path().join("packed.png");

        let code = run(&inputs, &output, &PngConfig::default(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let packed = image::open(&output).unwrap().to_rgb8();
        assert_eq!(packed.get_pixel(3, 3).0, [10, 20, 30]);
    }

    #[test]
    fn test_run_human_propagates_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = PackPaths::new(
            write_gray(dir.path(), "m.png", 2, 0),
            write_gray(dir.path(), "r.png", 3, 0),
            write_gray(dir.path(), "ao.png", 2, 0),
        );
        let output = dir.path().join("packed.png");

        let err = run(&inputs, &output, &PngConfig::default(), false).unwrap_err();
        assert!(err.to_string().contains("same dimensions"));
        assert!(!output.exists());
    }

    #[test]
    fn test_run_json_reports_failure_with_exit_code() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = PackPaths::new(
            dir.path().join("missing_m.png"),
            dir.path().join("missing_r.png"),
            dir.path().join("missing_ao.png"),
        );
        let output = dir.path().join("packed.png");

        let code = run(&inputs, &output, &PngConfig::default(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!output.exists());
    }

    #[test]
    fn test_json_document_describes_written_texture() {
        let dir = tempfile::tempdir().unwrap();
        let inputs = PackPaths::new(
            write_gray(dir.path(), "m.png", 4, 10),
            write_gray(dir.path(), "r.png", 4, 20),
            write_gray(dir.path(), "ao.png", 4, 30),
        );
        let output = dir.path().join("packed.png");

        let (document, code) = pack_document(&inputs, &output, &PngConfig::default());
        assert_eq!(code, ExitCode::SUCCESS);

        let text = serde_json::to_string_pretty(&document).unwrap();
        let parsed: PackOutput = serde_json::from_str(&text).unwrap();
        assert!(parsed.success);
        assert!(parsed.errors.is_empty());

        let result = parsed.result.expect("successful pack carries a result");
        assert_eq!(result.inputs.roughness, inputs.roughness.display().to_string());

        let written = std::fs::read(&output).unwrap();
        let record = result.output;
        assert_eq!(record.path, output.display().to_string());
        assert_eq!(record.format, "png");
        assert!(record.lossless);
        assert_eq!((record.width, record.height), (4, 4));
        assert_eq!(record.size, written.len());
        assert_eq!(record.hash.len(), 64);
        assert_eq!(record.hash, hash_bytes(&written));
    }
}
