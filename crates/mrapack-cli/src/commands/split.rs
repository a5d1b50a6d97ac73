//! Split command implementation
//!
//! Writes the R, G and B channels of a packed texture back out as three
//! grayscale maps.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;

use mrapack_texture::{split, PackPaths, PngConfig, SplitReport};

use super::json_output::{FileRecord, JsonError, SplitOutput, SplitResult};

/// Run the split command
///
/// # Returns
/// Exit code: 0 on success, 1 on error
pub fn run(
    input: &Path,
    outputs: &PackPaths,
    config: &PngConfig,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        return run_json(input, outputs, config);
    }

    println!("{} {}", "Splitting:".cyan().bold(), input.display());
    let report = split(input, outputs, config)?;
    print_report(&report);

    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &SplitReport) {
    for (label, file) in [
        ("R (metalness):", &report.metalness),
        ("G (roughness):", &report.roughness),
        ("B (ao):       ", &report.ao),
    ] {
        println!("  {} {}", label.dimmed(), file.path.display());
    }
    println!(
        "{} {}x{}",
        "Split into 3 grayscale maps:".green().bold(),
        report.metalness.width,
        report.metalness.height
    );
}

fn run_json(input: &Path, outputs: &PackPaths, config: &PngConfig) -> Result<ExitCode> {
    let (document, code) = match split(input, outputs, config) {
        Ok(report) => {
            let result = SplitResult {
                input: input.display().to_string(),
                metalness: FileRecord::from(&report.metalness),
                roughness: FileRecord::from(&report.roughness),
                ao: FileRecord::from(&report.ao),
            };
            (SplitOutput::success(result), ExitCode::SUCCESS)
        }
        Err(e) => (
            SplitOutput::failure(vec![JsonError::from(&e)]),
            ExitCode::from(1),
        ),
    };

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_writes_each_channel() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("packed.png");
        RgbImage::from_pixel(3, 2, Rgb([11, 22, 33]))
            .save(&input)
            .unwrap();
        let outputs = PackPaths::new(
            dir.path().join("m.png"),
            dir.path().join("r.png"),
            dir.path().join("ao.png"),
        );

        let code = run(&input, &outputs, &PngConfig::default(), false).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        for (path, expected) in [
            (&outputs.metalness, 11u8),
            (&outputs.roughness, 22),
            (&outputs.ao, 33),
        ] {
            let gray = image::open(path).unwrap().to_luma8();
            assert_eq!(gray.dimensions(), (3, 2));
            assert_eq!(gray.get_pixel(2, 1).0, [expected]);
        }
    }

    #[test]
    fn test_split_rejects_unknown_output_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("packed.png");
        RgbImage::from_pixel(1, 1, Rgb([0, 0, 0])).save(&input).unwrap();
        let outputs = PackPaths::new(
            dir.path().join("m.png"),
            dir.path().join("r.png"),
            dir.path().join("ao.unknown"),
        );

        let code = run(&input, &outputs, &PngConfig::default(), true).unwrap();
        assert_eq!(code, ExitCode::from(1));
        assert!(!outputs.metalness.exists());
        assert!(!outputs.roughness.exists());
    }
}
