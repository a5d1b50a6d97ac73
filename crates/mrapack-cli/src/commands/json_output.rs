//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `pack` and `split`.

use serde::{Deserialize, Serialize};

use mrapack_texture::{PackError, WrittenFile};

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "PACK_002")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// File path the error concerns (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            file: None,
        }
    }

    /// Sets the source file for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

impl From<&PackError> for JsonError {
    fn from(error: &PackError) -> Self {
        let json = JsonError::new(error.code(), error.to_string());
        match error.file() {
            Some(path) => json.with_file(path.display().to_string()),
            None => json,
        }
    }
}

/// Details of one written file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRecord {
    /// Output path
    pub path: String,
    /// Output format (png, bmp, tga, jpeg)
    pub format: String,
    /// Whether the format stores channel values exactly
    pub lossless: bool,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Encoded size in bytes
    pub size: usize,
    /// BLAKE3 hash of the file
    pub hash: String,
}

impl From<&WrittenFile> for FileRecord {
    fn from(file: &WrittenFile) -> Self {
        Self {
            path: file.path.display().to_string(),
            format: file.format.to_string(),
            lossless: file.format.is_lossless(),
            width: file.width,
            height: file.height,
            size: file.bytes,
            hash: file.hash.clone(),
        }
    }
}

/// Source paths, keyed by channel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelPaths {
    pub metalness: String,
    pub roughness: String,
    pub ao: String,
}

/// JSON output for the `pack` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackOutput {
    /// Whether packing succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Pack result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<PackResult>,
}

/// Pack result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackResult {
    /// Source maps
    pub inputs: ChannelPaths,
    /// Written texture
    pub output: FileRecord,
}

impl PackOutput {
    pub fn success(result: PackResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}

/// JSON output for the `split` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitOutput {
    /// Whether splitting succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Split result (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<SplitResult>,
}

/// Split result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitResult {
    /// Packed source texture
    pub input: String,
    pub metalness: FileRecord,
    pub roughness: FileRecord,
    pub ao: FileRecord,
}

impl SplitOutput {
    pub fn success(result: SplitResult) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            result: Some(result),
        }
    }

    pub fn failure(errors: Vec<JsonError>) -> Self {
        Self {
            success: false,
            errors,
            result: None,
        }
    }
}
