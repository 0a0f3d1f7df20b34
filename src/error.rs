use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Errors that abort an operation.
///
/// Only upfront checks (directories, manifests, name lists) and the
/// single-item operations produce these. Batch loops turn per-item problems
/// into [`SkipReason`]s instead.
#[derive(Debug, Error)]
pub enum PrepError {
    #[error("{role} directory does not exist: {}", path.display())]
    DirectoryNotFound { role: &'static str, path: PathBuf },

    #[error("File {name} not found in {}", dir.display())]
    ImageNotFound { name: String, dir: PathBuf },

    #[error("Provide a list with image names including the extension")]
    EmptyNameList,

    #[error("Manifest error in {}: {message}", path.display())]
    Manifest { path: PathBuf, message: String },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Mask error: {0}")]
    Mask(#[from] mask_roi::MaskError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a batch item was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SkipReason {
    /// A mask exists but its image does not
    MissingImage,
    /// An image exists but its mask does not
    MissingMask,
    /// Image or mask could not be decoded
    Decode(String),
    /// The output file could not be written
    Write(String),
    /// Another image in the same run already maps to this output file
    DuplicateOutput(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::MissingImage => write!(f, "Image file not found"),
            SkipReason::MissingMask => write!(f, "Mask file not found"),
            SkipReason::Decode(e) => write!(f, "Could not read image: {e}"),
            SkipReason::Write(e) => write!(f, "Could not write output: {e}"),
            SkipReason::DuplicateOutput(other) => {
                write!(f, "Output name already used by {other}")
            }
        }
    }
}
