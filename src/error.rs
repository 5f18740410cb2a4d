//! Error taxonomy and exit-code mapping.
//!
//! Every failure is terminal for the invocation — nothing is retried.
//! Each category maps to a distinct process exit code so calling scripts
//! can branch on cause without parsing text:
//!
//! | Category | Exit code |
//! |---|---|
//! | wrong argument count (handled by the CLI layer) | 1 |
//! | [`ResizeError::SourceNotFound`] | 2 |
//! | [`ResizeError::InvalidSize`] | 3 |
//! | decode / encode / persist failures | 4 |

use crate::size::InvalidSizeFormat;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResizeError {
    /// The source path does not exist.
    #[error("Source file not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// The size token failed validation.
    #[error(transparent)]
    InvalidSize(#[from] InvalidSizeFormat),

    /// The source file could not be opened or decoded as an image.
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// The destination extension names no compiled-in encoder.
    #[error("unsupported destination format {extension:?} (supported: jpg, jpeg, png, tif, tiff, webp)")]
    UnsupportedFormat { extension: String },

    /// The encoder rejected the resized image.
    #[error("{format} encode failed: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    /// Directory creation, the staging write, or the final rename failed.
    #[error("could not persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResizeError {
    /// Process exit code for this failure category.
    pub fn exit_code(&self) -> u8 {
        match self {
            ResizeError::SourceNotFound(_) => 2,
            ResizeError::InvalidSize(_) => 3,
            ResizeError::Decode { .. }
            | ResizeError::UnsupportedFormat { .. }
            | ResizeError::Encode { .. }
            | ResizeError::Persist { .. } => 4,
        }
    }
}
