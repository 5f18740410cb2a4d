//! `WIDTHxHEIGHT` size token parsing.
//!
//! Target dimensions arrive as a single compact token (`100x100`,
//! `1920X1080`). Parsing is case-insensitive and strict: exactly one `x`
//! separator, two integer parts, both strictly positive. Anything else is
//! an [`InvalidSizeFormat`] whose message names the expected form so the
//! failure is actionable from the command line.

use thiserror::Error;

/// A malformed size token. Carries the offending input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid size {token:?}: size must be in WIDTHxHEIGHT format (e.g. 100x100)")]
pub struct InvalidSizeFormat {
    pub token: String,
}

/// Validated target dimensions. Both components are strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeSpec {
    pub width: u32,
    pub height: u32,
}

impl SizeSpec {
    /// Parse a `WIDTHxHEIGHT` token.
    ///
    /// The separator is matched case-insensitively, so `20X30` is valid.
    /// A token like `10x10x10` fails: the remainder after the first `x`
    /// must itself be a plain integer.
    pub fn parse(token: &str) -> Result<Self, InvalidSizeFormat> {
        let err = || InvalidSizeFormat {
            token: token.to_string(),
        };

        let lowered = token.to_ascii_lowercase();
        let (w, h) = lowered.split_once('x').ok_or_else(err)?;
        let width: u32 = w.parse().map_err(|_| err())?;
        let height: u32 = h.parse().map_err(|_| err())?;
        if width == 0 || height == 0 {
            return Err(err());
        }
        Ok(Self { width, height })
    }
}
