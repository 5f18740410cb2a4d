//! # resize-image
//!
//! Resize exactly one raster image to an exact `WIDTHxHEIGHT` resolution
//! and commit it to a destination path so that no observer — including a
//! concurrent sibling invocation writing the same path — ever sees a
//! partial or corrupted file there.
//!
//! # Architecture
//!
//! One invocation is a straight line through three stages:
//!
//! ```text
//! 1. Parse     "20x30"        →  SizeSpec          (validated dimensions)
//! 2. Render    source + spec  →  encoded bytes     (decode, Lanczos3, flatten, encode)
//! 3. Commit    bytes + path   →  destination file  (staging file + atomic rename)
//! ```
//!
//! Rendering never touches the destination and committing never inspects
//! pixels, so each stage is testable on its own and the torn-write
//! guarantee rests entirely on the commit protocol: every writer stages
//! into its own uniquely-named temporary file in the destination
//! directory and lands it with a single same-volume rename-with-replace.
//! Whichever concurrent writer renames last wins; that race is documented
//! and accepted.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`size`] | `WIDTHxHEIGHT` token parsing into a validated [`SizeSpec`] |
//! | [`format`] | Destination-extension → output-format table with alpha-support flags |
//! | [`pipeline`] | Decode, exact Lanczos3 resample, alpha flattening, in-memory encode |
//! | [`persist`] | Same-directory staging file + atomic rename-with-replace |
//! | [`paths`] | `~` expansion and absolutization of CLI paths |
//! | [`error`] | Failure taxonomy with one process exit code per category |
//!
//! # Colorspace Handling
//!
//! The destination extension selects the encoder. Formats without alpha
//! support (JPEG) get an opaque RGB image: alpha-bearing inputs are
//! composited over white using their alpha channel as the mask, and other
//! layouts (grayscale) are converted losslessly. Alpha-capable formats
//! receive the resampled image with its channel layout untouched.

pub mod error;
pub mod format;
pub mod paths;
pub mod persist;
pub mod pipeline;
pub mod size;

pub use error::ResizeError;
pub use format::OutputFormat;
pub use size::SizeSpec;
