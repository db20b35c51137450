//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant is fatal to a packing run: decode failures name the offending
//! input, dimension mismatches name both sizes, encode failures name the destination.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::ChannelRole;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to decode {role} channel from {}: {source}", .path.display())]
    Decode {
        role: ChannelRole,
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error(
        "Dimension mismatch: {expected_role} is {}x{} but {found_role} is {}x{}",
        .expected.0, .expected.1, .found.0, .found.1
    )]
    DimensionMismatch {
        expected_role: ChannelRole,
        expected: (u32, u32),
        found_role: ChannelRole,
        found: (u32, u32),
    },

    #[error("Failed to encode {}: {reason}", .path.display())]
    Encode { path: PathBuf, reason: String },

    #[error("Invalid configuration in {}: {reason}", .path.display())]
    Config { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn encode<E: std::fmt::Display>(path: impl Into<PathBuf>, e: E) -> Self {
        Error::Encode {
            path: path.into(),
            reason: e.to_string(),
        }
    }
}
