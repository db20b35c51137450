//! Shared types and enums used across texpack.
//! Includes `ChannelRole`, the grayscale coercion weights (`LumaWeights`),
//! and the supported output encodings (`OutputFormat`).
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelRole {
    Red,
    Green,
    Blue,
    Alpha,
}

impl ChannelRole {
    pub const ALL: [ChannelRole; 4] = [
        ChannelRole::Red,
        ChannelRole::Green,
        ChannelRole::Blue,
        ChannelRole::Alpha,
    ];

    /// Index of this role inside an interleaved RGBA sample.
    pub fn index(self) -> usize {
        match self {
            ChannelRole::Red => 0,
            ChannelRole::Green => 1,
            ChannelRole::Blue => 2,
            ChannelRole::Alpha => 3,
        }
    }
}

impl std::fmt::Display for ChannelRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelRole::Red => write!(f, "red"),
            ChannelRole::Green => write!(f, "green"),
            ChannelRole::Blue => write!(f, "blue"),
            ChannelRole::Alpha => write!(f, "alpha"),
        }
    }
}

/// Weighting used to reduce a color source to a single intensity.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LumaWeights {
    /// ITU-R 601-2: L = R*299/1000 + G*587/1000 + B*114/1000
    #[default]
    #[value(name = "rec601")]
    Rec601,
    /// sRGB / ITU-R 709 weights, as applied by the `image` crate
    #[value(name = "rec709")]
    Rec709,
}

impl std::fmt::Display for LumaWeights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LumaWeights::Rec601 => write!(f, "Rec601"),
            LumaWeights::Rec709 => write!(f, "Rec709"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum OutputFormat {
    PNG,
    TIFF,
    TGA,
    BMP,
    WEBP, // Lossless only
}

impl OutputFormat {
    /// Infer the encoding from the destination's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, String> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "png" => Ok(OutputFormat::PNG),
            "tif" | "tiff" => Ok(OutputFormat::TIFF),
            "tga" => Ok(OutputFormat::TGA),
            "bmp" => Ok(OutputFormat::BMP),
            "webp" => Ok(OutputFormat::WEBP),
            "jpg" | "jpeg" => Err("JPEG cannot store an alpha channel".to_string()),
            "" => Err("output path has no extension to infer a format from".to_string()),
            other => Err(format!("unsupported output extension: .{}", other)),
        }
    }

    pub fn image_format(self) -> image::ImageFormat {
        match self {
            OutputFormat::PNG => image::ImageFormat::Png,
            OutputFormat::TIFF => image::ImageFormat::Tiff,
            OutputFormat::TGA => image::ImageFormat::Tga,
            OutputFormat::BMP => image::ImageFormat::Bmp,
            OutputFormat::WEBP => image::ImageFormat::WebP,
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::PNG => write!(f, "PNG"),
            OutputFormat::TIFF => write!(f, "TIFF"),
            OutputFormat::TGA => write!(f, "TGA"),
            OutputFormat::BMP => write!(f, "BMP"),
            OutputFormat::WEBP => write!(f, "WEBP"),
        }
    }
}
