use clap::Parser;
use std::path::PathBuf;

use texpack::LumaWeights;

#[derive(Parser, Debug)]
#[command(
    name = "texpack",
    version,
    about = "Pack four grayscale maps into the RGBA channels of one texture"
)]
pub struct CliArgs {
    /// Map stored in the red channel
    #[arg(long)]
    pub red: Option<PathBuf>,

    /// Map stored in the green channel
    #[arg(long)]
    pub green: Option<PathBuf>,

    /// Map stored in the blue channel
    #[arg(long)]
    pub blue: Option<PathBuf>,

    /// Map stored in the alpha channel
    #[arg(long)]
    pub alpha: Option<PathBuf>,

    /// Output filename; the extension selects the format (png, tiff, tga, bmp, webp)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Load packing parameters from a preset file (JSON, optional // header)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Write the effective parameters as a preset file and exit
    #[arg(long)]
    pub save_config: Option<PathBuf>,

    /// Weights used to reduce color sources to grayscale
    #[arg(long, value_enum)]
    pub luma: Option<LumaWeights>,

    /// Write a JSON sidecar describing the channel sources next to the output
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Do not print the working directory listing before processing
    #[arg(long, default_value_t = false)]
    pub no_listing: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
