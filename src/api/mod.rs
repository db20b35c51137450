//! High-level, ergonomic library API: load the four source maps, pack them
//! in memory, or run the whole load/validate/merge/save sequence to a file.
//! Prefer these entrypoints over the low-level processing modules.
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::params::PackParams;
use crate::core::processing::merge::merge;
use crate::core::raster::{Channels, GrayscaleImage, PackedImage};
use crate::error::Result;
use crate::io::reader::load_channel;
use crate::io::writers::manifest::{PackManifest, write_manifest_sidecar};
use crate::io::writers::raster::save;
use crate::types::{ChannelRole, LumaWeights, OutputFormat};

/// Result of a packing run written to disk
#[derive(Debug, Clone, PartialEq)]
pub struct PackReport {
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub manifest: Option<PathBuf>,
}

/// Decode all four inputs. Decoding runs concurrently; a failure is reported
/// for the first failing role in red, green, blue, alpha order.
pub fn load_channels(
    inputs: &Channels<PathBuf>,
    weights: LumaWeights,
) -> Result<Channels<GrayscaleImage>> {
    let load = |role: ChannelRole| load_channel(role, inputs.get(role), weights);

    let ((red, green), (blue, alpha)) = rayon::join(
        || rayon::join(|| load(ChannelRole::Red), || load(ChannelRole::Green)),
        || rayon::join(|| load(ChannelRole::Blue), || load(ChannelRole::Alpha)),
    );

    Channels::new(red, green, blue, alpha).transpose()
}

/// Load and merge without touching the output side (no disk writes)
pub fn pack_to_buffer(inputs: &Channels<PathBuf>, weights: LumaWeights) -> Result<PackedImage> {
    let planes = load_channels(inputs, weights)?;
    merge(&planes)
}

/// Load, validate, merge and save according to `params`. Nothing is written
/// unless every input decoded and all sizes agree.
///
/// The image and the optional manifest sidecar are written as two separate
/// steps. If the sidecar fails, the error is returned but the new image is
/// already in place.
pub fn pack_to_path(params: &PackParams) -> Result<PackReport> {
    let planes = load_channels(&params.inputs, params.luma)?;
    let packed = merge(&planes)?;
    let format = save(&packed, &params.output)?;

    let manifest = if params.manifest {
        let manifest = PackManifest::new(&params.inputs, &planes, format, params.luma);
        Some(write_manifest_sidecar(&params.output, &manifest)?)
    } else {
        None
    };

    let (width, height) = packed.dimensions();
    info!("Packed {}x{} {} -> {:?}", width, height, format, params.output);

    Ok(PackReport {
        width,
        height,
        output: params.output.clone(),
        format,
        manifest,
    })
}

/// Convenience wrapper: pack four explicit files into `output` with default settings.
pub fn pack_files(
    red: &Path,
    green: &Path,
    blue: &Path,
    alpha: &Path,
    output: &Path,
) -> Result<PackReport> {
    let params = PackParams {
        inputs: Channels::new(
            red.to_path_buf(),
            green.to_path_buf(),
            blue.to_path_buf(),
            alpha.to_path_buf(),
        ),
        output: output.to_path_buf(),
        ..Default::default()
    };
    pack_to_path(&params)
}
