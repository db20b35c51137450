use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::raster::{Channels, GrayscaleImage};
use crate::error::{Error, Result};
use crate::types::{LumaWeights, OutputFormat};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelSource {
    pub path: PathBuf,
    /// Color type the source decoded as, before grayscale coercion
    pub source_color: String,
}

/// JSON sidecar describing which map landed in which channel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackManifest {
    pub generator: String,
    pub created: DateTime<Utc>,
    pub width: u32,
    pub height: u32,
    pub format: OutputFormat,
    pub luma: LumaWeights,
    pub channels: Channels<ChannelSource>,
}

impl PackManifest {
    pub fn new(
        inputs: &Channels<PathBuf>,
        planes: &Channels<GrayscaleImage>,
        format: OutputFormat,
        luma: LumaWeights,
    ) -> Self {
        let (width, height) = planes.red.dimensions();
        let channels = inputs.clone().map(|role, path| ChannelSource {
            path,
            source_color: planes.get(role).source_color.clone(),
        });

        Self {
            generator: format!("texpack {}", env!("CARGO_PKG_VERSION")),
            created: Utc::now(),
            width,
            height,
            format,
            luma,
            channels,
        }
    }
}

/// Sidecar path for an output image: same stem, `.json` extension.
pub fn sidecar_path(output_path: &Path) -> PathBuf {
    output_path.with_extension("json")
}

/// Write `manifest` next to `output_path` and return the sidecar's path.
pub fn write_manifest_sidecar(output_path: &Path, manifest: &PackManifest) -> Result<PathBuf> {
    let sidecar = sidecar_path(output_path);
    let json_string =
        serde_json::to_string_pretty(manifest).map_err(|e| Error::encode(&sidecar, e))?;
    std::fs::write(&sidecar, json_string).map_err(|e| Error::encode(&sidecar, e))?;

    info!("Created packing manifest sidecar: {:?}", sidecar);
    Ok(sidecar)
}
