use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::raster::Channels;
use crate::error::{Error, Result};
use crate::types::LumaWeights;

/// Packing parameters suitable for preset files and the CLI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackParams {
    /// Source map per destination channel
    pub inputs: Channels<PathBuf>,
    /// Destination file; its extension selects the encoding
    pub output: PathBuf,
    pub luma: LumaWeights,
    /// If true, write a JSON sidecar next to the output
    pub manifest: bool,
    pub list_working_dir: bool,
}

impl Default for PackParams {
    fn default() -> Self {
        Self {
            inputs: Channels::default(),
            output: PathBuf::from("result.png"),
            luma: LumaWeights::Rec601,
            manifest: false,
            list_working_dir: true,
        }
    }
}

impl PackParams {
    /// Load a preset. Any `//` header before the first `{` is skipped.
    pub fn load_preset(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| Error::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_preset_str(&content).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    pub fn from_preset_str(content: &str) -> std::result::Result<Self, String> {
        let json_start = content
            .find('{')
            .ok_or("no JSON content found".to_string())?;
        serde_json::from_str(&content[json_start..]).map_err(|e| e.to_string())
    }

    pub fn to_preset_string(&self) -> Result<String> {
        let mut preset = String::new();
        preset.push_str("// ==========================================\n");
        preset.push_str("// texpack Configuration Preset\n");
        preset.push_str("// ==========================================\n");
        preset.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
        preset.push_str(&format!("// Generated: {}\n", chrono::Utc::now().to_rfc3339()));
        preset.push_str("// ==========================================\n\n");

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Processing(format!("preset serialization: {}", e)))?;
        preset.push_str(&json);
        preset.push('\n');
        Ok(preset)
    }

    pub fn save_preset(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_preset_string()?)?;
        info!("Preset saved to: {:?}", path);
        Ok(())
    }
}
