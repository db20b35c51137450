use std::path::Path;

use image::ImageReader;
use tracing::info;

use crate::core::processing::luma::coerce_to_gray;
use crate::core::raster::GrayscaleImage;
use crate::error::{Error, Result};
use crate::types::{ChannelRole, LumaWeights};

/// Decode the map for `role` at `path` and coerce it to one 8-bit plane.
///
/// The format is sniffed from the file contents, falling back to the extension.
/// Missing, unreadable and undecodable files all surface as `Error::Decode`.
pub fn load_channel(role: ChannelRole, path: &Path, weights: LumaWeights) -> Result<GrayscaleImage> {
    let decode_err = |source: image::ImageError| Error::Decode {
        role,
        path: path.to_path_buf(),
        source,
    };

    let img = ImageReader::open(path)
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)?;

    info!(
        "Loaded {} channel from {:?}: {}x{} {:?}",
        role,
        path,
        img.width(),
        img.height(),
        img.color()
    );

    coerce_to_gray(img, weights)
}
