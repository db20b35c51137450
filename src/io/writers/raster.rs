use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::core::raster::PackedImage;
use crate::error::{Error, Result};
use crate::types::OutputFormat;

/// Encode `image` to `output`, choosing the format from the extension.
///
/// The bytes go to a temporary file beside `output` that is renamed over it
/// once encoding succeeded, so a failed save leaves any previous file intact.
/// An overwritten file keeps its permissions; a new one gets the usual
/// `0o666` minus the process umask, as a plain create would.
pub fn save(image: &PackedImage, output: &Path) -> Result<OutputFormat> {
    let format = OutputFormat::from_path(output).map_err(|e| Error::encode(output, e))?;
    let rgba = image.to_rgba_image()?;

    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let stem = output
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("packed");

    let existing_permissions = fs::metadata(output).ok().map(|m| m.permissions());

    let prefix = format!(".{}_", stem);
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".partial");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // tempfile defaults to 0o600; the umask still applies to this mode
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp_file = builder
        .tempfile_in(parent)
        .map_err(|e| Error::encode(output, e))?;

    {
        let mut writer = BufWriter::new(tmp_file.as_file_mut());
        rgba.write_to(&mut writer, format.image_format())
            .map_err(|e| Error::encode(output, e))?;
        writer.flush().map_err(|e| Error::encode(output, e))?;
    }

    if let Some(permissions) = existing_permissions {
        fs::set_permissions(tmp_file.path(), permissions).map_err(|e| Error::encode(output, e))?;
    }

    tmp_file
        .persist(output)
        .map_err(|e| Error::encode(output, e.error))?;

    info!(
        "save: {} {}x{} written to {:?}",
        format,
        image.width(),
        image.height(),
        output
    );
    Ok(format)
}
