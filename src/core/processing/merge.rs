use ndarray::{Array3, Axis};
use tracing::{debug, info};

use crate::core::raster::{Channels, GrayscaleImage, PackedImage};
use crate::error::{Error, Result};
use crate::types::ChannelRole;

/// Check that all four planes share the red plane's size and return it as
/// `(width, height)`. Green, blue and alpha are compared in that order.
pub fn validate_dimensions(planes: &Channels<GrayscaleImage>) -> Result<(u32, u32)> {
    let expected = planes.red.dimensions();

    for (role, plane) in planes.iter().skip(1) {
        let found = plane.dimensions();
        if found != expected {
            return Err(Error::DimensionMismatch {
                expected_role: ChannelRole::Red,
                expected,
                found_role: role,
                found,
            });
        }
    }

    debug!("validate_dimensions: all channels are {}x{}", expected.0, expected.1);
    Ok(expected)
}

/// Interleave four equally sized planes into one RGBA raster. Purely positional:
/// no resampling, flipping or alignment.
pub fn merge(planes: &Channels<GrayscaleImage>) -> Result<PackedImage> {
    let (width, height) = validate_dimensions(planes)?;

    let mut data = Array3::<u8>::zeros((height as usize, width as usize, 4));
    for (role, plane) in planes.iter() {
        data.index_axis_mut(Axis(2), role.index()).assign(&plane.data);
    }

    info!("merge: packed {}x{} RGBA image", width, height);
    Ok(PackedImage { data })
}
