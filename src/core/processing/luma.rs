use image::{DynamicImage, GrayImage};
use ndarray::{Array2, ArrayView3, Axis, Zip};
use tracing::debug;

use crate::core::raster::GrayscaleImage;
use crate::error::{Error, Result};
use crate::types::LumaWeights;

/// ITU-R 601-2 luma in 16.16 fixed point; the weights sum to 65536 so a gray
/// pixel maps to itself.
#[inline]
pub fn rec601_luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Reduce any decoded image to one 8-bit intensity plane.
///
/// 8-bit gray passes through untouched and gray+alpha loses its alpha. Wider
/// samples are narrowed by the `image` crate before weighting. For 16-bit gray
/// that means rescaling to 0..=255; Pillow's `I;16` to `L` conversion clips at
/// 255 instead, so such sources do not match its output.
pub fn coerce_to_gray(img: DynamicImage, weights: LumaWeights) -> Result<GrayscaleImage> {
    let source_color = format!("{:?}", img.color());
    debug!(
        "coerce_to_gray: {}x{} {} with {} weights",
        img.width(),
        img.height(),
        source_color,
        weights
    );

    let gray = match (img, weights) {
        (DynamicImage::ImageLuma8(gray), _) => gray,
        (
            img @ (DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageLumaA16(_)),
            _,
        ) => img.to_luma8(),
        (img, LumaWeights::Rec709) => img.to_luma8(),
        (img, LumaWeights::Rec601) => weighted_rec601(&img)?,
    };

    GrayscaleImage::from_gray(gray, source_color)
}

fn weighted_rec601(img: &DynamicImage) -> Result<GrayImage> {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let (rows, cols) = (height as usize, width as usize);

    let samples = ArrayView3::from_shape((rows, cols, 3), rgb.as_raw())
        .map_err(|e| Error::Processing(format!("rgb buffer shape: {}", e)))?;
    let mut plane = Array2::<u8>::zeros((rows, cols));

    Zip::from(&mut plane)
        .and(samples.lanes(Axis(2)))
        .par_for_each(|l, px| *l = rec601_luma(px[0], px[1], px[2]));

    GrayImage::from_raw(width, height, plane.into_raw_vec())
        .ok_or_else(|| Error::Processing("luma plane does not fit source dimensions".to_string()))
}
