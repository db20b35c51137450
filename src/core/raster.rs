//! In-memory rasters: single-channel `GrayscaleImage` planes, the interleaved
//! four-channel `PackedImage`, and `Channels<T>`, a value per RGBA role.
use std::path::PathBuf;

use image::RgbaImage;
use ndarray::{Array2, Array3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::ChannelRole;

/// One value per packing role, in RGBA order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channels<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
    pub alpha: T,
}

impl<T> Channels<T> {
    pub fn new(red: T, green: T, blue: T, alpha: T) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub fn get(&self, role: ChannelRole) -> &T {
        match role {
            ChannelRole::Red => &self.red,
            ChannelRole::Green => &self.green,
            ChannelRole::Blue => &self.blue,
            ChannelRole::Alpha => &self.alpha,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChannelRole, &T)> {
        ChannelRole::ALL.into_iter().map(move |role| (role, self.get(role)))
    }

    pub fn map<U, F: FnMut(ChannelRole, T) -> U>(self, mut f: F) -> Channels<U> {
        Channels {
            red: f(ChannelRole::Red, self.red),
            green: f(ChannelRole::Green, self.green),
            blue: f(ChannelRole::Blue, self.blue),
            alpha: f(ChannelRole::Alpha, self.alpha),
        }
    }
}

impl<T, E> Channels<std::result::Result<T, E>> {
    /// Surface the first error in role order.
    pub fn transpose(self) -> std::result::Result<Channels<T>, E> {
        Ok(Channels {
            red: self.red?,
            green: self.green?,
            blue: self.blue?,
            alpha: self.alpha?,
        })
    }
}

impl Default for Channels<PathBuf> {
    fn default() -> Self {
        Channels::new(
            PathBuf::from("Assets/Normal_2_5_0_point_4_5.png"),
            PathBuf::from("Assets/Normal_4_15_0_point_5_6.png"),
            PathBuf::from("Assets/Normal_6_30_0_point_6_7.png"),
            PathBuf::from("Assets/Normal_8_60_0_point_7_8.png"),
        )
    }
}

/// 8-bit single-channel plane, indexed `[[row, col]]`.
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleImage {
    pub data: Array2<u8>,
    /// Color type of the decoded source before coercion (e.g. `Rgb8`).
    pub source_color: String,
}

impl GrayscaleImage {
    pub fn new(data: Array2<u8>, source_color: impl Into<String>) -> Self {
        Self {
            data,
            source_color: source_color.into(),
        }
    }

    pub fn from_gray(gray: image::GrayImage, source_color: impl Into<String>) -> Result<Self> {
        let (width, height) = gray.dimensions();
        let data = Array2::from_shape_vec((height as usize, width as usize), gray.into_raw())
            .map_err(|e| Error::Processing(format!("grayscale buffer shape: {}", e)))?;
        Ok(Self::new(data, source_color))
    }

    pub fn width(&self) -> u32 {
        self.data.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.data.nrows() as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[[y as usize, x as usize]]
    }
}

/// Interleaved RGBA raster of shape `(height, width, 4)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PackedImage {
    pub data: Array3<u8>,
}

impl PackedImage {
    pub fn width(&self) -> u32 {
        self.data.dim().1 as u32
    }

    pub fn height(&self) -> u32 {
        self.data.dim().0 as u32
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width(), self.height())
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let (row, col) = (y as usize, x as usize);
        [
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
            self.data[[row, col, 3]],
        ]
    }

    pub fn to_rgba_image(&self) -> Result<RgbaImage> {
        let (width, height) = self.dimensions();
        let raw = self.data.as_standard_layout().to_owned().into_raw_vec();
        RgbaImage::from_raw(width, height, raw).ok_or_else(|| {
            Error::Processing(format!(
                "packed buffer does not fit a {}x{} RGBA image",
                width, height
            ))
        })
    }
}
