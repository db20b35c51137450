pub mod manifest;
pub mod raster;
