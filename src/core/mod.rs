//! Core building blocks: in-memory rasters, packing parameters, grayscale
//! coercion and the merge step. These are internal primitives consumed by
//! the high-level `api` module.
pub mod params;
pub mod processing;
pub mod raster;
