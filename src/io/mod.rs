//! I/O layer: decoding source maps into grayscale planes (`reader`), the
//! working-directory listing (`listing`), and `writers` for the packed
//! raster and its JSON sidecar.
pub mod listing;
pub mod reader;
pub use reader::load_channel;

pub mod writers;
