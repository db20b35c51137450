use std::path::{Path, PathBuf};

use image::{GrayImage, RgbImage};
use texpack::Channels;

/// Writes a row-major 8-bit grayscale PNG.
pub fn write_gray_png(path: &Path, width: u32, height: u32, samples: &[u8]) {
    assert_eq!(samples.len(), (width * height) as usize, "sample count must match size");
    let img = GrayImage::from_raw(width, height, samples.to_vec()).expect("gray buffer");
    img.save(path).expect("write gray png");
}

/// Writes a row-major RGB PNG from `[r, g, b]` triples.
pub fn write_rgb_png(path: &Path, width: u32, height: u32, pixels: &[[u8; 3]]) {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count must match size");
    let raw: Vec<u8> = pixels.iter().flatten().copied().collect();
    let img = RgbImage::from_raw(width, height, raw).expect("rgb buffer");
    img.save(path).expect("write rgb png");
}

/// Writes four grayscale maps named red/green/blue/alpha.png into `dir`.
pub fn write_channel_set(
    dir: &Path,
    width: u32,
    height: u32,
    samples: [&[u8]; 4],
) -> Channels<PathBuf> {
    let paths = Channels::new(
        dir.join("red.png"),
        dir.join("green.png"),
        dir.join("blue.png"),
        dir.join("alpha.png"),
    );
    for (i, (_, path)) in paths.iter().enumerate() {
        write_gray_png(path, width, height, samples[i]);
    }
    paths
}

/// Deterministic gradient used for larger fidelity checks.
pub fn gradient(width: u32, height: u32, seed: u8) -> Vec<u8> {
    (0..height)
        .flat_map(|y| (0..width).map(move |x| (x * 7 + y * 13) as u8 ^ seed))
        .collect()
}

/// Writes four grayscale maps under `root` at the fixed `Assets/` paths the
/// CLI reads when run without arguments; returns those relative paths.
pub fn write_default_assets(
    root: &Path,
    width: u32,
    height: u32,
    samples: [&[u8]; 4],
) -> Channels<PathBuf> {
    let relative = Channels::default();
    std::fs::create_dir_all(root.join("Assets")).expect("create Assets dir");
    for (i, (_, path)) in relative.iter().enumerate() {
        write_gray_png(&root.join(path), width, height, samples[i]);
    }
    relative
}
