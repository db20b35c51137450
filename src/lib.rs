#![doc = r#"
texpack — pack four grayscale maps into the channels of one RGBA texture.

Technical artists often keep independent material properties (roughness, metalness,
ambient occlusion, height, ...) as separate grayscale maps. Packing them into the red,
green, blue and alpha channels of a single image cuts texture fetches at runtime. This
crate loads the four sources, coerces each to 8-bit grayscale, checks that their sizes
agree, interleaves them positionally and writes the result. It powers the `texpack`
CLI and can be embedded in your own tools.

Quick start: pack to a file
---------------------------
```rust,no_run
use std::path::PathBuf;
use texpack::{pack_to_path, Channels, LumaWeights, PackParams};

fn main() -> texpack::Result<()> {
    let params = PackParams {
        inputs: Channels::new(
            PathBuf::from("maps/roughness.png"),
            PathBuf::from("maps/metalness.png"),
            PathBuf::from("maps/ao.png"),
            PathBuf::from("maps/height.png"),
        ),
        output: PathBuf::from("packed.png"),
        luma: LumaWeights::Rec601,
        manifest: true,
        list_working_dir: false,
    };

    let report = pack_to_path(&params)?;
    println!("{}x{} {} -> {:?}", report.width, report.height, report.format, report.output);
    Ok(())
}
```

Pack in memory
--------------
```rust,no_run
use texpack::{pack_to_buffer, Channels, LumaWeights};

fn main() -> texpack::Result<()> {
    let packed = pack_to_buffer(&Channels::default(), LumaWeights::Rec601)?;
    let rgba = packed.to_rgba_image()?;
    assert_eq!(rgba.dimensions(), packed.dimensions());
    Ok(())
}
```

Error handling
--------------
All public functions return `texpack::Result<T>`; every error is fatal to a run.

```rust,no_run
use texpack::{pack_to_path, Error, PackParams};

fn main() {
    match pack_to_path(&PackParams::default()) {
        Ok(report) => println!("wrote {:?}", report.output),
        Err(Error::Decode { role, path, .. }) => eprintln!("{role} map unreadable: {path:?}"),
        Err(Error::DimensionMismatch { .. }) => eprintln!("maps differ in size"),
        Err(other) => eprintln!("{other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — rasters, parameters, grayscale coercion and merging.
- [`io`] — decoding sources, directory listing, raster and sidecar writers.
- [`types`] — `ChannelRole`, `LumaWeights`, `OutputFormat`.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::params::PackParams;
pub use core::raster::{Channels, GrayscaleImage, PackedImage};
pub use error::{Error, Result};
pub use types::{ChannelRole, LumaWeights, OutputFormat};

// Pipeline steps
pub use core::processing::luma::coerce_to_gray;
pub use core::processing::merge::{merge, validate_dimensions};
pub use io::reader::load_channel;
pub use io::writers::manifest::{PackManifest, write_manifest_sidecar};
pub use io::writers::raster::save;

// High-level API re-exports
pub use api::{PackReport, load_channels, pack_files, pack_to_buffer, pack_to_path};
