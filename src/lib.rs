#![doc = r#"
CROPRO — content-aware crop selection for thumbnails.

This crate finds the most visually salient rectangular crop of a given
aspect ratio in a raster image, with no user interaction. It scores
candidate rectangles against per-pixel feature channels (edge detail, skin
likelihood, saturation, and externally supplied boost regions) weighted by
a geometric importance field, and returns the best-scoring crop together
with the full candidate list and the raw feature map.

The crate operates on an already-decoded, orientation-corrected pixel
buffer; decoding/encoding, color-mode conversion, and face/object
detection are the caller's concern. A face detector (or any region
proposer) plugs in by passing `BoostRegion` values in `CropParams`.

Add dependency
--------------
```toml
[dependencies]
cropro = "0.1"
```

Quick start: pick a square crop
-------------------------------
```no_run
use cropro::{CropParams, PixelBuffer, select_crop};

fn main() -> cropro::Result<()> {
    // interleaved RGB bytes from your decoder, already normalized
    let (width, height) = (640, 480);
    let pixels = vec![0u8; width * height * 3];
    let image = PixelBuffer::from_raw(width, height, 3, pixels)?;

    let result = select_crop(&image, 200, 200, &CropParams::default())?;
    let top = result.top_crop;
    println!(
        "crop {}x{} at ({}, {}), score {:.4}",
        top.width, top.height, top.x, top.y, top.score.total
    );
    Ok(())
}
```

Biasing toward detected regions
-------------------------------
```no_run
use cropro::{BoostRegion, CropParams, PixelBuffer, select_crop};

fn main() -> cropro::Result<()> {
    let image = PixelBuffer::from_raw(640, 480, 3, vec![0u8; 640 * 480 * 3])?;
    let mut params = CropParams::default();
    // e.g. a face rectangle from an external detector
    params.boosts.push(BoostRegion::new(120.0, 80.0, 60.0, 60.0, 1.0));

    let result = select_crop(&image, 100, 100, &params)?;
    assert!(result.top_crop.score.total.is_finite());
    Ok(())
}
```

Fixed-size scans
----------------
`analyze_crops` runs the same search with the crop size given directly in
image coordinates, skipping the aspect fitting and prescaling that
`select_crop` performs.

Error handling
--------------
All public functions return `cropro::Result<T>`; match on `cropro::Error`
to distinguish degenerate inputs from infeasible crop geometry.

Feature flags
-------------
- `image`: conversions from `image` crate types into [`PixelBuffer`].
- `full`: enables the complete feature set.

Useful modules
--------------
- [`api`] — high-level entry points `select_crop` / `analyze_crops`.
- [`core`] — parameters and the analysis pipeline primitives.
- [`types`] — plain-data types (`BoostRegion`, `ScoredCrop`, ...).
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Interop module (only available with image feature)
#[cfg(feature = "image")]
pub mod interop;

// Curated public API surface
// Types
pub use crate::core::analysis::buffer::{FeatureMap, PixelBuffer};
pub use crate::core::params::CropParams;
pub use crate::error::{Error, Result};
pub use crate::types::{BoostRegion, ScoreBreakdown, ScoredCrop};

// High-level API re-exports
pub use crate::api::{CropResult, analyze_crops, select_crop};
