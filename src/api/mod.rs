//! High-level, ergonomic library API: select the best crop for a target
//! aspect, or scan a fixed crop size across the image. Prefer these
//! entrypoints over the low-level `core::analysis` modules when embedding
//! CROPRO.
use tracing::info;

use crate::core::analysis::buffer::{FeatureMap, PixelBuffer};
use crate::core::analysis::candidates::ScaleBounds;
use crate::core::analysis::selector;
use crate::core::params::CropParams;
use crate::error::{Error, Result};
use crate::types::ScoredCrop;

/// Result of a crop search.
///
/// `crops` preserves generation order (scale descending, then row-major over
/// rows and columns); `top_crop` is the maximum-total candidate. Exact ties
/// resolve to the earliest generated candidate, and that order is a stable
/// contract. The feature map is exposed at analysis resolution for external
/// visualization and debugging.
#[derive(Debug, Clone)]
pub struct CropResult {
    pub feature_map: FeatureMap,
    pub crops: Vec<ScoredCrop>,
    pub top_crop: ScoredCrop,
}

/// Find the most salient crop with the aspect ratio `target_width` :
/// `target_height`.
///
/// The target dimensions fix the output aspect; the search scans fill-sized
/// crops of that aspect through the configured scale grid, prescaling the
/// working image when permitted to bound cost, and returns rectangles in
/// original image coordinates.
pub fn select_crop(
    image: &PixelBuffer,
    target_width: u32,
    target_height: u32,
    params: &CropParams,
) -> Result<CropResult> {
    let selection = selector::select(
        image,
        target_width as usize,
        target_height as usize,
        params,
    )?;
    let top_crop = selection.crops[selection.top_index];
    info!(
        "Top crop {}x{} at ({}, {}), total {:.6}",
        top_crop.width, top_crop.height, top_crop.x, top_crop.y, top_crop.score.total
    );
    Ok(CropResult {
        feature_map: selection.feature_map,
        crops: selection.crops,
        top_crop,
    })
}

/// Scan crops of exactly `crop_width` x `crop_height` pixels (stepped through
/// the configured scale grid) across the image at source resolution, without
/// prescaling or aspect fitting.
///
/// This is the raw search underneath [`select_crop`]; use it when the crop
/// size is already expressed in image coordinates.
pub fn analyze_crops(
    image: &PixelBuffer,
    crop_width: u32,
    crop_height: u32,
    params: &CropParams,
) -> Result<CropResult> {
    params.validate()?;
    if crop_width == 0 || crop_height == 0 {
        return Err(Error::DegenerateInput {
            arg: "crop",
            value: format!("{crop_width}x{crop_height}"),
        });
    }

    let bounds = ScaleBounds {
        max_scale: params.max_scale,
        min_scale: params.min_scale,
        scale_step: params.scale_step,
    };
    let analysis = selector::analyze(
        image,
        crop_width as usize,
        crop_height as usize,
        &params.boosts,
        &bounds,
        params,
    )?;

    let crops: Vec<ScoredCrop> = analysis
        .scored
        .iter()
        .map(|(candidate, breakdown)| ScoredCrop {
            x: candidate.x.floor() as u32,
            y: candidate.y.floor() as u32,
            width: candidate.width.floor() as u32,
            height: candidate.height.floor() as u32,
            score: *breakdown,
        })
        .collect();
    let top_crop = crops[analysis.top_index];

    Ok(CropResult {
        feature_map: analysis.feature_map,
        crops,
        top_crop,
    })
}
