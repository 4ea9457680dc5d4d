//! Crop-selection orchestration: prescale the working image, extract the
//! feature map, enumerate and score candidates, and translate the results
//! back to original image coordinates.
use tracing::{debug, info};

use crate::core::analysis::boost::compose_boosts;
use crate::core::analysis::buffer::{FeatureMap, PixelBuffer};
use crate::core::analysis::candidates::{self, Candidate, ScaleBounds};
use crate::core::analysis::features;
use crate::core::analysis::resize::{downsample_feature_map, resize_pixel_buffer};
use crate::core::analysis::score::score;
use crate::core::params::CropParams;
use crate::error::{Error, Result};
use crate::types::{BoostRegion, ScoreBreakdown, ScoredCrop};

/// Feature map plus scored candidates in analysis-resolution coordinates.
#[derive(Debug)]
pub(crate) struct Analysis {
    pub feature_map: FeatureMap,
    pub scored: Vec<(Candidate, ScoreBreakdown)>,
    pub top_index: usize,
}

/// Scan `crop_width` x `crop_height` candidates (through the scale grid)
/// across the image and score every one against the downsampled feature map.
pub(crate) fn analyze(
    image: &PixelBuffer,
    crop_width: usize,
    crop_height: usize,
    boosts: &[BoostRegion],
    bounds: &ScaleBounds,
    params: &CropParams,
) -> Result<Analysis> {
    let candidates = candidates::generate(
        image.width(),
        image.height(),
        crop_width,
        crop_height,
        bounds,
        params.step,
    )?;

    let lum = features::luminance(image);
    let feature_map = FeatureMap::new(
        features::detect_skin(image, &lum, params),
        features::detect_edges(&lum),
        features::detect_saturation(image, &lum, params),
        compose_boosts(image.width(), image.height(), boosts),
    );
    let score_map = downsample_feature_map(&feature_map, params.score_down_sample)?;

    let mut scored = Vec::with_capacity(candidates.len());
    let mut top_index = 0;
    let mut top_total = f64::NEG_INFINITY;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let breakdown = score(&score_map, params.score_down_sample, &candidate, params);
        // strictly greater keeps the earliest candidate on exact ties
        if breakdown.total > top_total {
            top_total = breakdown.total;
            top_index = index;
        }
        scored.push((candidate, breakdown));
    }
    debug!(
        "Scored {} candidates, top total {:.6}",
        scored.len(),
        top_total
    );

    Ok(Analysis {
        feature_map,
        scored,
        top_index,
    })
}

/// Analysis results translated back to original resolution.
#[derive(Debug)]
pub(crate) struct Selection {
    pub feature_map: FeatureMap,
    pub crops: Vec<ScoredCrop>,
    pub top_index: usize,
}

/// Full selection flow for a `target_width` x `target_height` output aspect:
/// fill-scale the aspect to the source, clamp the scan bounds so no scale
/// requires upscaling, optionally prescale for speed, analyze, and rescale
/// every candidate back.
pub(crate) fn select(
    image: &PixelBuffer,
    target_width: usize,
    target_height: usize,
    params: &CropParams,
) -> Result<Selection> {
    params.validate()?;
    if target_width == 0 || target_height == 0 {
        return Err(Error::DegenerateInput {
            arg: "target",
            value: format!("{target_width}x{target_height}"),
        });
    }

    let overall_scale = (image.width() as f64 / target_width as f64)
        .min(image.height() as f64 / target_height as f64);
    let mut crop_width = (target_width as f64 * overall_scale).floor() as usize;
    let mut crop_height = (target_height as f64 * overall_scale).floor() as usize;
    if crop_width == 0 || crop_height == 0 {
        return Err(Error::InvalidGeometry {
            image_width: image.width(),
            image_height: image.height(),
            crop_width,
            crop_height,
        });
    }

    // never scan a scale that would need upscaling to reach the target
    let min_scale = params
        .max_scale
        .min((1.0 / overall_scale).max(params.min_scale));

    let mut prescale_factor = 1.0;
    let mut working = None;
    let mut boosts = params.boosts.clone();
    if params.prescale {
        let factor = 1.0 / overall_scale / min_scale;
        if factor < 1.0 {
            let new_width = ((image.width() as f64 * factor) as usize).max(1);
            let new_height = ((image.height() as f64 * factor) as usize).max(1);
            info!(
                "Prescaling {}x{} -> {}x{} (factor {:.4})",
                image.width(),
                image.height(),
                new_width,
                new_height,
                factor
            );
            working = Some(resize_pixel_buffer(image, new_width, new_height)?);
            crop_width = (crop_width as f64 * factor).floor() as usize;
            crop_height = (crop_height as f64 * factor).floor() as usize;
            for boost in &mut boosts {
                boost.x *= factor;
                boost.y *= factor;
                boost.width *= factor;
                boost.height *= factor;
            }
            prescale_factor = factor;
        }
    }
    let analysis_image = working.as_ref().unwrap_or(image);

    let bounds = ScaleBounds {
        max_scale: params.max_scale,
        min_scale,
        scale_step: params.scale_step,
    };
    let analysis = analyze(
        analysis_image,
        crop_width,
        crop_height,
        &boosts,
        &bounds,
        params,
    )?;

    let crops = analysis
        .scored
        .iter()
        .map(|(candidate, breakdown)| unprescale(candidate, *breakdown, prescale_factor))
        .collect();

    Ok(Selection {
        feature_map: analysis.feature_map,
        crops,
        top_index: analysis.top_index,
    })
}

/// Translate a candidate back to original resolution, truncating to whole
/// pixel coordinates.
fn unprescale(candidate: &Candidate, score: ScoreBreakdown, factor: f64) -> ScoredCrop {
    ScoredCrop {
        x: (candidate.x / factor).floor() as u32,
        y: (candidate.y / factor).floor() as u32,
        width: (candidate.width / factor).floor() as u32,
        height: (candidate.height / factor).floor() as u32,
        score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_raw(width, height, 3, vec![128; width * height * 3]).unwrap()
    }

    #[test]
    fn select_without_prescale_prefers_the_largest_fill_crop() {
        let mut params = CropParams::default();
        params.prescale = false;
        params.step = 50;
        let selection = select(&gray(100, 100), 50, 50, &params).unwrap();

        // fill scale 2 makes the scan 100x100 at scale 1.0 and 90x90 at 0.9,
        // each viable only at the origin; all totals tie at zero, so the
        // first candidate wins
        assert_eq!(selection.crops.len(), 2);
        let top = selection.crops[selection.top_index];
        assert_eq!((top.x, top.y, top.width, top.height), (0, 0, 100, 100));
        assert_eq!(top.score.total, 0.0);
    }

    #[test]
    fn select_clamps_min_scale_to_avoid_upscaling() {
        let mut params = CropParams::default();
        params.prescale = false;
        params.min_scale = 0.5;
        params.step = 8;
        // fill scale is 100/95, so 1/overall_scale = 0.95 overrides the
        // configured 0.5 and the grid stops after the 0.9 tier (the boundary
        // is min_scale - scale_step) instead of scanning down to half size
        let selection = select(&gray(100, 100), 95, 95, &params).unwrap();
        let smallest = selection.crops.iter().map(|c| c.width).min().unwrap();
        assert!(smallest >= 89, "smallest width {smallest}");
    }

    #[test]
    fn select_rejects_zero_targets() {
        let err = select(&gray(10, 10), 0, 10, &CropParams::default()).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput { .. }));
    }

    #[test]
    fn prescaled_candidates_stay_inside_the_original_bounds() {
        let params = CropParams::default();
        let selection = select(&gray(137, 91), 40, 30, &params).unwrap();
        for crop in &selection.crops {
            assert!(crop.x + crop.width <= 137, "{crop:?}");
            assert!(crop.y + crop.height <= 91, "{crop:?}");
            assert!(crop.width > 0 && crop.height > 0, "{crop:?}");
        }
    }
}
