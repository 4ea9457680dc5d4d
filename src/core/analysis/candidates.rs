//! Candidate crop enumeration over a scale/position grid.
use tracing::debug;

use crate::error::{Error, Result};

/// One candidate rectangle, in analysis-resolution coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scan scale bounds for one search. The full selection flow clamps
/// `min_scale` so that no scanned scale requires upscaling the source.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScaleBounds {
    pub max_scale: f64,
    pub min_scale: f64,
    pub scale_step: f64,
}

/// Scales from `max_scale` down to `min_scale` inclusive, quantized to 1/100
/// to keep the grid free of floating drift.
fn scale_grid(bounds: &ScaleBounds) -> Vec<f64> {
    let start = (bounds.max_scale * 100.0).round() as i64;
    let stop = ((bounds.min_scale - bounds.scale_step) * 100.0).round() as i64;
    let step = ((bounds.scale_step * 100.0).round() as i64).max(1);

    let mut scales = Vec::new();
    let mut value = start;
    while value > stop {
        scales.push(value as f64 / 100.0);
        value -= step;
    }
    scales
}

/// Enumerate candidates: scale descending, then row-major over (y, x).
/// The generation order is a stable contract; exact score ties resolve to
/// the earliest candidate.
pub(crate) fn generate(
    image_width: usize,
    image_height: usize,
    crop_width: usize,
    crop_height: usize,
    bounds: &ScaleBounds,
    step: usize,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();
    if crop_width > 0 && crop_height > 0 {
        for scale in scale_grid(bounds) {
            let width = crop_width as f64 * scale;
            let height = crop_height as f64 * scale;
            for y in (0..image_height).step_by(step) {
                if y as f64 + height > image_height as f64 {
                    break;
                }
                for x in (0..image_width).step_by(step) {
                    if x as f64 + width > image_width as f64 {
                        break;
                    }
                    candidates.push(Candidate {
                        x: x as f64,
                        y: y as f64,
                        width,
                        height,
                    });
                }
            }
        }
    }
    if candidates.is_empty() {
        return Err(Error::InvalidGeometry {
            image_width,
            image_height,
            crop_width,
            crop_height,
        });
    }
    debug!("Generated {} crop candidates", candidates.len());
    Ok(candidates)
}
