//! Rasterizes externally supplied boost regions into the boost channel.
use ndarray::Array2;

use crate::types::BoostRegion;

/// Accumulate `weight * 255` over each region's integer-truncated bounds.
/// Overlapping regions add; the accumulated value saturates at the channel
/// range before narrowing to u8, never wrapping.
pub(crate) fn compose_boosts(width: usize, height: usize, boosts: &[BoostRegion]) -> Array2<u8> {
    let mut acc = Array2::<f32>::zeros((height, width));
    for boost in boosts {
        apply_boost(boost, &mut acc);
    }
    acc.mapv(|v| v.clamp(0.0, 255.0) as u8)
}

fn apply_boost(boost: &BoostRegion, acc: &mut Array2<f32>) {
    let (rows, cols) = acc.dim();
    let x0 = (boost.x.max(0.0) as usize).min(cols);
    let x1 = ((boost.x + boost.width).max(0.0) as usize).min(cols);
    let y0 = (boost.y.max(0.0) as usize).min(rows);
    let y1 = ((boost.y + boost.height).max(0.0) as usize).min(rows);
    let weight = (boost.weight * 255.0) as f32;
    for row in y0..y1 {
        for col in x0..x1 {
            acc[[row, col]] += weight;
        }
    }
}
