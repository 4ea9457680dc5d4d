//! Aggregates the downsampled feature map under the importance field into a
//! per-candidate score.
use crate::core::analysis::buffer::FeatureMap;
use crate::core::analysis::candidates::Candidate;
use crate::core::analysis::importance::importance;
use crate::core::params::CropParams;
use crate::types::ScoreBreakdown;

/// Score one candidate against the downsampled map. The candidate's
/// coordinates are in analysis-resolution space; every downsampled cell is
/// sampled exactly once, with importance evaluated at the cell's
/// analysis-space origin. The total normalizes by crop area so larger crops
/// are not favored merely for covering more cells.
pub(crate) fn score(
    map: &FeatureMap,
    down_sample: usize,
    crop: &Candidate,
    params: &CropParams,
) -> ScoreBreakdown {
    let mut breakdown = ScoreBreakdown::default();

    for row in 0..map.height() {
        let y = (row * down_sample) as f64;
        for col in 0..map.width() {
            let x = (col * down_sample) as f64;
            let imp = importance(crop, x, y, params);

            let detail = map.detail[[row, col]] as f64 / 255.0;
            breakdown.detail += detail * imp;
            breakdown.skin +=
                map.skin[[row, col]] as f64 / 255.0 * (detail + params.skin_bias) * imp;
            breakdown.saturation += map.saturation[[row, col]] as f64 / 255.0
                * (detail + params.saturation_bias)
                * imp;
            breakdown.boost += map.boost[[row, col]] as f64 / 255.0 * imp;
        }
    }

    breakdown.total = (breakdown.detail * params.detail_weight
        + breakdown.skin * params.skin_weight
        + breakdown.saturation * params.saturation_weight
        + breakdown.boost * params.boost_weight)
        / (crop.width * crop.height);
    breakdown
}
