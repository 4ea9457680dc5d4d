//! Geometric importance of a pixel relative to a candidate crop: a radial
//! falloff from the crop center, a penalty band along the crop border, and
//! an optional rule-of-thirds bonus.
use crate::core::analysis::candidates::Candidate;
use crate::core::params::CropParams;

/// Periodic bump rewarding alignment with the thirds lines: 1 at v = 1/3,
/// 0 at v = 0 and v = 2/3, repeating with period 2.
pub(crate) fn thirds(v: f64) -> f64 {
    let x = ((v + 2.0 / 3.0).rem_euclid(2.0) * 0.5 - 0.5) * 16.0;
    (1.0 - x * x).max(0.0)
}

/// Importance of the analysis-space point (x, y) for `crop`. Points outside
/// the rectangle weigh the constant `outside_importance`; inside, the weight
/// depends only on the position relative to the crop, so equal-size crops
/// see identical fields.
pub(crate) fn importance(crop: &Candidate, x: f64, y: f64, params: &CropParams) -> f64 {
    if crop.x > x || x >= crop.x + crop.width || crop.y > y || y >= crop.y + crop.height {
        return params.outside_importance;
    }

    let nx = (x - crop.x) / crop.width;
    let ny = (y - crop.y) / crop.height;
    // 0 at the crop center, 1 at the border
    let px = (0.5 - nx).abs() * 2.0;
    let py = (0.5 - ny).abs() * 2.0;

    let dx = (px - 1.0 + params.edge_radius).max(0.0);
    let dy = (py - 1.0 + params.edge_radius).max(0.0);
    let d = (dx * dx + dy * dy) * params.edge_weight;
    let mut s = 1.41 - (px * px + py * py).sqrt();

    if params.rule_of_thirds {
        s += (s + d + 0.5).max(0.0) * 1.2 * (thirds(px) + thirds(py));
    }

    s + d
}
