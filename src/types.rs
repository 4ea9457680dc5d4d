//! Shared plain-data types used across CROPRO.
//! Includes `BoostRegion`, `ScoreBreakdown`, and `ScoredCrop`.
use serde::{Deserialize, Serialize};

/// Externally supplied weighted rectangle biasing crop selection toward a
/// region, e.g. a face reported by a detector. Coordinates live in the same
/// space as the input image; overlapping regions accumulate additively.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostRegion {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
}

impl BoostRegion {
    pub fn new(x: f64, y: f64, width: f64, height: f64, weight: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            weight,
        }
    }
}

/// Per-channel score components accumulated for one candidate crop.
/// `total` is the weighted channel sum normalized by crop area.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub detail: f64,
    pub saturation: f64,
    pub skin: f64,
    pub boost: f64,
    pub total: f64,
}

/// A scored crop rectangle, translated back to original image coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredCrop {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub score: ScoreBreakdown,
}
