use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::BoostRegion;

/// Crop-selection parameters suitable for config files and GUI presets.
///
/// Holds every weight and threshold of the scoring heuristic plus the
/// search-grid settings. An instance is passed by reference into each
/// operation and never mutated; missing fields deserialize to the defaults,
/// so partial JSON presets are valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropParams {
    pub detail_weight: f64,
    /// Width of the border band (relative to the half-crop) penalized by `edge_weight`
    pub edge_radius: f64,
    /// Negative weight applied to mass inside the border band
    pub edge_weight: f64,
    /// Constant importance of pixels outside the candidate rectangle
    pub outside_importance: f64,
    pub rule_of_thirds: bool,
    pub saturation_bias: f64,
    pub saturation_brightness_max: f64,
    pub saturation_brightness_min: f64,
    pub saturation_threshold: f64,
    pub saturation_weight: f64,
    pub boost_weight: f64,
    /// Downsample factor between the analysis feature map and the scoring map
    pub score_down_sample: usize,
    pub skin_bias: f64,
    pub skin_brightness_max: f64,
    pub skin_brightness_min: f64,
    /// Reference skin color as a unit-normalized RGB direction
    pub skin_color: [f64; 3],
    pub skin_threshold: f64,
    pub skin_weight: f64,
    /// If true, shrink the working image before the search and rescale results back
    pub prescale: bool,
    pub max_scale: f64,
    pub min_scale: f64,
    pub scale_step: f64,
    /// Candidate grid step in pixels
    pub step: usize,
    /// Externally detected regions to bias the crop toward
    pub boosts: Vec<BoostRegion>,
}

impl Default for CropParams {
    fn default() -> Self {
        Self {
            detail_weight: 0.2,
            edge_radius: 0.4,
            edge_weight: -20.0,
            outside_importance: -0.5,
            rule_of_thirds: true,
            saturation_bias: 0.2,
            saturation_brightness_max: 0.9,
            saturation_brightness_min: 0.05,
            saturation_threshold: 0.4,
            saturation_weight: 0.3,
            boost_weight: 100.0,
            score_down_sample: 8,
            skin_bias: 0.01,
            skin_brightness_max: 1.0,
            skin_brightness_min: 0.2,
            skin_color: [0.78, 0.57, 0.44],
            skin_threshold: 0.8,
            skin_weight: 1.8,
            prescale: true,
            max_scale: 1.0,
            min_scale: 0.9,
            scale_step: 0.1,
            step: 8,
            boosts: Vec::new(),
        }
    }
}

impl CropParams {
    /// Parse parameters from a JSON preset. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::external)
    }

    /// Serialize parameters to a JSON preset.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::external)
    }

    /// Validate the scale grid and sampling parameters before a search.
    pub(crate) fn validate(&self) -> Result<()> {
        if !(self.max_scale > 0.0) {
            return Err(Error::InvalidArgument {
                arg: "max_scale",
                value: self.max_scale.to_string(),
            });
        }
        if !(self.min_scale > 0.0) {
            return Err(Error::InvalidArgument {
                arg: "min_scale",
                value: self.min_scale.to_string(),
            });
        }
        if self.min_scale > self.max_scale {
            return Err(Error::InvalidArgument {
                arg: "min_scale",
                value: format!("{} (exceeds max_scale {})", self.min_scale, self.max_scale),
            });
        }
        // the grid is quantized to 1/100, so anything below 0.005 rounds to zero
        if (self.scale_step * 100.0).round() < 1.0 {
            return Err(Error::InvalidArgument {
                arg: "scale_step",
                value: self.scale_step.to_string(),
            });
        }
        if self.step == 0 {
            return Err(Error::InvalidArgument {
                arg: "step",
                value: self.step.to_string(),
            });
        }
        if self.score_down_sample == 0 {
            return Err(Error::InvalidArgument {
                arg: "score_down_sample",
                value: self.score_down_sample.to_string(),
            });
        }
        Ok(())
    }
}
