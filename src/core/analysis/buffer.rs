//! 2-D grid abstractions for the analysis pass: the normalized source
//! `PixelBuffer` and the four-channel `FeatureMap`. All pixel access goes
//! through bounds-checked (row, col) indexing; no offset arithmetic leaks
//! out of this module.
use ndarray::{Array2, Array3};

use crate::error::{Error, Result};

/// Normalized source image: interleaved RGB(A) intensities in [0, 255],
/// already orientation-corrected and color-converted by the caller.
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Build a buffer from interleaved row-major bytes with 3 or 4 channels.
    pub fn from_raw(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::DegenerateInput {
                arg: "dimensions",
                value: format!("{width}x{height}"),
            });
        }
        if channels != 3 && channels != 4 {
            return Err(Error::DegenerateInput {
                arg: "channels",
                value: channels.to_string(),
            });
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(Error::DegenerateInput {
                arg: "data_len",
                value: format!("{} (expected {expected})", data.len()),
            });
        }
        let data =
            Array3::from_shape_vec((height, width, channels), data).map_err(Error::external)?;
        Ok(Self { data })
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    pub fn channels(&self) -> usize {
        self.data.dim().2
    }

    /// RGB triple at (row, col); any alpha channel is ignored.
    pub fn rgb(&self, row: usize, col: usize) -> (u8, u8, u8) {
        (
            self.data[[row, col, 0]],
            self.data[[row, col, 1]],
            self.data[[row, col, 2]],
        )
    }

    /// Interleaved bytes in row-major order.
    pub(crate) fn as_bytes(&self) -> &[u8] {
        // built via from_shape_vec, so the array is always standard layout
        self.data.as_slice().expect("contiguous pixel data")
    }
}

/// Composite per-pixel feature channels driving the score, each
/// independently scaled to [0, 255].
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMap {
    pub skin: Array2<u8>,
    pub detail: Array2<u8>,
    pub saturation: Array2<u8>,
    pub boost: Array2<u8>,
}

impl FeatureMap {
    pub(crate) fn new(
        skin: Array2<u8>,
        detail: Array2<u8>,
        saturation: Array2<u8>,
        boost: Array2<u8>,
    ) -> Self {
        debug_assert_eq!(skin.dim(), detail.dim());
        debug_assert_eq!(skin.dim(), saturation.dim());
        debug_assert_eq!(skin.dim(), boost.dim());
        Self {
            skin,
            detail,
            saturation,
            boost,
        }
    }

    pub fn width(&self) -> usize {
        self.skin.dim().1
    }

    pub fn height(&self) -> usize {
        self.skin.dim().0
    }
}
