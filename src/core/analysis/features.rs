//! Per-pixel feature channels: Laplacian edge/detail over luminance,
//! HSL-consistent saturation, and skin likelihood as distance to a
//! reference color direction. Each channel is masked by a threshold plus a
//! brightness window and rescaled linearly to [0, 255].
use ndarray::Array2;

use crate::core::analysis::buffer::PixelBuffer;
use crate::core::params::CropParams;

/// Rec. 709 luma coefficients, zero offset.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Discrete Laplacian driving the edge/detail channel.
const LAPLACIAN: [[f32; 3]; 3] = [
    [0.0, -1.0, 0.0],
    [-1.0, 4.0, -1.0],
    [0.0, -1.0, 0.0],
];

/// Luminance of every pixel.
pub(crate) fn luminance(image: &PixelBuffer) -> Array2<f32> {
    Array2::from_shape_fn((image.height(), image.width()), |(row, col)| {
        let (r, g, b) = image.rgb(row, col);
        LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32
    })
}

/// Edge/detail channel: 3x3 Laplacian over luminance, clipped to [0, 255].
/// Border samples clamp to the nearest interior pixel.
pub(crate) fn detect_edges(lum: &Array2<f32>) -> Array2<u8> {
    let (rows, cols) = lum.dim();
    Array2::from_shape_fn((rows, cols), |(row, col)| {
        let mut acc = 0.0f32;
        for (dy, kernel_row) in LAPLACIAN.iter().enumerate() {
            for (dx, &k) in kernel_row.iter().enumerate() {
                if k == 0.0 {
                    continue;
                }
                let sample_row = (row + dy).saturating_sub(1).min(rows - 1);
                let sample_col = (col + dx).saturating_sub(1).min(cols - 1);
                acc += k * lum[[sample_row, sample_col]];
            }
        }
        acc.clamp(0.0, 255.0) as u8
    })
}

/// HSL-consistent saturation of one pixel, in [0, 1].
fn pixel_saturation(r: u8, g: u8, b: u8) -> f32 {
    let max = r.max(g).max(b) as f32;
    let min = r.min(g).min(b) as f32;
    if max == min {
        return 0.0;
    }
    let sum = (max + min) / 255.0;
    let diff = (max - min) / 255.0;
    let denom = if sum > 1.0 { 2.0 - diff } else { sum };
    diff / denom
}

/// Threshold + brightness-window mask shared by the saturation and skin
/// channels; surviving values rescale linearly from the threshold to 255.
fn mask_and_rescale(value: f32, threshold: f32, lum: f32, bright_min: f32, bright_max: f32) -> u8 {
    if value <= threshold || lum < bright_min * 255.0 || lum > bright_max * 255.0 {
        return 0;
    }
    ((value - threshold) / (1.0 - threshold) * 255.0).clamp(0.0, 255.0) as u8
}

/// Saturation channel.
pub(crate) fn detect_saturation(
    image: &PixelBuffer,
    lum: &Array2<f32>,
    params: &CropParams,
) -> Array2<u8> {
    let threshold = params.saturation_threshold as f32;
    let bright_min = params.saturation_brightness_min as f32;
    let bright_max = params.saturation_brightness_max as f32;
    Array2::from_shape_fn(lum.dim(), |(row, col)| {
        let (r, g, b) = image.rgb(row, col);
        mask_and_rescale(
            pixel_saturation(r, g, b),
            threshold,
            lum[[row, col]],
            bright_min,
            bright_max,
        )
    })
}

/// Skin channel: likelihood = 1 - distance between the unit-normalized pixel
/// color and the reference skin direction. A near-zero color vector falls
/// back to the maximal displacement (likelihood well below any threshold).
pub(crate) fn detect_skin(
    image: &PixelBuffer,
    lum: &Array2<f32>,
    params: &CropParams,
) -> Array2<u8> {
    let [skin_r, skin_g, skin_b] = params.skin_color.map(|c| c as f32);
    let threshold = params.skin_threshold as f32;
    let bright_min = params.skin_brightness_min as f32;
    let bright_max = params.skin_brightness_max as f32;
    Array2::from_shape_fn(lum.dim(), |(row, col)| {
        let (r, g, b) = image.rgb(row, col);
        let (rf, gf, bf) = (r as f32, g as f32, b as f32);
        let mag = (rf * rf + gf * gf + bf * bf).sqrt();
        let (rd, gd, bd) = if mag < 1e-6 {
            (-skin_r, -skin_g, -skin_b)
        } else {
            (rf / mag - skin_r, gf / mag - skin_g, bf / mag - skin_b)
        };
        let likelihood = 1.0 - (rd * rd + gd * gd + bd * bd).sqrt();
        mask_and_rescale(likelihood, threshold, lum[[row, col]], bright_min, bright_max)
    })
}
