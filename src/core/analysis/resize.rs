use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use ndarray::Array2;
use tracing::info;

use crate::core::analysis::buffer::{FeatureMap, PixelBuffer};
use crate::error::{Error, Result};

fn lanczos() -> ResizeOptions {
    ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3))
}

/// Resize one u8 feature channel to the target dimensions.
fn resize_channel(channel: &Array2<u8>, target_cols: usize, target_rows: usize) -> Result<Array2<u8>> {
    let (rows, cols) = channel.dim();

    let src_image = Image::from_vec_u8(
        cols as u32,
        rows as u32,
        channel.iter().copied().collect(),
        PixelType::U8,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, PixelType::U8);
    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &lanczos())
        .map_err(Error::external)?;

    Array2::from_shape_vec((target_rows, target_cols), dst_image.into_vec())
        .map_err(Error::external)
}

/// Shrink the source buffer to the target dimensions, preserving channel count.
pub(crate) fn resize_pixel_buffer(
    src: &PixelBuffer,
    target_cols: usize,
    target_rows: usize,
) -> Result<PixelBuffer> {
    let pixel_type = match src.channels() {
        3 => PixelType::U8x3,
        _ => PixelType::U8x4,
    };

    info!(
        "Resizing image {}x{} -> {}x{}",
        src.width(),
        src.height(),
        target_cols,
        target_rows
    );

    let src_image = Image::from_vec_u8(
        src.width() as u32,
        src.height() as u32,
        src.as_bytes().to_vec(),
        pixel_type,
    )
    .map_err(Error::external)?;
    let mut dst_image = Image::new(target_cols as u32, target_rows as u32, pixel_type);
    let mut resizer = Resizer::new();
    resizer
        .resize(&src_image, &mut dst_image, &lanczos())
        .map_err(Error::external)?;

    PixelBuffer::from_raw(target_cols, target_rows, src.channels(), dst_image.into_vec())
}

/// Downsampled copy of the feature map for scoring:
/// dims = (ceil(height/factor), ceil(width/factor)).
pub(crate) fn downsample_feature_map(map: &FeatureMap, factor: usize) -> Result<FeatureMap> {
    if factor == 1 {
        return Ok(map.clone());
    }
    let cols = map.width().div_ceil(factor);
    let rows = map.height().div_ceil(factor);
    Ok(FeatureMap::new(
        resize_channel(&map.skin, cols, rows)?,
        resize_channel(&map.detail, cols, rows)?,
        resize_channel(&map.saturation, cols, rows)?,
        resize_channel(&map.boost, cols, rows)?,
    ))
}
