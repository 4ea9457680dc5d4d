//! Conversions from `image` crate types into [`PixelBuffer`].
//!
//! Decoding, EXIF-orientation correction, and color-mode normalization stay
//! the caller's responsibility; these helpers only reinterpret an
//! already-decoded 8-bit RGB(A) image.
use image::{DynamicImage, RgbImage, RgbaImage};

use crate::core::analysis::buffer::PixelBuffer;
use crate::error::Result;

/// Build a pixel buffer from an 8-bit RGB image.
pub fn from_rgb_image(image: &RgbImage) -> Result<PixelBuffer> {
    PixelBuffer::from_raw(
        image.width() as usize,
        image.height() as usize,
        3,
        image.as_raw().clone(),
    )
}

/// Build a pixel buffer from an 8-bit RGBA image. The alpha channel is
/// carried but ignored by the analysis.
pub fn from_rgba_image(image: &RgbaImage) -> Result<PixelBuffer> {
    PixelBuffer::from_raw(
        image.width() as usize,
        image.height() as usize,
        4,
        image.as_raw().clone(),
    )
}

/// Build a pixel buffer from any decoded image, converting to RGB8.
pub fn from_dynamic_image(image: &DynamicImage) -> Result<PixelBuffer> {
    from_rgb_image(&image.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_image_round_trips_pixels() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(1, 0, image::Rgb([10, 20, 30]));
        let buf = from_rgb_image(&img).unwrap();
        assert_eq!((buf.width(), buf.height(), buf.channels()), (2, 2, 3));
        assert_eq!(buf.rgb(0, 1), (10, 20, 30));
    }

    #[test]
    fn dynamic_image_converts_to_rgb() {
        let img = DynamicImage::ImageLuma8(image::GrayImage::from_pixel(3, 2, image::Luma([77])));
        let buf = from_dynamic_image(&img).unwrap();
        assert_eq!(buf.channels(), 3);
        assert_eq!(buf.rgb(1, 2), (77, 77, 77));
    }
}
