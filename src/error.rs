//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Provides semantic variants for input validation and crop-geometry failures;
//! resampling-layer errors are wrapped as `External`.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Degenerate input: {arg}={value}")]
    DegenerateInput { arg: &'static str, value: String },

    #[error(
        "No viable crop: {crop_width}x{crop_height} does not fit a {image_width}x{image_height} image at the configured scales"
    )]
    InvalidGeometry {
        image_width: usize,
        image_height: usize,
        crop_width: usize,
        crop_height: usize,
    },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("External error: {0}")]
    External(String),
}

impl Error {
    pub fn external<E: std::fmt::Display>(e: E) -> Self {
        Error::External(e.to_string())
    }
}
