//! Core building blocks: the immutable crop-selection parameters and the
//! analysis pipeline (feature channels, boost compositing, candidate
//! enumeration, importance weighting, scoring, selection). These are
//! internal primitives consumed by the high-level `api` module.
pub mod analysis;
pub mod params;
