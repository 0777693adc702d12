//! Conversion building blocks: unit normalization, absolute-zero bounds, the
//! Kelvin-pivot conversion and display formatting. The high-level `api` module
//! composes these for callers working with raw labels.
pub mod bounds;
pub mod convert;
pub mod display;
pub mod params;
pub mod units;
