use crate::core::params::MAX_PRECISION;
use crate::types::Scale;

/// Render `value` rounded to `precision` decimals followed by the scale suffix,
/// e.g. `100.00 °F` or `300 K`. Precision is clamped to `MAX_PRECISION`.
pub fn format(value: f64, scale: Scale, precision: usize) -> String {
    let precision = precision.min(MAX_PRECISION);
    format!("{:.*} {}", precision, value, scale.suffix())
}
