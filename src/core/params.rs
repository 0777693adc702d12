use serde::{Deserialize, Serialize};

/// Default number of decimal places used when rendering temperatures.
pub const DEFAULT_PRECISION: usize = 2;

/// Largest precision honored when rendering; larger requests are clamped to it.
pub const MAX_PRECISION: usize = 100;

/// Conversion parameters suitable for presets and config files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionParams {
    /// Decimal places in rendered output
    pub precision: usize,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
        }
    }
}
