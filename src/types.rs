//! Shared types used across thermoconv.
//! `Scale` is the closed set of supported temperature scales; `Temperature` pairs a
//! value with the scale it is expressed in.
use std::fmt;
use std::str::FromStr;

use approx::AbsDiffEq;
use serde::{Deserialize, Serialize};

use crate::core::bounds::check_above_absolute_zero;
use crate::core::convert::convert;
use crate::core::display::format;
use crate::core::params::DEFAULT_PRECISION;
use crate::core::units::normalize_unit;
use crate::error::{Error, Result};

/// Offset between the Celsius and Kelvin zero points.
const CELSIUS_OFFSET: f64 = 273.15;

#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Scale {
    Celsius,
    Fahrenheit,
    Kelvin,
    Rankine,
}

impl Scale {
    pub const ALL: [Scale; 4] = [
        Scale::Celsius,
        Scale::Fahrenheit,
        Scale::Kelvin,
        Scale::Rankine,
    ];

    /// Canonical single-letter tag.
    pub fn symbol(self) -> &'static str {
        match self {
            Scale::Celsius => "C",
            Scale::Fahrenheit => "F",
            Scale::Kelvin => "K",
            Scale::Rankine => "R",
        }
    }

    /// Display suffix. Kelvin is written without a degree mark.
    pub fn suffix(self) -> &'static str {
        match self {
            Scale::Celsius => "°C",
            Scale::Fahrenheit => "°F",
            Scale::Kelvin => "K",
            Scale::Rankine => "°R",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Scale::Celsius => "celsius",
            Scale::Fahrenheit => "fahrenheit",
            Scale::Kelvin => "kelvin",
            Scale::Rankine => "rankine",
        }
    }

    /// Absolute zero expressed in this scale's own units.
    pub fn absolute_zero(self) -> f64 {
        match self {
            Scale::Celsius => -CELSIUS_OFFSET,
            Scale::Fahrenheit => -459.67,
            Scale::Kelvin | Scale::Rankine => 0.0,
        }
    }

    pub fn convert_to_kelvin(self, degrees_in: f64) -> f64 {
        match self {
            Scale::Celsius => degrees_in + CELSIUS_OFFSET,
            Scale::Fahrenheit => (degrees_in - 32.0) * 5.0 / 9.0 + CELSIUS_OFFSET,
            Scale::Kelvin => degrees_in,
            Scale::Rankine => degrees_in * 5.0 / 9.0,
        }
    }

    pub fn convert_from_kelvin(self, degrees_k: f64) -> f64 {
        match self {
            Scale::Celsius => degrees_k - CELSIUS_OFFSET,
            Scale::Fahrenheit => (degrees_k - CELSIUS_OFFSET) * 9.0 / 5.0 + 32.0,
            Scale::Kelvin => degrees_k,
            Scale::Rankine => degrees_k * 9.0 / 5.0,
        }
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Scale {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        normalize_unit(s)
    }
}

/// A value tagged with its scale. Construction rejects values below absolute zero,
/// including deserialization.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTemperature")]
pub struct Temperature {
    value: f64,
    scale: Scale,
}

#[derive(Deserialize)]
struct RawTemperature {
    value: f64,
    scale: Scale,
}

impl TryFrom<RawTemperature> for Temperature {
    type Error = Error;

    fn try_from(raw: RawTemperature) -> Result<Self> {
        Temperature::new(raw.value, raw.scale)
    }
}

impl Temperature {
    pub fn new(value: f64, scale: Scale) -> Result<Self> {
        check_above_absolute_zero(value, scale)?;
        Ok(Self { value, scale })
    }

    pub fn value(self) -> f64 {
        self.value
    }

    pub fn scale(self) -> Scale {
        self.scale
    }

    pub fn kelvin(self) -> f64 {
        self.scale.convert_to_kelvin(self.value)
    }

    /// Re-express this temperature in another scale.
    pub fn to(self, scale: Scale) -> Result<Self> {
        Ok(Self {
            value: convert(self.value, self.scale, scale)?,
            scale,
        })
    }
}

impl fmt::Display for Temperature {
    /// Honors `{:.N}`; two decimals otherwise.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(DEFAULT_PRECISION);
        f.write_str(&format(self.value, self.scale, precision))
    }
}

impl AbsDiffEq for Temperature {
    type Epsilon = f64;

    fn default_epsilon() -> Self::Epsilon {
        f64::default_epsilon()
    }

    /// Compares in `self`'s scale.
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        let a = self.value;
        let b = self.scale.convert_from_kelvin(other.kelvin());
        a.abs_diff_eq(&b, epsilon)
    }
}
