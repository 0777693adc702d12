use crate::error::{Error, Result};
use crate::types::Scale;

/// Slack allowed below absolute zero to absorb floating-point noise.
pub const ABSOLUTE_ZERO_TOLERANCE: f64 = 1e-9;

/// Reject values below `scale`'s absolute zero. NaN is not below anything and passes.
pub fn check_above_absolute_zero(value: f64, scale: Scale) -> Result<()> {
    if value < scale.absolute_zero() - ABSOLUTE_ZERO_TOLERANCE {
        Err(Error::BelowAbsoluteZero { value, scale })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_zero_itself_is_valid() {
        for scale in Scale::ALL {
            assert!(check_above_absolute_zero(scale.absolute_zero(), scale).is_ok());
        }
    }

    #[test]
    fn test_tolerance_absorbs_noise() {
        assert!(check_above_absolute_zero(-1e-12, Scale::Kelvin).is_ok());
        assert!(check_above_absolute_zero(-273.15 - 1e-10, Scale::Celsius).is_ok());
        assert!(check_above_absolute_zero(-1e-6, Scale::Kelvin).is_err());
    }

    #[test]
    fn test_below_absolute_zero_message() {
        let err = check_above_absolute_zero(-500.0, Scale::Fahrenheit).unwrap_err();
        assert_eq!(
            err,
            Error::BelowAbsoluteZero {
                value: -500.0,
                scale: Scale::Fahrenheit
            }
        );
        assert_eq!(
            err.to_string(),
            "Value -500 F is below absolute zero (-459.67 F)."
        );
    }

    #[test]
    fn test_nan_is_not_below_absolute_zero() {
        assert!(check_above_absolute_zero(f64::NAN, Scale::Celsius).is_ok());
        let out = crate::core::convert::convert(f64::NAN, Scale::Celsius, Scale::Fahrenheit);
        assert!(out.unwrap().is_nan());
    }
}
