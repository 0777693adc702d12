//! Scale-to-scale conversion. Every conversion goes through Kelvin, so each scale
//! only needs a formula to and from the pivot.
use tracing::debug;

use crate::core::bounds::check_above_absolute_zero;
use crate::error::Result;
use crate::types::Scale;

/// Convert `value` from one scale to another.
///
/// The source value is checked against absolute zero before any arithmetic, so
/// rounding in the conversion cannot hide an impossible input. Converting a scale
/// to itself returns `value` untouched.
pub fn convert(value: f64, from: Scale, to: Scale) -> Result<f64> {
    check_above_absolute_zero(value, from)?;
    if from == to {
        return Ok(value);
    }

    let kelvin = from.convert_to_kelvin(value);
    let out = to.convert_from_kelvin(kelvin);
    debug!("{} {} -> {} K -> {} {}", value, from, kelvin, out, to);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_known_fixed_points() {
        assert_eq!(convert(0.0, Scale::Celsius, Scale::Fahrenheit).unwrap(), 32.0);
        assert_eq!(convert(32.0, Scale::Fahrenheit, Scale::Celsius).unwrap(), 0.0);
        assert_abs_diff_eq!(
            convert(0.0, Scale::Celsius, Scale::Kelvin).unwrap(),
            273.15,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert(300.0, Scale::Kelvin, Scale::Celsius).unwrap(),
            26.85,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert(540.0, Scale::Rankine, Scale::Celsius).unwrap(),
            26.85,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            convert(-40.0, Scale::Celsius, Scale::Fahrenheit).unwrap(),
            -40.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_identity_is_exact() {
        for scale in Scale::ALL {
            for value in [0.1, 1.0 / 3.0, 451.0, 1e12] {
                assert_eq!(convert(value, scale, scale).unwrap(), value);
            }
        }
    }

    #[test]
    fn test_round_trip() {
        for a in Scale::ALL {
            for b in Scale::ALL {
                for value in [0.0, 12.5, 98.6, 300.0, 5778.0] {
                    let there = convert(value, a, b).unwrap();
                    let back = convert(there, b, a).unwrap();
                    assert_abs_diff_eq!(back, value, epsilon = 1e-9);
                }
            }
        }
    }

    #[test]
    fn test_rejects_below_absolute_zero() {
        assert!(matches!(
            convert(-1.0, Scale::Kelvin, Scale::Celsius),
            Err(Error::BelowAbsoluteZero { .. })
        ));
        assert!(matches!(
            convert(-300.0, Scale::Celsius, Scale::Fahrenheit),
            Err(Error::BelowAbsoluteZero { .. })
        ));
        // Identity still validates the source.
        assert!(convert(-1.0, Scale::Rankine, Scale::Rankine).is_err());
    }
}
