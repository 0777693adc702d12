//! Crate-level error type and `Result` alias.
//! Only two things can go wrong in a conversion: the unit label is not one we know,
//! or the source value sits below absolute zero for its scale.
use thiserror::Error;

use crate::types::Scale;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error("Unrecognized unit '{input}' (try C, F, K, or R).")]
    UnrecognizedUnit { input: String },

    #[error(
        "Value {value} {scale} is below absolute zero ({floor} {scale}).",
        floor = .scale.absolute_zero()
    )]
    BelowAbsoluteZero { value: f64, scale: Scale },
}

impl Error {
    pub fn unrecognized_unit<S: Into<String>>(input: S) -> Self {
        Error::UnrecognizedUnit {
            input: input.into(),
        }
    }
}
