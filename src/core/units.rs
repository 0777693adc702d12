//! Unit label normalization.
//!
//! Labels are matched loosely: surrounding whitespace, case and punctuation are
//! ignored, and the degree sign is kept so that `°F` and `degF` both resolve.
use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Scale;

static UNIT_ALIASES: Lazy<HashMap<&'static str, Scale>> = Lazy::new(|| {
    HashMap::from([
        ("c", Scale::Celsius),
        ("cel", Scale::Celsius),
        ("cels", Scale::Celsius),
        ("celsius", Scale::Celsius),
        ("°c", Scale::Celsius),
        ("degc", Scale::Celsius),
        ("f", Scale::Fahrenheit),
        ("fahr", Scale::Fahrenheit),
        ("fahrenheit", Scale::Fahrenheit),
        ("°f", Scale::Fahrenheit),
        ("degf", Scale::Fahrenheit),
        ("k", Scale::Kelvin),
        ("kelvin", Scale::Kelvin),
        ("°k", Scale::Kelvin),
        ("r", Scale::Rankine),
        ("rankine", Scale::Rankine),
        ("°r", Scale::Rankine),
        ("degr", Scale::Rankine),
    ])
});

fn clean_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || *c == '°')
        .collect()
}

/// Map a free-form unit label onto its canonical `Scale`.
pub fn normalize_unit(raw: &str) -> Result<Scale> {
    let cleaned = clean_label(raw);
    if let Some(scale) = UNIT_ALIASES.get(cleaned.as_str()) {
        return Ok(*scale);
    }

    let tag = cleaned.replace('°', "").to_uppercase();
    match Scale::ALL.into_iter().find(|scale| scale.symbol() == tag) {
        Some(scale) => {
            debug!("Resolved unit {:?} by canonical tag {}", raw, tag);
            Ok(scale)
        }
        None => Err(Error::unrecognized_unit(raw.trim())),
    }
}
