//! High-level library API: convert using raw unit labels and render the fixed set of
//! example conversions. Prefer these entrypoints over the `core` modules when the
//! input comes straight from a user.
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::core::display::format;
use crate::core::params::ConversionParams;
use crate::core::units::normalize_unit;
use crate::error::Result;
use crate::types::Temperature;

/// Result of a conversion from raw labels
#[derive(Debug, Clone, Serialize)]
pub struct Conversion {
    pub source: Temperature,
    pub target: Temperature,
    pub precision: usize,
    pub source_text: String,
    pub target_text: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.source_text, self.target_text)
    }
}

/// Normalize both labels, validate the source and convert it.
pub fn convert_labels(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    params: &ConversionParams,
) -> Result<Conversion> {
    let from = normalize_unit(from_unit)?;
    let to = normalize_unit(to_unit)?;
    debug!("Converting {} from {} to {}", value, from.name(), to.name());

    let source = Temperature::new(value, from)?;
    let target = source.to(to)?;
    Ok(Conversion {
        source,
        target,
        precision: params.precision,
        source_text: format(source.value(), from, params.precision),
        target_text: format(target.value(), to, params.precision),
    })
}

/// Example conversions shown by `--list`: (label, value, from, to)
pub const EXAMPLES: [(&str, f64, &str, &str); 6] = [
    ("100 C F", 100.0, "C", "F"),
    ("0 C K", 0.0, "C", "K"),
    ("32 F C", 32.0, "F", "C"),
    ("451 F K", 451.0, "F", "K"),
    ("300 K C", 300.0, "K", "C"),
    ("540 R C", 540.0, "R", "C"),
];

fn render_examples(examples: &[(&str, f64, &str, &str)], precision: usize) -> String {
    let params = ConversionParams { precision };
    let mut lines = vec!["Examples:".to_string()];
    for (label, value, from, to) in examples {
        match convert_labels(*value, from, to, &params) {
            Ok(conversion) => lines.push(format!("  {:<10} -> {}", label, conversion.target_text)),
            Err(e) => lines.push(format!("  {:<10} -> error: {}", label, e)),
        }
    }
    lines.join("\n")
}

/// Render `EXAMPLES` one per line under an `Examples:` header.
pub fn list_examples(precision: usize) -> String {
    render_examples(&EXAMPLES, precision)
}
