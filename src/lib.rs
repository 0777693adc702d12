#![doc = r#"
thermoconv — temperature conversion between Celsius, Fahrenheit, Kelvin and Rankine.

This crate normalizes free-form unit labels, rejects values below absolute zero, converts
through Kelvin, and renders results with a chosen number of decimals. It powers the
`thermoconv` CLI and can be embedded in your own Rust applications.

Quick start
-----------
```rust
use thermoconv::{convert, format, normalize_unit, Scale};

fn main() -> thermoconv::Result<()> {
    let from = normalize_unit("celsius")?;
    let to = normalize_unit("°F")?;
    let out = convert(100.0, from, to)?;
    assert_eq!(format(out, to, 2), "212.00 °F");
    assert_eq!(to, Scale::Fahrenheit);
    Ok(())
}
```

From raw labels in one call
---------------------------
```rust
use thermoconv::{convert_labels, ConversionParams};

fn main() -> thermoconv::Result<()> {
    let conversion = convert_labels(300.0, "K", "C", &ConversionParams::default())?;
    assert_eq!(conversion.to_string(), "300.00 K = 26.85 °C");
    Ok(())
}
```

Error handling
--------------
All fallible functions return `thermoconv::Result<T>`; match on `thermoconv::Error`:

```rust
use thermoconv::{convert, Error, Scale};

match convert(-1.0, Scale::Kelvin, Scale::Celsius) {
    Err(Error::BelowAbsoluteZero { value, scale }) => eprintln!("{value} {scale} is impossible"),
    Err(other) => eprintln!("Other error: {other}"),
    Ok(v) => println!("{v}"),
}
```

Useful modules
--------------
- [`api`] — label-based conversion and the example listing.
- [`core`] — normalization, bounds, conversion and formatting primitives.
- [`types`] — `Scale` and `Temperature`.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod types;

// Types
pub use crate::core::params::{ConversionParams, DEFAULT_PRECISION, MAX_PRECISION};
pub use error::{Error, Result};
pub use types::{Scale, Temperature};

// Conversion primitives
pub use crate::core::bounds::{ABSOLUTE_ZERO_TOLERANCE, check_above_absolute_zero};
pub use crate::core::convert::convert;
pub use crate::core::display::format;
pub use crate::core::units::normalize_unit;

// High-level API re-exports
pub use api::{Conversion, EXAMPLES, convert_labels, list_examples};
