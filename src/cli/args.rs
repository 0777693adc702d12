use clap::Parser;

use thermoconv::{DEFAULT_PRECISION, MAX_PRECISION};

#[derive(Parser, Debug)]
#[command(
    name = "thermoconv",
    version,
    about = "Convert temperatures between Celsius (C), Fahrenheit (F), Kelvin (K) and Rankine (R)",
    allow_negative_numbers = true
)]
pub struct CliArgs {
    /// Numeric temperature; omit all positionals for interactive mode
    pub value: Option<f64>,

    /// Source unit (C/F/K/R or words like 'celsius')
    pub from_unit: Option<String>,

    /// Target unit (C/F/K/R or words like 'kelvin')
    pub to_unit: Option<String>,

    /// Decimal places in the output
    #[arg(
        short,
        long,
        env = "THERMOCONV_PRECISION",
        default_value_t = DEFAULT_PRECISION,
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(..=MAX_PRECISION as u64)
    )]
    pub precision: usize,

    /// Show example conversions and exit
    #[arg(long, default_value_t = false)]
    pub list: bool,

    /// Print the conversion as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// All three positionals, if the user supplied them.
    pub fn conversion(&self) -> Option<(f64, &str, &str)> {
        match (self.value, self.from_unit.as_deref(), self.to_unit.as_deref()) {
            (Some(value), Some(from), Some(to)) => Some((value, from, to)),
            _ => None,
        }
    }
}
