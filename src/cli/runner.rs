use std::io;

use tracing::info;
use tracing_subscriber::EnvFilter;

use thermoconv::{ConversionParams, convert_labels, list_examples};

use super::args::CliArgs;
use super::errors::AppError;
use super::interactive::run_interactive;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn convert_once(
    value: f64,
    from_unit: &str,
    to_unit: &str,
    params: &ConversionParams,
    json: bool,
) -> Result<String, AppError> {
    let conversion = convert_labels(value, from_unit, to_unit, params)?;
    info!("Converted: {}", conversion);
    if json {
        Ok(serde_json::to_string_pretty(&conversion)?)
    } else {
        Ok(conversion.to_string())
    }
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    let params = ConversionParams {
        precision: args.precision,
    };

    if args.list {
        println!("{}", list_examples(params.precision));
        return Ok(());
    }

    match args.conversion() {
        Some((value, from_unit, to_unit)) => {
            let rendered = convert_once(value, from_unit, to_unit, &params, args.json)?;
            println!("{rendered}");
        }
        None => {
            info!("No conversion given, starting interactive mode");
            let stdin = io::stdin();
            run_interactive(stdin.lock(), io::stdout(), params.precision)?;
        }
    }

    Ok(())
}
