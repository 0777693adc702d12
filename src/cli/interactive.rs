//! Read-prompt loop used when no conversion was given on the command line.
use std::io::{self, BufRead, Write};

use tracing::debug;

use thermoconv::{ConversionParams, MAX_PRECISION, convert_labels};

const QUIT: &str = "q";

enum Reply {
    Quit,
    Text(String),
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, text: &str) -> io::Result<Reply> {
    write!(output, "{text}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        // EOF behaves like quitting.
        writeln!(output)?;
        return Ok(Reply::Quit);
    }
    let line = line.trim();
    if line.eq_ignore_ascii_case(QUIT) {
        Ok(Reply::Quit)
    } else {
        Ok(Reply::Text(line.to_string()))
    }
}

/// Run the prompt loop until `q` is entered at any prompt or input ends.
pub fn run_interactive<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
    default_precision: usize,
) -> io::Result<()> {
    writeln!(output, "Unified Temperature Converter (C, F, K, R)")?;
    writeln!(
        output,
        "Type 'q' at any prompt to quit. Press Enter to keep defaults.\n"
    )?;
    let mut params = ConversionParams {
        precision: default_precision,
    };

    loop {
        let raw_value = match prompt(&mut input, &mut output, "Enter value (e.g. 25): ")? {
            Reply::Quit => break,
            Reply::Text(s) => s,
        };
        if raw_value.is_empty() {
            writeln!(output, "Please enter a number.")?;
            continue;
        }
        let value: f64 = match raw_value.parse() {
            Ok(v) => v,
            Err(_) => {
                writeln!(output, "That wasn't a valid number. Try again.")?;
                continue;
            }
        };

        let from_unit = match prompt(
            &mut input,
            &mut output,
            "From unit [C/F/K/R or words like 'celsius'] : ",
        )? {
            Reply::Quit => break,
            Reply::Text(s) => s,
        };
        let to_unit = match prompt(&mut input, &mut output, "To unit [C/F/K/R] : ")? {
            Reply::Quit => break,
            Reply::Text(s) => s,
        };

        let precision_prompt = format!("Precision (current {}) : ", params.precision);
        match prompt(&mut input, &mut output, &precision_prompt)? {
            Reply::Quit => break,
            Reply::Text(s) if s.is_empty() => {}
            Reply::Text(s) => match s.parse::<i64>() {
                Ok(p) if p > MAX_PRECISION as i64 => writeln!(
                    output,
                    "Precision must be at most {MAX_PRECISION}; keeping previous value."
                )?,
                Ok(p) => params.precision = p.max(0) as usize,
                Err(_) => writeln!(
                    output,
                    "Precision must be an integer; keeping previous value."
                )?,
            },
        }

        match convert_labels(value, &from_unit, &to_unit, &params) {
            Ok(conversion) => writeln!(output, "=> {conversion}\n")?,
            Err(e) => {
                debug!("Interactive conversion failed: {:?}", e);
                writeln!(output, "Error: {e}\n")?
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str, precision: usize) -> String {
        let mut out = Vec::new();
        run_interactive(script.as_bytes(), &mut out, precision).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_single_conversion_then_quit() {
        let out = session("100\nC\nF\n\nq\n", 2);
        assert!(out.contains("=> 100.00 °C = 212.00 °F"));
    }

    #[test]
    fn test_precision_carries_over() {
        let out = session("0\nC\nK\n0\n1\nK\nK\n\nq\n", 2);
        assert!(out.contains("=> 0 °C = 273 K"));
        assert!(out.contains("Precision (current 0) : "));
        assert!(out.contains("=> 1 K = 1 K"));
    }

    #[test]
    fn test_negative_precision_clamps_to_zero() {
        let out = session("12.6\nC\nC\n-3\nq\n", 2);
        assert!(out.contains("=> 13 °C = 13 °C"));
    }

    #[test]
    fn test_oversized_precision_keeps_previous() {
        let out = session("1\nC\nF\n70000\nq\n", 2);
        assert!(out.contains("Precision must be at most 100; keeping previous value."));
        assert!(out.contains("=> 1.00 °C = 33.80 °F"));
    }

    #[test]
    fn test_bad_inputs_reprompt() {
        let out = session("\nwarm\n5\nC\nC\nmany\nq\n", 2);
        assert!(out.contains("Please enter a number."));
        assert!(out.contains("That wasn't a valid number. Try again."));
        assert!(out.contains("Precision must be an integer; keeping previous value."));
        assert!(out.contains("=> 5.00 °C = 5.00 °C"));
    }

    #[test]
    fn test_errors_do_not_end_session() {
        let out = session("-1\nK\nC\n\n10\nxyz\nC\n\n20\nC\nF\n\nQ\n", 2);
        assert!(out.contains("Error: Value -1 K is below absolute zero (0 K)."));
        assert!(out.contains("Error: Unrecognized unit 'xyz' (try C, F, K, or R)."));
        assert!(out.contains("=> 20.00 °C = 68.00 °F"));
    }

    #[test]
    fn test_quit_at_unit_prompt_and_eof() {
        let out = session("25\nq\n", 2);
        assert!(!out.contains("=>"));
        let out = session("25\nC\n", 2);
        assert!(!out.contains("=>"));
    }
}
