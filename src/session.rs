//! Interactive session orchestration
//!
//! `run` drives the whole pipeline against any `BufRead` + `Write` pair:
//! welcome banner, two prompts, computation, classification, rendering.
//! One session produces one reading; looping for multiple readings is the
//! caller's business (the binary does not).

use std::io::{BufRead, Write};

use crate::bmi::Reading;
use crate::error::{BmiError, BmiResult};
use crate::input::{read_measurement, Field};
use crate::report::{render_json, render_text};

/// Knobs the binary sets from CLI flags and terminal detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    /// Emit a single JSON line instead of the human transcript.
    pub json: bool,
    /// Re-prompt on malformed or out-of-range values instead of failing.
    /// Only sensible when a human is on the other end of `input`.
    pub retry: bool,
}

/// Run one complete session: prompt, read, compute, classify, render.
///
/// Returns the evaluated reading so the caller can add diagnostics. The
/// result lines are only written after both measurements validated; a
/// failed session produces no partial result output.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: &SessionOptions,
) -> BmiResult<Reading> {
    if !options.json {
        writeln!(output, "Welcome to the BMI Calculator!")?;
    }

    let weight = prompt_measurement(input, output, Field::Weight, options)?;
    let height = prompt_measurement(input, output, Field::Height, options)?;

    let reading = Reading::new(weight, height);
    if options.json {
        render_json(output, &reading)?;
    } else {
        render_text(output, &reading)?;
    }
    Ok(reading)
}

/// Prompt for one measurement, optionally looping until a valid value.
///
/// EOF and I/O errors always propagate; retrying them would spin forever on
/// a closed stream.
fn prompt_measurement<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    field: Field,
    options: &SessionOptions,
) -> BmiResult<f64> {
    loop {
        if !options.json {
            write!(output, "{}", field.prompt())?;
            output.flush()?;
        }
        match read_measurement(input, field) {
            Ok(value) => return Ok(value),
            Err(err @ (BmiError::InvalidNumber { .. } | BmiError::OutOfRange { .. }))
                if options.retry =>
            {
                writeln!(output, "✗ {err}. Try again.")?;
            }
            Err(err) => return Err(err),
        }
    }
}
