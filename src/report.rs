//! Result rendering
//!
//! Two output modes, selected by the `--json` flag: the human transcript
//! with the BMI rounded to two decimal places, and a single machine-readable
//! JSON line carrying the unrounded value.

use std::io::Write;

use crate::bmi::Reading;
use crate::error::BmiResult;

/// Print the two human-readable result lines.
pub fn render_text<W: Write>(out: &mut W, reading: &Reading) -> BmiResult<()> {
    writeln!(out, "Your BMI is: {:.2}", reading.bmi)?;
    writeln!(out, "BMI Category: {}", reading.category)?;
    Ok(())
}

/// Print one JSON event line for CI and scripting.
pub fn render_json<W: Write>(out: &mut W, reading: &Reading) -> BmiResult<()> {
    let event = serde_json::json!({
        "event": "reading",
        "weight": reading.weight,
        "height": reading.height,
        "bmi": reading.bmi,
        "category": reading.category,
    });
    writeln!(out, "{event}")?;
    Ok(())
}
