//! Measurement input boundary
//!
//! Reads whitespace-delimited numeric tokens from any `BufRead` source.
//! The reader is always passed in explicitly, so the session can run
//! against stdin, a pipe, or an in-memory cursor in tests.

use std::io::{self, BufRead};

use crate::error::{BmiError, BmiResult};

/// Which measurement a prompt or error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Weight,
    Height,
}

impl Field {
    /// Label used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Weight => "weight",
            Self::Height => "height",
        }
    }

    /// Exact prompt string, no trailing newline.
    pub fn prompt(self) -> &'static str {
        match self {
            Self::Weight => "Enter your weight in kilograms: ",
            Self::Height => "Enter your height in meters: ",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Read the next whitespace-delimited token from `reader`.
///
/// Leading ASCII whitespace is skipped, so tokens may share a line or
/// arrive one per line. Returns `None` once the stream is exhausted.
pub fn next_token<R: BufRead>(reader: &mut R) -> io::Result<Option<String>> {
    let mut token = Vec::new();
    loop {
        let (used, complete) = {
            let buf = reader.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                used += 1;
                if byte.is_ascii_whitespace() {
                    if token.is_empty() {
                        continue;
                    }
                    complete = true;
                    break;
                }
                token.push(byte);
            }
            (used, complete)
        };
        reader.consume(used);
        if complete {
            break;
        }
    }
    if token.is_empty() {
        Ok(None)
    } else {
        Ok(Some(String::from_utf8_lossy(&token).into_owned()))
    }
}

/// Read and validate one measurement for `field`.
pub fn read_measurement<R: BufRead>(reader: &mut R, field: Field) -> BmiResult<f64> {
    let token = next_token(reader)?.ok_or(BmiError::UnexpectedEof { field })?;
    let value: f64 = token
        .parse()
        .map_err(|_| BmiError::InvalidNumber {
            field,
            token: token.clone(),
        })?;
    validate_measurement(field, value)?;
    Ok(value)
}

/// Reject zero, negative, and non-finite measurements.
///
/// A zero height would otherwise divide to infinity; `f64::from_str` also
/// happily parses "inf" and "NaN", so the finiteness check sits here rather
/// than in the parser.
pub fn validate_measurement(field: Field, value: f64) -> BmiResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(BmiError::OutOfRange { field, value });
    }
    Ok(())
}
