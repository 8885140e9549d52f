//! BMI computation and classification
//!
//! The numeric core of the crate: a two-operand formula and a four-band
//! threshold lookup. Everything here is pure; validation and I/O live in
//! the input and session layers.

use std::fmt;

use serde::Serialize;

/// Body Mass Index: mass in kilograms over the square of stature in meters.
///
/// Standard floating-point division, no validation. Callers are expected to
/// have validated both measurements as positive and finite.
#[inline]
pub fn compute_bmi(weight: f64, height: f64) -> f64 {
    weight / (height * height)
}

/// Weight-status category derived solely from a BMI value.
///
/// Variants are declared in increasing BMI order, so the derived `Ord`
/// agrees with the thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    #[serde(rename = "Underweight")]
    Underweight,
    #[serde(rename = "Normal weight")]
    NormalWeight,
    #[serde(rename = "Overweight")]
    Overweight,
    #[serde(rename = "Obese")]
    Obese,
}

impl Category {
    /// Pure function: BMI → category.
    ///
    /// First match wins over half-open intervals; the boundary values 18.5,
    /// 25, and 30 belong to the higher band. NaN fails every `<` comparison
    /// and lands in the final arm; the validated input path never produces
    /// one.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Display label for the output boundary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One evaluated measurement pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reading {
    /// Weight in kilograms
    pub weight: f64,
    /// Height in meters
    pub height: f64,
    /// Derived BMI, unrounded
    pub bmi: f64,
    /// Category for `bmi`
    pub category: Category,
}

impl Reading {
    /// Evaluate a validated measurement pair.
    pub fn new(weight: f64, height: f64) -> Self {
        let bmi = compute_bmi(weight, height);
        Self {
            weight,
            height,
            bmi,
            category: Category::from_bmi(bmi),
        }
    }
}
