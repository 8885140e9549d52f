//! Quetelet - interactive BMI calculator and classifier
//!
//! Quetelet reads a weight in kilograms and a height in meters, computes the
//! Body Mass Index (`weight / height²`), and classifies it into one of four
//! weight-status categories. The engine is pure and takes its input source
//! as an explicit parameter, so every layer is testable without a terminal.

pub mod bmi;
pub mod cli;
pub mod error;
pub mod input;
pub mod report;
pub mod session;

// Re-exports for convenience
pub use bmi::{compute_bmi, Category, Reading};
pub use error::{BmiError, BmiResult};
pub use input::{read_measurement, validate_measurement, Field};
pub use report::{render_json, render_text};
pub use session::{run, SessionOptions};
