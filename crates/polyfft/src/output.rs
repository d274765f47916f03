//! Argument parsing helpers and result presentation.

use std::time::Duration;

use polyfft_poly::Polynomial;
use polyfft_transform::Complex64;
use serde::Serialize;

use crate::errors::CliError;

/// Parse a comma-separated coefficient list, lowest power first.
///
/// Whitespace around entries is ignored. An empty string yields the empty
/// polynomial.
pub fn parse_coefficients(input: &str) -> Result<Vec<f64>, CliError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }
    input
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            entry
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| CliError::InvalidCoefficients {
                    input: input.to_string(),
                    reason: format!("{entry:?} is not a finite number"),
                })
        })
        .collect()
}

/// Format an elapsed time given in whole microseconds.
///
/// Sub-millisecond runs, the common case here, stay exact in `µs`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_elapsed(us: u128) -> String {
    match us {
        0..=999 => format!("{us}µs"),
        1_000..=999_999 => format!("{:.3}ms", us as f64 / 1e3),
        _ => format!("{:.3}s", us as f64 / 1e6),
    }
}

/// Format a complex value as `re+imi` with six decimals.
#[must_use]
pub fn format_complex(value: &Complex64) -> String {
    // Values that print as zero must not print as -0.000000.
    let clean = |v: f64| if v.abs() < 5e-7 { 0.0 } else { v };
    format!("{:.6}{:+.6}i", clean(value.re), clean(value.im))
}

/// Result of `multiply` or `pow`.
#[derive(Debug, Serialize)]
pub struct PolynomialReport {
    pub operation: &'static str,
    pub coefficients: Vec<i64>,
    pub polynomial: String,
    pub elapsed_us: u128,
}

impl PolynomialReport {
    #[must_use]
    pub fn new(operation: &'static str, result: &Polynomial<f64>, elapsed: Duration) -> Self {
        Self {
            operation,
            coefficients: result.rounded_coefficients(),
            polynomial: result.to_string(),
            elapsed_us: elapsed.as_micros(),
        }
    }
}

/// Result of `transform`.
#[derive(Debug, Serialize)]
pub struct TransformReport {
    pub direction: &'static str,
    pub method: &'static str,
    /// `[re, im]` pairs.
    pub values: Vec<[f64; 2]>,
    pub elapsed_us: u128,
}

/// Positions found for one pattern.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PatternMatches {
    pub pattern: String,
    pub positions: Vec<usize>,
}

/// Result of `search`.
#[derive(Debug, Serialize)]
pub struct SearchReport {
    pub algorithm: &'static str,
    pub wildcard: Option<char>,
    pub text_len: usize,
    pub matches: Vec<PatternMatches>,
    pub elapsed_us: u128,
}

/// Writes reports to stdout in the selected style.
pub struct Presenter {
    quiet: bool,
    json: bool,
}

impl Presenter {
    #[must_use]
    pub fn new(quiet: bool, json: bool) -> Self {
        Self { quiet, json }
    }

    /// Present a polynomial result.
    pub fn polynomial(&self, report: &PolynomialReport) -> anyhow::Result<()> {
        if self.json {
            return print_json(report);
        }
        if self.quiet {
            println!("{}", report.polynomial);
            return Ok(());
        }
        println!("Operation: {}", report.operation);
        println!("Duration: {}", format_elapsed(report.elapsed_us));
        println!("Coefficients: {:?}", report.coefficients);
        println!("Result: {}", report.polynomial);
        Ok(())
    }

    /// Present a transformed vector, one value per line.
    pub fn transform(&self, report: &TransformReport) -> anyhow::Result<()> {
        if self.json {
            return print_json(report);
        }
        if !self.quiet {
            println!("Transform: {} ({})", report.direction, report.method);
            println!("Duration: {}", format_elapsed(report.elapsed_us));
        }
        for [re, im] in &report.values {
            println!("{}", format_complex(&Complex64::new(*re, *im)));
        }
        Ok(())
    }

    /// Present search positions, one line per pattern.
    pub fn search(&self, report: &SearchReport) -> anyhow::Result<()> {
        if self.json {
            return print_json(report);
        }
        if !self.quiet {
            println!("Algorithm: {}", report.algorithm);
            println!("Text length: {}", report.text_len);
            println!("Duration: {}", format_elapsed(report.elapsed_us));
        }
        for found in &report.matches {
            println!("{}", format_positions(found, self.quiet && report.matches.len() == 1));
        }
        Ok(())
    }
}

fn format_positions(found: &PatternMatches, bare: bool) -> String {
    let positions = found
        .positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    if bare {
        positions
    } else {
        format!("{}: {positions}", found.pattern)
    }
}

fn print_json<T: Serialize>(report: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string(report)?);
    Ok(())
}
