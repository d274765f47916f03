//! Application entry point and dispatch.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use polyfft_match::{search_many, Algorithm, MatchOptions, PatternKind};
use polyfft_poly::Polynomial;
use polyfft_transform::{dft, fft, idft, ifft, Complex64};

use crate::config::{AlgoChoice, AppConfig, Command};
use crate::errors::CliError;
use crate::output::{
    parse_coefficients, PatternMatches, PolynomialReport, Presenter, SearchReport,
    TransformReport,
};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let presenter = Presenter::new(config.quiet, config.json);
    match &config.command {
        Command::Multiply { lhs, rhs } => run_multiply(&presenter, lhs, rhs),
        Command::Pow { poly, exponent } => run_pow(&presenter, poly, *exponent),
        Command::Transform {
            values,
            inverse,
            naive,
        } => run_transform(&presenter, values, *inverse, *naive),
        Command::Search {
            patterns,
            text,
            file,
            wildcard,
            wildcard_char,
            algo,
        } => {
            let text = load_text(text.as_deref(), file.as_deref())?;
            let kind = if *wildcard {
                PatternKind::Wildcard
            } else {
                PatternKind::Exact
            };
            let options = MatchOptions {
                wildcard: wildcard_byte(*wildcard_char)?,
            };
            run_search(&presenter, &text, patterns, kind, &options, *algo)
        }
    }
}

fn polynomial(input: &str) -> Result<Polynomial<f64>, CliError> {
    Ok(Polynomial::from_reals(parse_coefficients(input)?))
}

fn run_multiply(presenter: &Presenter, lhs: &str, rhs: &str) -> Result<()> {
    let lhs = polynomial(lhs)?;
    let rhs = polynomial(rhs)?;

    let start = Instant::now();
    let product = lhs.try_mul(&rhs).map_err(CliError::from)?;
    let elapsed = start.elapsed();
    tracing::debug!(
        lhs = lhs.degree(),
        rhs = rhs.degree(),
        product = product.degree(),
        ?elapsed,
        "multiplied"
    );

    presenter.polynomial(&PolynomialReport::new("multiply", &product, elapsed))
}

fn run_pow(presenter: &Presenter, base: &str, exponent: usize) -> Result<()> {
    let mut result = polynomial(base)?;

    let start = Instant::now();
    result.try_pow_assign(exponent).map_err(CliError::from)?;
    let elapsed = start.elapsed();
    tracing::debug!(exponent, degree = result.degree(), ?elapsed, "raised to power");

    presenter.polynomial(&PolynomialReport::new("pow", &result, elapsed))
}

fn run_transform(presenter: &Presenter, values: &str, inverse: bool, naive: bool) -> Result<()> {
    let input: Vec<Complex64> = parse_coefficients(values)?
        .into_iter()
        .map(|re| Complex64::new(re, 0.0))
        .collect();

    let start = Instant::now();
    let output = match (inverse, naive) {
        (false, false) => fft(&input),
        (true, false) => ifft(&input),
        (false, true) => dft(&input),
        (true, true) => idft(&input),
    }
    .map_err(CliError::from)?;
    let elapsed = start.elapsed();

    presenter.transform(&TransformReport {
        direction: if inverse { "inverse" } else { "forward" },
        method: if naive { "naive" } else { "fft" },
        values: output.iter().map(|c| [c.re, c.im]).collect(),
        elapsed_us: elapsed.as_micros(),
    })
}

fn load_text(text: Option<&str>, file: Option<&Path>) -> Result<Vec<u8>> {
    match (text, file) {
        (Some(text), _) => Ok(text.as_bytes().to_vec()),
        (None, Some(path)) => {
            std::fs::read(path).with_context(|| format!("reading {}", path.display()))
        }
        (None, None) => Err(CliError::MissingText.into()),
    }
}

fn wildcard_byte(c: char) -> Result<u8, CliError> {
    u8::try_from(c)
        .ok()
        .filter(u8::is_ascii)
        .ok_or(CliError::InvalidWildcard(c))
}

fn run_search(
    presenter: &Presenter,
    text: &[u8],
    patterns: &[String],
    kind: PatternKind,
    options: &MatchOptions,
    algo: AlgoChoice,
) -> Result<()> {
    let start = Instant::now();
    let (algorithm, positions) = match algo {
        AlgoChoice::Naive => (
            "naive",
            search_many(text, patterns, kind, Algorithm::Naive, options),
        ),
        AlgoChoice::Fft => (
            "fft",
            search_many(text, patterns, kind, Algorithm::Fft, options),
        ),
        AlgoChoice::Both => ("both", cross_checked(text, patterns, kind, options)?),
    };
    let elapsed = start.elapsed();

    let matches = patterns
        .iter()
        .zip(positions)
        .map(|(pattern, positions)| PatternMatches {
            pattern: pattern.clone(),
            positions,
        })
        .collect();

    presenter.search(&SearchReport {
        algorithm,
        wildcard: (kind == PatternKind::Wildcard).then_some(char::from(options.wildcard)),
        text_len: text.len(),
        matches,
        elapsed_us: elapsed.as_micros(),
    })
}

/// Run both algorithms and fail on the first pattern where they disagree.
fn cross_checked(
    text: &[u8],
    patterns: &[String],
    kind: PatternKind,
    options: &MatchOptions,
) -> Result<Vec<Vec<usize>>> {
    let naive = search_many(text, patterns, kind, Algorithm::Naive, options);
    let fast = search_many(text, patterns, kind, Algorithm::Fft, options);
    for ((pattern, expected), actual) in patterns.iter().zip(&naive).zip(&fast) {
        if expected != actual {
            tracing::error!(%pattern, ?expected, ?actual, "search results differ");
            return Err(CliError::Mismatch(pattern.clone()).into());
        }
    }
    Ok(fast)
}
