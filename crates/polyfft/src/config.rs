//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// polyfft: FFT polynomial arithmetic and substring search.
#[derive(Parser, Debug)]
#[command(name = "polyfft", version, about)]
pub struct AppConfig {
    /// Verbose output (debug logging and timings).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the result).
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Operation to run.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Multiply two polynomials given as comma-separated coefficients,
    /// lowest power first.
    Multiply {
        /// Left operand, e.g. "1,2,3".
        #[arg(allow_hyphen_values = true)]
        lhs: String,
        /// Right operand, e.g. "3,2,1".
        #[arg(allow_hyphen_values = true)]
        rhs: String,
    },

    /// Raise a polynomial to a non-negative integer power.
    Pow {
        /// Base polynomial, e.g. "1,1".
        #[arg(allow_hyphen_values = true)]
        poly: String,
        /// Exponent.
        exponent: usize,
    },

    /// Fourier-transform a vector of real values.
    Transform {
        /// Comma-separated values.
        #[arg(allow_hyphen_values = true)]
        values: String,
        /// Run the inverse transform.
        #[arg(long)]
        inverse: bool,
        /// Use the quadratic transform (any length) instead of the fast one.
        #[arg(long)]
        naive: bool,
    },

    /// Find every occurrence of one or more patterns in a text.
    Search {
        /// Patterns to look for.
        #[arg(required = true)]
        patterns: Vec<String>,
        /// Text to search.
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        /// Read the text from a file.
        #[arg(short, long, env = "POLYFFT_TEXT_FILE")]
        file: Option<PathBuf>,
        /// Treat the wildcard character as matching any byte.
        #[arg(short, long)]
        wildcard: bool,
        /// Wildcard character.
        #[arg(long, default_value_t = '?')]
        wildcard_char: char,
        /// Algorithm: naive, fft, or both (cross-checked).
        #[arg(long, value_enum, default_value_t = AlgoChoice::Fft)]
        algo: AlgoChoice,
    },
}

/// Search algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgoChoice {
    /// Direct comparison.
    Naive,
    /// Convolution-based.
    Fft,
    /// Run both and fail if they disagree.
    Both,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Log filter directive implied by the verbosity flags.
    #[must_use]
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}
