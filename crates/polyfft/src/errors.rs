//! Error handling and exit codes.

use polyfft_poly::PolyError;
use polyfft_transform::TransformError;

/// Exit codes reported by the binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// Naive and FFT results did not match during cross-validation.
    pub const ERROR_MISMATCH: u8 = 3;
    /// Invalid input or configuration.
    pub const ERROR_CONFIG: u8 = 4;
}

/// Errors raised by the command-line front end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A coefficient list could not be parsed.
    #[error("invalid coefficient list {input:?}: {reason}")]
    InvalidCoefficients {
        /// The offending argument.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// The wildcard character is not a single byte.
    #[error("wildcard {0:?} is not an ASCII character")]
    InvalidWildcard(char),

    /// Neither `--text` nor `--file` was given.
    #[error("no text to search: pass --text or --file")]
    MissingText,

    /// The two search algorithms disagree.
    #[error("naive and FFT search disagree for pattern {0:?}")]
    Mismatch(String),

    /// The transform rejected its input.
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// A polynomial operation failed.
    #[error(transparent)]
    Poly(#[from] PolyError),
}

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Mismatch(_)) => exit_codes::ERROR_MISMATCH,
        Some(
            CliError::InvalidCoefficients { .. }
            | CliError::InvalidWildcard(_)
            | CliError::MissingText
            | CliError::Transform(_)
            | CliError::Poly(_),
        ) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
