//! Invalid-input errors shared by every component of the crate.
//!
//! The engine has no recoverable runtime failures: all computation is pure
//! arithmetic over in-memory index arrays. Errors are raised before any
//! split work starts and are never retried.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrossValidationError {
    InvalidInput(&'static str),
    LengthMismatch { expected: usize, found: usize },
    FoldCountOutOfRange { n_folds: usize, n_samples: usize },
    NonIntegerPathCount { n_folds: usize, n_test_folds: usize },
}

impl Display for CrossValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::LengthMismatch { expected, found } => {
                write!(f, "length mismatch: expected {expected} rows, found {found}")
            }
            Self::FoldCountOutOfRange { n_folds, n_samples } => {
                write!(f, "n_folds {n_folds} out of range for {n_samples} samples")
            }
            Self::NonIntegerPathCount { n_folds, n_test_folds } => {
                write!(
                    f,
                    "n_folds {n_folds} with n_test_folds {n_test_folds} yields a \
                     non-integer backtest path count"
                )
            }
        }
    }
}

impl std::error::Error for CrossValidationError {}
