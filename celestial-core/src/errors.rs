//! Error types for astronomical calculations.
//!
//! [`AstroError`] covers the failure modes of the engine's pure math: invalid
//! calendar dates, numerical problems (non-finite values, out-of-range inputs,
//! degenerate divisions) and invalid caller input.
//!
//! # Error Categories
//!
//! | Variant | Use Case |
//! |---------|----------|
//! | [`InvalidDate`](AstroError::InvalidDate) | Calendar validation failures |
//! | [`MathError`](AstroError::MathError) | Non-finite values, range violations, division by zero |
//! | [`CalculationError`](AstroError::CalculationError) | Algorithm or parse failures |
//!
//! # Usage
//!
//! ```
//! use celestial_core::{AstroError, MathErrorKind};
//!
//! fn checked_latitude(lat_deg: f64) -> Result<f64, AstroError> {
//!     if !(-90.0..=90.0).contains(&lat_deg) {
//!         return Err(AstroError::math_error(
//!             "checked_latitude",
//!             MathErrorKind::OutOfRange,
//!             "latitude must lie in [-90, 90]",
//!         ));
//!     }
//!     Ok(lat_deg)
//! }
//!
//! assert!(checked_latitude(95.0).is_err());
//! ```

use thiserror::Error;

/// Classification of mathematical errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathErrorKind {
    /// Attempted division by zero or near-zero value.
    DivisionByZero,
    /// Input value is invalid for the operation.
    InvalidInput,
    /// Result is NaN or infinity.
    NotFinite,
    /// Value outside valid domain (e.g., latitude > 90°).
    OutOfRange,
}

/// Unified error type for astronomical calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    /// Invalid calendar date (e.g., February 30, month 13).
    #[error("Invalid date {year}-{month:02}-{day:02}: {message}")]
    InvalidDate {
        year: i32,
        month: i32,
        day: i32,
        message: String,
    },

    /// Numerical computation failure.
    #[error("Math error in {operation} ({kind:?}): {message}")]
    MathError {
        operation: String,
        kind: MathErrorKind,
        message: String,
    },

    /// Algorithm or calculation failure.
    #[error("Calculation error in {context}: {message}")]
    CalculationError { context: String, message: String },
}

/// Convenience alias for `Result<T, AstroError>`.
pub type AstroResult<T> = Result<T, AstroError>;

impl AstroError {
    pub fn invalid_date(year: i32, month: i32, day: i32, reason: &str) -> Self {
        Self::InvalidDate {
            year,
            month,
            day,
            message: reason.to_string(),
        }
    }

    pub fn math_error(operation: &str, kind: MathErrorKind, reason: &str) -> Self {
        Self::MathError {
            operation: operation.to_string(),
            kind,
            message: reason.to_string(),
        }
    }

    pub fn calculation_error(context: &str, reason: &str) -> Self {
        Self::CalculationError {
            context: context.to_string(),
            message: reason.to_string(),
        }
    }

    /// Returns the [`MathErrorKind`] when this is a [`MathError`](Self::MathError).
    pub fn math_kind(&self) -> Option<MathErrorKind> {
        match self {
            Self::MathError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}
