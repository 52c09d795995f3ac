//! filtering::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide the error enum and result alias for the L1 trend-filtering
//! engine, together with a conversion layer to Python exceptions for
//! PyO3-based bindings. This keeps input validation and numerical
//! failures localized while exposing a clean error surface to both Rust
//! and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`FilterResult`] and [`FilterError`] as the canonical result
//!   and error types for the trend filter and its validation helpers.
//! - Attach human-readable `Display` messages to each error variant so
//!   that diagnostics and logs are meaningful without additional context.
//! - Implement `From<FilterError> for PyErr` to map Rust-side validation
//!   and numerical errors into `PyValueError` values visible to Python
//!   callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Engine modules which use this error type validate their inputs
//!   (signal length, finiteness, λ, tolerances) and return
//!   [`FilterResult<T>`] instead of panicking.
//! - `FilterError` values are small, cheap to clone, and suitable for
//!   use in both unit tests and higher-level orchestration code.
//! - The Python-facing conversion preserves the Rust error message
//!   verbatim inside the `PyValueError` string representation.
//!
//! Conventions
//! -----------
//! - Variants split into two families matching the engine's taxonomy:
//!   invalid-input conditions (rejected before any iteration) and
//!   numerical failures (surfaced mid-solve rather than returning
//!   garbage). Budget exhaustion is deliberately *not* an error.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "λ must be positive", "n ≥ 2") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - The filter entry points and `filtering::validation` return
//!   [`FilterResult<T>`] to propagate failures cleanly to callers.
//! - Python bindings raise `ValueError` instances via the `From`
//!   conversion; they do not pattern-match on [`FilterError`] directly.
//! - Higher-level Rust code may match on [`FilterError`] variants to
//!   implement custom recovery or logging behavior.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module verify that each variant's `Display`
//!   message embeds its payload (offending value, index, or row).
//! - The statistical behavior of the solver is exercised elsewhere;
//!   here only the error surface itself is under test.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type FilterResult<T> = Result<T, FilterError>;

/// FilterError — error conditions for the L1 trend filter.
///
/// Purpose
/// -------
/// Represent all validation and numerical failures that can occur when
/// running the ADMM trend filter, from malformed inputs to a breakdown
/// of the linear-system factorization.
///
/// Variants
/// --------
/// - `SignalTooShort { n }`
///   The input signal has fewer than 2 observations, so the first
///   difference operator cannot be formed.
/// - `NonFiniteSample { index, value }`
///   A signal element is non-finite (NaN or ±∞) and cannot enter the
///   quadratic fidelity term.
/// - `InvalidLambda { lambda }`
///   The regularization weight λ is non-positive or non-finite.
/// - `InvalidTol { tol }`
///   The residual tolerance is non-positive or non-finite.
/// - `InvalidMaxIter { max_iter }`
///   The iteration budget is zero.
/// - `InvalidProgressEvery { every }`
///   The progress-callback cadence is zero (use `None` to disable).
/// - `SingularSystem { row }`
///   Forward elimination of the tridiagonal system `(I + DᵗD)` hit a
///   vanishing or non-finite pivot at `row`. Theoretically impossible
///   for this symmetric positive definite matrix, but guarded against
///   overflow and pathological inputs.
/// - `FactorizationFailed`
///   The dense Cholesky fallback could not factor `(I + DᵗD)`.
/// - `NumericalDivergence { iteration }`
///   A residual norm became non-finite at `iteration`, indicating
///   overflow inside the ADMM recursion.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value,
///   index, or row) to allow downstream logging and debugging without
///   leaking large data structures.
/// - `NumericalDivergence` reports the 1-based iteration at which the
///   non-finite residual was first observed.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation.
/// - A blanket [`From<FilterError> for PyErr`] implementation maps all
///   of these cases to `PyValueError` at the Python boundary, with the
///   human-readable message taken from the `Display` implementation.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterError {
    //------ Input validation errors ------
    SignalTooShort { n: usize },
    NonFiniteSample { index: usize, value: f64 },
    InvalidLambda { lambda: f64 },
    InvalidTol { tol: f64 },
    InvalidMaxIter { max_iter: usize },
    InvalidProgressEvery { every: usize },

    //------ Numerical failures ------
    SingularSystem { row: usize },
    FactorizationFailed,
    NumericalDivergence { iteration: usize },
}

impl std::error::Error for FilterError {}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::SignalTooShort { n } => {
                write!(f, "Signal has {n} observations. Need n ≥ 2 to form a difference operator.")
            }
            FilterError::NonFiniteSample { index, value } => {
                write!(f, "Signal value {value} at index {index} is not finite.")
            }
            FilterError::InvalidLambda { lambda } => {
                write!(f, "Invalid λ value: {lambda}. Must be finite and positive.")
            }
            FilterError::InvalidTol { tol } => {
                write!(f, "Invalid tolerance: {tol}. Must be finite and positive.")
            }
            FilterError::InvalidMaxIter { max_iter } => {
                write!(f, "Invalid max_iter: {max_iter}. Must be at least 1.")
            }
            FilterError::InvalidProgressEvery { every } => {
                write!(
                    f,
                    "Invalid progress cadence: {every}. Must be at least 1 (or None to disable)."
                )
            }
            FilterError::SingularSystem { row } => {
                write!(f, "Tridiagonal factorization of I + DᵗD broke down at row {row}.")
            }
            FilterError::FactorizationFailed => {
                write!(f, "Dense Cholesky factorization of I + DᵗD failed.")
            }
            FilterError::NumericalDivergence { iteration } => {
                write!(f, "Residual norm became non-finite at iteration {iteration}.")
            }
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<FilterError> for PyErr {
    fn from(err: FilterError) -> PyErr {
        PyValueError::new_err(format!("FilterError: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for FilterError variants.
    // - Embedding of payload values (n, λ, index, row) into error messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<FilterError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `FilterError::SignalTooShort` includes the offending
    // length in its `Display` representation.
    //
    // Given
    // -----
    // - A `FilterError::SignalTooShort` with n = 1.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "1".
    fn filter_error_signal_too_short_includes_length_in_display() {
        // Arrange
        let err = FilterError::SignalTooShort { n: 1 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('1'),
            "Display message should include offending signal length.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FilterError::InvalidLambda` includes the offending λ
    // value in its `Display` representation.
    //
    // Given
    // -----
    // - A `FilterError::InvalidLambda` with λ = -5.0.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "-5".
    fn filter_error_invalid_lambda_includes_payload_in_display() {
        // Arrange
        let err = FilterError::InvalidLambda { lambda: -5.0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("-5"),
            "Display message should include offending λ value.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Verify that `FilterError::NonFiniteSample` reports both the index
    // and the non-finite value.
    //
    // Given
    // -----
    // - A `FilterError::NonFiniteSample` with index = 7 and value = NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "7" and "NaN".
    fn filter_error_non_finite_sample_reports_index_and_value() {
        // Arrange
        let err = FilterError::NonFiniteSample { index: 7, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('7'), "Display message should include the index.\nGot: {msg}");
        assert!(msg.contains("NaN"), "Display message should include the value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `FilterError::SingularSystem` reports the pivot row in
    // its `Display` representation.
    //
    // Given
    // -----
    // - A `FilterError::SingularSystem` with row = 3.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "3".
    fn filter_error_singular_system_includes_row_in_display() {
        // Arrange
        let err = FilterError::SingularSystem { row: 3 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains('3'),
            "Display message should include offending pivot row.\nGot: {msg}"
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `FilterError::NumericalDivergence` reports the
    // iteration at which divergence was detected.
    //
    // Given
    // -----
    // - A `FilterError::NumericalDivergence` with iteration = 42.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "42".
    fn filter_error_numerical_divergence_includes_iteration_in_display() {
        // Arrange
        let err = FilterError::NumericalDivergence { iteration: 42 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(
            msg.contains("42"),
            "Display message should include the diverging iteration.\nGot: {msg}"
        );
    }
}
