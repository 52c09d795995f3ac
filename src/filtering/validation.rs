//! filtering::validation — shared input guards for the trend filter.
//!
//! Purpose
//! -------
//! Centralize basic input validation for the L1 trend-filtering engine.
//! This avoids duplicating checks on signal length, data finiteness, the
//! regularization weight λ, and solver configuration across modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on the signal and λ before any
//!   operator construction or iteration is performed.
//! - Provide per-field verifiers (`verify_tol`, `verify_max_iter`,
//!   `verify_progress_every`) reused by the [`FilterOptions`] builder.
//! - Map invalid inputs into structured `FilterError` values for
//!   consistent error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Input signals must have length at least 2 to support a first
//!   difference.
//! - All signal values must be finite (`!NaN`, not ±∞).
//! - The regularization weight λ must be finite and strictly positive.
//! - Tolerances must be finite and strictly positive; iteration budgets
//!   and progress cadences must be at least 1.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and
//!   allocates nothing beyond error construction.
//! - Errors are reported via the crate-local `FilterError` enum, which
//!   is also convertible to `PyErr` in Python-facing layers.
//! - A successful `validate_input` guarantees that zero ADMM iterations
//!   have been wasted on a doomed configuration.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_input`] at the top of every public filter entry
//!   point before building the difference operator.
//! - `FilterOptions::new` reuses the per-field verifiers so that options
//!   constructed through the builder are valid by construction; entry
//!   points still re-verify because the option fields are public.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of
//!   [`validate_input`] and a simple success path.

use crate::filtering::{
    errors::{FilterError, FilterResult},
    options::FilterOptions,
};

/// Validate signal, λ, and options for the trend-filter entry points.
///
/// Parameters
/// ----------
/// - `signal`: `&[f64]`
///   Observed series to be smoothed. Must have length at least 2 and
///   contain only finite values.
/// - `lambda`: `f64`
///   Regularization weight. Must be finite and strictly positive.
/// - `opts`: `&FilterOptions`
///   Solver configuration whose fields are re-verified here because
///   they are publicly writable.
///
/// Returns
/// -------
/// `FilterResult<()>`
///   - `Ok(())` if all constraints are satisfied.
///   - `Err(FilterError)` identifying the first violated constraint.
///
/// Errors
/// ------
/// - `FilterError::SignalTooShort` when `signal.len() < 2`.
/// - `FilterError::NonFiniteSample` for the first NaN or ±∞ entry.
/// - `FilterError::InvalidLambda` when `lambda` is non-finite or ≤ 0.
/// - `FilterError::InvalidTol` / `FilterError::InvalidMaxIter` /
///   `FilterError::InvalidProgressEvery` for malformed options.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `FilterError`.
///
/// Notes
/// -----
/// - The engine otherwise assumes a cleaned, gap-free series from the
///   data-loading layer; this guard is the single place where that
///   assumption is checked rather than trusted.
pub fn validate_input(signal: &[f64], lambda: f64, opts: &FilterOptions) -> FilterResult<()> {
    validate_signal(signal)?;
    validate_lambda(lambda)?;
    verify_tol(opts.tol)?;
    verify_max_iter(opts.max_iter)?;
    verify_progress_every(opts.progress_every)?;
    Ok(())
}

/// Check that the signal is long enough and entirely finite.
///
/// Returns `FilterError::SignalTooShort` for `len < 2` and
/// `FilterError::NonFiniteSample` (with index and value) for the first
/// non-finite entry.
pub fn validate_signal(signal: &[f64]) -> FilterResult<()> {
    if signal.len() < 2 {
        return Err(FilterError::SignalTooShort { n: signal.len() });
    }
    for (index, &value) in signal.iter().enumerate() {
        if !value.is_finite() {
            return Err(FilterError::NonFiniteSample { index, value });
        }
    }
    Ok(())
}

/// Check that λ is finite and strictly positive.
pub fn validate_lambda(lambda: f64) -> FilterResult<()> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(FilterError::InvalidLambda { lambda });
    }
    Ok(())
}

/// Check that the residual tolerance is finite and strictly positive.
pub fn verify_tol(tol: f64) -> FilterResult<()> {
    if !tol.is_finite() || tol <= 0.0 {
        return Err(FilterError::InvalidTol { tol });
    }
    Ok(())
}

/// Check that the iteration budget allows at least one iteration.
pub fn verify_max_iter(max_iter: usize) -> FilterResult<()> {
    if max_iter == 0 {
        return Err(FilterError::InvalidMaxIter { max_iter });
    }
    Ok(())
}

/// Check that an explicit progress cadence is at least 1.
///
/// `None` disables progress reporting and is always valid.
pub fn verify_progress_every(every: Option<usize>) -> FilterResult<()> {
    if let Some(0) = every {
        return Err(FilterError::InvalidProgressEvery { every: 0 });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::errors::FilterError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Successful validation of well-formed inputs.
    // - Each error branch in `validate_input`:
    //   * signal too short,
    //   * non-finite signal value,
    //   * non-positive or non-finite λ,
    //   * invalid tol / max_iter / progress cadence.
    //
    // They intentionally DO NOT cover:
    // - Any interaction with Python / PyO3 (conversion to `PyErr`), which
    //   is exercised by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `validate_input` succeeds on a simple, valid triple
    // (finite signal of length ≥ 2, λ > 0, default options).
    //
    // Given
    // -----
    // - A finite signal of length 4.
    // - λ = 20.0.
    // - Default `FilterOptions`.
    //
    // Expect
    // ------
    // - `validate_input` returns `Ok(())`.
    fn validate_input_valid_arguments_succeeds() {
        // Arrange
        let signal = vec![1.0_f64, 1.2, 0.9, 1.1];
        let lambda = 20.0;
        let opts = FilterOptions::default();

        // Act
        let result = validate_input(&signal, lambda, &opts);

        // Assert
        assert!(result.is_ok(), "Expected Ok(()) for valid inputs, got {result:?}");
    }

    #[test]
    // Purpose
    // -------
    // Ensure that a single-observation signal is rejected with
    // `FilterError::SignalTooShort` carrying the offending length.
    //
    // Given
    // -----
    // - A one-element signal, λ = 1.0, default options.
    //
    // Expect
    // ------
    // - `validate_input` returns `Err(FilterError::SignalTooShort { n: 1 })`.
    fn validate_input_too_short_signal_returns_signal_too_short() {
        // Arrange
        let signal = vec![1.0_f64];
        let opts = FilterOptions::default();

        // Act
        let result = validate_input(&signal, 1.0, &opts);

        // Assert
        match result {
            Err(FilterError::SignalTooShort { n }) => assert_eq!(n, 1),
            other => panic!("expected SignalTooShort error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that any non-finite value (e.g., NaN) in the signal triggers
    // `FilterError::NonFiniteSample` with the offending index.
    //
    // Given
    // -----
    // - A signal containing a `NaN` at index 1.
    //
    // Expect
    // ------
    // - `validate_input` returns `Err(FilterError::NonFiniteSample)` with
    //   index 1 and a non-finite payload.
    fn validate_input_non_finite_value_returns_non_finite_sample() {
        // Arrange
        let signal = vec![0.1_f64, f64::NAN, 0.3];
        let opts = FilterOptions::default();

        // Act
        let result = validate_input(&signal, 1.0, &opts);

        // Assert
        match result {
            Err(FilterError::NonFiniteSample { index, value }) => {
                assert_eq!(index, 1);
                assert!(!value.is_finite(), "payload should be non-finite, got {value}");
            }
            other => panic!("expected NonFiniteSample error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure that non-positive and non-finite λ values are rejected with
    // `FilterError::InvalidLambda`.
    //
    // Given
    // -----
    // - A valid signal and λ ∈ {0.0, -5.0, NaN}.
    //
    // Expect
    // ------
    // - Each λ yields `Err(FilterError::InvalidLambda)`.
    fn validate_input_bad_lambda_returns_invalid_lambda() {
        // Arrange
        let signal = vec![0.1_f64, -0.2, 0.3];
        let opts = FilterOptions::default();

        // Act & Assert
        for lambda in [0.0_f64, -5.0, f64::NAN] {
            match validate_input(&signal, lambda, &opts) {
                Err(FilterError::InvalidLambda { .. }) => (),
                other => panic!("expected InvalidLambda for λ = {lambda}, got {other:?}"),
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero tolerance in the options is rejected with
    // `FilterError::InvalidTol`.
    //
    // Given
    // -----
    // - Default options with `tol` overwritten to 0.0.
    //
    // Expect
    // ------
    // - `validate_input` returns `Err(FilterError::InvalidTol)`.
    fn validate_input_zero_tol_returns_invalid_tol() {
        // Arrange
        let signal = vec![0.1_f64, -0.2, 0.3];
        let mut opts = FilterOptions::default();
        opts.tol = 0.0;

        // Act
        let result = validate_input(&signal, 1.0, &opts);

        // Assert
        match result {
            Err(FilterError::InvalidTol { tol }) => assert_eq!(tol, 0.0),
            other => panic!("expected InvalidTol error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero iteration budget is rejected with
    // `FilterError::InvalidMaxIter`.
    //
    // Given
    // -----
    // - Default options with `max_iter` overwritten to 0.
    //
    // Expect
    // ------
    // - `validate_input` returns `Err(FilterError::InvalidMaxIter)`.
    fn validate_input_zero_max_iter_returns_invalid_max_iter() {
        // Arrange
        let signal = vec![0.1_f64, -0.2, 0.3];
        let mut opts = FilterOptions::default();
        opts.max_iter = 0;

        // Act
        let result = validate_input(&signal, 1.0, &opts);

        // Assert
        match result {
            Err(FilterError::InvalidMaxIter { max_iter }) => assert_eq!(max_iter, 0),
            other => panic!("expected InvalidMaxIter error, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an explicit progress cadence of 0 is rejected while
    // `None` (reporting disabled) passes.
    //
    // Given
    // -----
    // - Default options with `progress_every` set to `Some(0)` and then
    //   `None`.
    //
    // Expect
    // ------
    // - `Some(0)` yields `Err(FilterError::InvalidProgressEvery)`;
    //   `None` validates cleanly.
    fn verify_progress_every_rejects_zero_and_accepts_none() {
        // Act & Assert
        match verify_progress_every(Some(0)) {
            Err(FilterError::InvalidProgressEvery { every }) => assert_eq!(every, 0),
            other => panic!("expected InvalidProgressEvery error, got {other:?}"),
        }
        assert!(verify_progress_every(None).is_ok());
        assert!(verify_progress_every(Some(100)).is_ok());
    }
}
