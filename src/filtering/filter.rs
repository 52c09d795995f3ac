//! filtering::filter — public entry points for L1 trend filtering.
//!
//! Purpose
//! -------
//! Orchestrate one complete trend-filter solve: validate the inputs,
//! build the difference operator and the factored linear solver, run
//! the bounded ADMM loop, and extract the trend. Three entry points
//! share the same driver and differ only in configurability and the
//! richness of what they return.
//!
//! Key behaviors
//! -------------
//! - [`l1_trend_filter`]: signal and λ with reference defaults,
//!   returning the bare trend.
//! - [`l1_trend_filter_with_opts`]: explicit [`FilterOptions`], still
//!   returning the bare trend.
//! - [`l1_trend_filter_diagnostics`]: full [`FilterOutcome`] plus an
//!   optional [`ProgressObserver`] invoked at the configured cadence.
//! - Budget exhaustion terminates the loop silently; the trend of the
//!   final iterate is returned and only the diagnostics variant reveals
//!   that the tolerance was not met.
//!
//! Invariants & assumptions
//! ------------------------
//! - Validation runs before any operator or solver construction, so no
//!   iteration is spent on malformed inputs.
//! - The observer cadence affects reporting only; the sequence of
//!   iterates is identical with and without an observer.
//! - All entry points on the same inputs produce the same trend; the
//!   diagnostics variant adds information without changing the solve.
//!
//! Conventions
//! -----------
//! - The tridiagonal Thomas factorization is the production solver; the
//!   dense Cholesky fallback in `filtering::linear_solver` is held
//!   equivalent by unit test and reachable through the same trait for
//!   callers that want it.
//!
//! Downstream usage
//! ----------------
//! - Library consumers call these functions directly; the Python
//!   bindings in the crate root wrap them one-to-one.
//!
//! Testing notes
//! -------------
//! - Unit tests cover validation wiring, the equivalence of the three
//!   entry points, and observer cadence. Filtering quality on realistic
//!   signals lives in the integration tests.

use crate::filtering::{
    errors::FilterResult,
    linear_solver::TridiagonalSolver,
    operator::DifferenceOperator,
    options::FilterOptions,
    outcome::FilterOutcome,
    state::{AdmmState, ProgressObserver},
    validation::validate_input,
};
use ndarray::{Array1, ArrayView1};

/// Filter a signal with the reference defaults.
///
/// Runs the ADMM solve with `max_iter = 100_000` and `tol = 1e-3`,
/// returning the extracted trend.
///
/// Parameters
/// ----------
/// - `signal`: `&[f64]`
///   Observed series; length ≥ 2, all values finite.
/// - `lambda`: `f64`
///   Regularization weight; finite and strictly positive. Larger values
///   produce flatter trends with fewer slope changes.
///
/// Returns
/// -------
/// `FilterResult<Array1<f64>>`
///   The trend estimate, same length as `signal`.
///
/// Errors
/// ------
/// - Any validation error from [`validate_input`](crate::filtering::validation::validate_input).
/// - A numerical-failure variant if the solve breaks down.
///
/// Notes
/// -----
/// - If the iteration budget runs out before the residual test is met,
///   the final iterate is returned without further indication; use
///   [`l1_trend_filter_diagnostics`] when the distinction matters.
pub fn l1_trend_filter(signal: &[f64], lambda: f64) -> FilterResult<Array1<f64>> {
    l1_trend_filter_with_opts(signal, lambda, &FilterOptions::default())
}

/// Filter a signal under explicit solver options.
///
/// Identical to [`l1_trend_filter`] except that the iteration budget,
/// tolerance, and progress cadence come from `opts`. The cadence is
/// validated here but has no effect without an observer; pass one via
/// [`l1_trend_filter_diagnostics`].
///
/// # Errors
/// - Any validation error, including malformed option fields.
/// - A numerical-failure variant if the solve breaks down.
pub fn l1_trend_filter_with_opts(
    signal: &[f64], lambda: f64, opts: &FilterOptions,
) -> FilterResult<Array1<f64>> {
    let outcome = l1_trend_filter_diagnostics(signal, lambda, opts, None)?;
    Ok(outcome.trend)
}

/// Filter a signal and report full solve diagnostics.
///
/// Parameters
/// ----------
/// - `signal`: `&[f64]`
///   Observed series; length ≥ 2, all values finite.
/// - `lambda`: `f64`
///   Regularization weight; finite and strictly positive.
/// - `opts`: `&FilterOptions`
///   Iteration budget, tolerance, and observer cadence.
/// - `observer`: `Option<&mut dyn ProgressObserver>`
///   Invoked every `opts.progress_every` iterations and once more on
///   the final sweep. Ignored when the cadence is `None`.
///
/// Returns
/// -------
/// `FilterResult<FilterOutcome>`
///   Trend, convergence flag, iteration count, and final residual
///   norms.
///
/// Errors
/// ------
/// - Any validation error from [`validate_input`](crate::filtering::validation::validate_input).
/// - `FilterError::SingularSystem` or `FilterError::NumericalDivergence`
///   on numerical breakdown.
///
/// Notes
/// -----
/// - Budget exhaustion yields `Ok` with `converged = false`; it is a
///   normal termination mode, not an error.
pub fn l1_trend_filter_diagnostics(
    signal: &[f64],
    lambda: f64,
    opts: &FilterOptions,
    mut observer: Option<&mut dyn ProgressObserver>,
) -> FilterResult<FilterOutcome> {
    validate_input(signal, lambda, opts)?;

    let y = ArrayView1::from(signal);
    let op = DifferenceOperator::new(signal.len())?;
    let solver = TridiagonalSolver::gram_plus_identity(&op)?;
    let mut state = AdmmState::new(y);

    let mut converged = false;
    for iter in 1..=opts.max_iter {
        converged = state.step(y, lambda, &op, &solver, opts.tol)?;

        if let (Some(obs), Some(every)) = (observer.as_mut(), opts.progress_every) {
            let last = converged || iter == opts.max_iter;
            if iter % every == 0 || last {
                obs.on_iteration(state.iteration(), state.primal_res(), state.dual_res());
            }
        }

        if converged {
            break;
        }
    }

    Ok(FilterOutcome::from_state(state, converged))
}
