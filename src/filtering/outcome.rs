//! filtering::outcome — diagnostic result of a trend-filter solve.
//!
//! Purpose
//! -------
//! Package the extracted trend together with the solve diagnostics
//! (convergence flag, iterations used, final residual norms) for
//! callers that want more than the bare trend vector. The plain entry
//! points keep returning just the trend; this richer carrier is an
//! additive surface, not a replacement.
//!
//! Key behaviors
//! -------------
//! - Define [`FilterOutcome`] as a plain data carrier built from the
//!   final [`AdmmState`](crate::filtering::state::AdmmState) of a solve.
//! - Record budget exhaustion as `converged = false` on a successful
//!   result, never as an error.
//!
//! Invariants & assumptions
//! ------------------------
//! - `trend.len()` equals the input signal length.
//! - When `converged` is true, both residual fields are strictly below
//!   the tolerance the solve ran with; when false, `iterations` equals
//!   the configured budget.
//!
//! Conventions
//! -----------
//! - Fields are public and read-only in spirit; the struct has no
//!   behavior of its own.
//!
//! Downstream usage
//! ----------------
//! - Returned by `l1_trend_filter_diagnostics`; the Python bindings
//!   mirror it as a small result class.
//!
//! Testing notes
//! -------------
//! - Exercised through the filter entry-point tests; no standalone unit
//!   tests beyond construction.

use crate::filtering::state::AdmmState;
use ndarray::Array1;

/// FilterOutcome — trend estimate plus solve diagnostics.
///
/// Purpose
/// -------
/// Report what the solver produced and how it got there: the trend, the
/// termination mode, and the final residual norms.
///
/// Fields
/// ------
/// - `trend`: `Array1<f64>`
///   The extracted trend, same length as the input signal.
/// - `converged`: `bool`
///   True if both residual norms fell strictly below the tolerance;
///   false if the iteration budget ran out first.
/// - `iterations`: `usize`
///   Completed ADMM sweeps.
/// - `primal_res`, `dual_res`: `f64`
///   Residual norms of the final sweep.
///
/// Notes
/// -----
/// - Budget exhaustion is a normal termination mode; only validation
///   and numerical failures surface as errors.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome {
    /// Extracted trend, same length as the input signal.
    pub trend: Array1<f64>,
    /// Whether the joint residual test was met within the budget.
    pub converged: bool,
    /// Number of completed ADMM sweeps.
    pub iterations: usize,
    /// Primal residual norm of the final sweep.
    pub primal_res: f64,
    /// Dual residual norm of the final sweep.
    pub dual_res: f64,
}

impl FilterOutcome {
    /// Build the outcome from the final iteration state.
    pub(crate) fn from_state(state: AdmmState, converged: bool) -> Self {
        let iterations = state.iteration();
        let primal_res = state.primal_res();
        let dual_res = state.dual_res();
        Self { trend: state.into_trend(), converged, iterations, primal_res, dual_res }
    }
}
