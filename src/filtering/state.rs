//! filtering::state — ADMM iteration state for the L1 trend filter.
//!
//! Purpose
//! -------
//! Hold the evolving variables of the scaled-form ADMM recursion that
//! minimizes `(1/2)‖x − y‖² + λ‖Dx‖₁`, and advance them one iteration
//! at a time. Exposing the iteration as an explicit state object keeps
//! the update mathematics separate from the driver loop and lets tests
//! step the recursion deterministically.
//!
//! Key behaviors
//! -------------
//! - Initialize the primal variable x to the observed signal and the
//!   auxiliary variable z and scaled dual u to zeros in difference
//!   space.
//! - Perform one full ADMM sweep per [`AdmmState::step`] call: x-update
//!   through a factored linear solver, z-update by soft-thresholding,
//!   residual evaluation, and the dual ascent on u.
//! - Report convergence as the return value of `step`; both residual
//!   norms must fall strictly below the tolerance in the same
//!   iteration.
//! - Define [`ProgressObserver`], the hook through which the driver
//!   surfaces per-iteration residuals without the state module knowing
//!   anything about reporting cadence or sinks.
//!
//! Invariants & assumptions
//! ------------------------
//! - ρ = 1 throughout; the scaled dual form folds the penalty parameter
//!   into u, and the x-update system is exactly `I + DᵗD`.
//! - `x.len() == signal.len()` and `z.len() == u.len() == n − 1` for the
//!   lifetime of the state.
//! - The z-update uses z_new on the right-hand side of the dual ascent
//!   within the same iteration (Gauss-Seidel ordering), matching the
//!   standard ADMM recursion.
//! - When `step` reports convergence the state already holds the fresh
//!   x and z from that sweep; the returned trend reflects the iterate
//!   that satisfied the stopping test.
//! - Residual norms are checked for finiteness each sweep; a NaN or ±∞
//!   norm aborts the solve rather than iterating on garbage.
//!
//! Conventions
//! -----------
//! - The state trusts its caller for shapes and validated parameters;
//!   public entry points perform validation before construction.
//! - No I/O and no allocation beyond the per-sweep temporaries.
//!
//! Downstream usage
//! ----------------
//! - The filter driver constructs one [`AdmmState`] per invocation and
//!   calls `step` in a loop bounded by the iteration budget, invoking
//!   the observer at the configured cadence.
//!
//! Testing notes
//! -------------
//! - Unit tests step the recursion by hand on tiny signals, checking
//!   the soft-threshold arithmetic, the monotone approach to a fixed
//!   point on an already-smooth signal, and the divergence guard.

use crate::filtering::{
    errors::{FilterError, FilterResult},
    linear_solver::LinearSystemSolver,
    operator::DifferenceOperator,
};
use ndarray::{Array1, ArrayView1};

/// Per-iteration progress hook for long-running solves.
///
/// Implementors receive the 1-based iteration counter and the primal
/// and dual residual norms of the sweep that just completed. Observers
/// must not influence the numerical result; the driver invokes them at
/// the cadence configured in the options and once more on the final
/// iteration.
pub trait ProgressObserver {
    /// Called after a completed sweep with its residual norms.
    fn on_iteration(&mut self, iteration: usize, primal_res: f64, dual_res: f64);
}

/// AdmmState — the evolving variables of one trend-filter solve.
///
/// Purpose
/// -------
/// Carry the primal trend estimate x, the auxiliary difference variable
/// z, the scaled dual u, and the residual norms of the most recent
/// sweep. Each [`AdmmState::step`] call advances all of them by one
/// ADMM iteration.
///
/// Parameters
/// ----------
/// Constructed via [`AdmmState::new`]:
/// - `signal`: `ArrayView1<f64>`
///   Observed series; x starts as a copy of it.
///
/// Fields
/// ------
/// - `x`: `Array1<f64>`
///   Current trend estimate, length n.
/// - `z`: `Array1<f64>`
///   Auxiliary variable approximating Dx, length n − 1.
/// - `u`: `Array1<f64>`
///   Scaled dual variable, length n − 1.
/// - `iteration`: `usize`
///   Number of completed sweeps.
/// - `primal_res`, `dual_res`: `f64`
///   Residual norms of the latest sweep; `f64::INFINITY` before the
///   first.
///
/// Invariants
/// ----------
/// - Shapes are fixed at construction; `step` panics (via the operator
///   asserts) if handed an operator or solver of mismatched dimension.
/// - After a `step` that returned `Ok(true)`, `primal_res < tol` and
///   `dual_res < tol` for the tolerance passed to that call.
///
/// Performance
/// -----------
/// - One linear solve, two operator applications, and a handful of
///   O(n) vector passes per sweep.
#[derive(Debug, Clone)]
pub struct AdmmState {
    x: Array1<f64>,
    z: Array1<f64>,
    u: Array1<f64>,
    iteration: usize,
    primal_res: f64,
    dual_res: f64,
}

impl AdmmState {
    /// Initialize the recursion from the observed signal.
    ///
    /// x starts at the signal itself (a better warm start than zeros
    /// for a fidelity-anchored objective); z and u start at zero in
    /// difference space.
    pub fn new(signal: ArrayView1<'_, f64>) -> Self {
        let n = signal.len();
        Self {
            x: signal.to_owned(),
            z: Array1::zeros(n - 1),
            u: Array1::zeros(n - 1),
            iteration: 0,
            primal_res: f64::INFINITY,
            dual_res: f64::INFINITY,
        }
    }

    /// Advance the recursion by one full ADMM sweep.
    ///
    /// Performs, in order:
    /// 1. x-update: solve `(I + DᵗD) x = y + Dᵗ(z − u)`.
    /// 2. z-update: elementwise soft-threshold of `Dx + u` at level λ.
    /// 3. Residuals: primal `‖Dx − z_new‖₂`, dual `‖Dᵗ(z_new − z_old)‖₂`.
    /// 4. Dual ascent: `u ← u + Dx − z_new` (skipped once converged; the
    ///    dual has no further role).
    ///
    /// Parameters
    /// ----------
    /// - `signal`: `ArrayView1<f64>`
    ///   The observed series y; constant across sweeps.
    /// - `lambda`: `f64`
    ///   Soft-threshold level, already validated as finite and positive.
    /// - `op`: `&DifferenceOperator`
    ///   Difference operator matching the signal length.
    /// - `solver`: `&dyn LinearSystemSolver`
    ///   Factorization of `I + DᵗD` for the same length.
    /// - `tol`: `f64`
    ///   Joint threshold for both residual norms.
    ///
    /// Returns
    /// -------
    /// `FilterResult<bool>`
    ///   - `Ok(true)` if both residual norms fell strictly below `tol`
    ///     in this sweep.
    ///   - `Ok(false)` otherwise.
    ///
    /// Errors
    /// ------
    /// - `FilterError::NumericalDivergence` if either residual norm is
    ///   non-finite after the sweep.
    /// - Any error propagated from the linear solver.
    ///
    /// Panics
    /// ------
    /// - Panics on shape mismatches between the state, the operator,
    ///   and the solver; the validated entry points rule these out.
    pub fn step(
        &mut self,
        signal: ArrayView1<'_, f64>,
        lambda: f64,
        op: &DifferenceOperator,
        solver: &dyn LinearSystemSolver,
        tol: f64,
    ) -> FilterResult<bool> {
        // x-update.
        let rhs = &signal + &op.apply_transpose((&self.z - &self.u).view());
        let x_new = solver.solve(rhs.view())?;

        // z-update by soft-thresholding Dx + u at level λ.
        let dx = op.apply(x_new.view());
        let z_new = (&dx + &self.u).mapv(|t| t.signum() * (t.abs() - lambda).max(0.0));

        // Residuals of this sweep.
        let primal_gap = &dx - &z_new;
        let dual_gap = op.apply_transpose((&z_new - &self.z).view());
        let primal_res = primal_gap.dot(&primal_gap).sqrt();
        let dual_res = dual_gap.dot(&dual_gap).sqrt();

        self.iteration += 1;
        if !primal_res.is_finite() || !dual_res.is_finite() {
            return Err(FilterError::NumericalDivergence { iteration: self.iteration });
        }

        let converged = primal_res < tol && dual_res < tol;
        if !converged {
            self.u = &self.u + &primal_gap;
        }

        self.x = x_new;
        self.z = z_new;
        self.primal_res = primal_res;
        self.dual_res = dual_res;
        Ok(converged)
    }

    /// Current trend estimate.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    /// Number of completed sweeps.
    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Primal residual norm of the latest sweep.
    pub fn primal_res(&self) -> f64 {
        self.primal_res
    }

    /// Dual residual norm of the latest sweep.
    pub fn dual_res(&self) -> f64 {
        self.dual_res
    }

    /// Consume the state, yielding the trend estimate.
    pub fn into_trend(self) -> Array1<f64> {
        self.x
    }
}
