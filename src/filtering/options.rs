//! filtering::options — solver configuration for the trend filter.
//!
//! Purpose
//! -------
//! Collect the configuration knobs for an ADMM trend-filtering run in
//! one validated struct: the residual tolerance, the iteration budget,
//! and the cadence at which an optional progress observer is invoked.
//!
//! Key behaviors
//! -------------
//! - Represent solver configuration via [`FilterOptions`], built either
//!   through the validating constructor [`FilterOptions::new`] or the
//!   documented [`Default`] (`max_iter = 100_000`, `tol = 1e-3`,
//!   progress reporting disabled).
//! - Reuse the per-field verifiers from `filtering::validation` so that
//!   options constructed through the builder are valid by construction.
//!
//! Invariants & assumptions
//! ------------------------
//! - `tol` is finite and strictly positive; it bounds *both* residual
//!   norms jointly (there is no separate absolute/relative scaling).
//! - `max_iter ≥ 1`; the iteration loop is always bounded by it.
//! - `progress_every`, when `Some`, is ≥ 1; `None` disables reporting.
//! - Fields are public for ergonomic overrides; entry points re-verify
//!   them, so hand-mutated options cannot smuggle invalid values past
//!   validation.
//!
//! Conventions
//! -----------
//! - ρ (the augmented Lagrangian parameter) is fixed at 1 and therefore
//!   deliberately *not* configurable here.
//! - This module provides plain data carriers that never panic; invalid
//!   configuration is rejected as [`FilterError`] values.
//!
//! Downstream usage
//! ----------------
//! - Build a `FilterOptions` (or start from `FilterOptions::default()`)
//!   and pass it to `l1_trend_filter_with_opts` or
//!   `l1_trend_filter_diagnostics`.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that `new` preserves valid inputs, rejects each
//!   invalid field, and that `Default` matches the documented values.

use crate::filtering::{
    errors::FilterResult,
    validation::{verify_max_iter, verify_progress_every, verify_tol},
};

/// Default iteration budget, matching the reference implementation.
pub const DEFAULT_MAX_ITER: usize = 100_000;

/// Default joint residual tolerance, matching the reference implementation.
pub const DEFAULT_TOL: f64 = 1e-3;

/// FilterOptions — run-time configuration for the ADMM trend filter.
///
/// Purpose
/// -------
/// Bundle the stopping criteria and progress cadence for one filtering
/// invocation. The solve terminates when both residual norms fall
/// strictly below `tol`, or after `max_iter` iterations, whichever
/// comes first.
///
/// Parameters
/// ----------
/// Constructed via:
/// - `FilterOptions::new(max_iter, tol, progress_every)` — validated.
/// - `FilterOptions::default()` — the reference defaults.
///
/// Fields
/// ------
/// - `max_iter`: `usize`
///   Hard cap on ADMM iterations; budget exhaustion is a normal, silent
///   termination path, not an error.
/// - `tol`: `f64`
///   Threshold applied jointly (AND) to the primal and dual residual
///   norms.
/// - `progress_every`: `Option<usize>`
///   Invoke the progress observer every this many iterations; `None`
///   disables reporting. Has no effect on the numerical result.
///
/// Invariants
/// ----------
/// - A value returned by [`FilterOptions::new`] satisfies `tol > 0`,
///   `max_iter ≥ 1`, and `progress_every != Some(0)`.
///
/// Performance
/// -----------
/// - Small `Copy` struct; cheap to pass by value or embed in larger
///   configuration objects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterOptions {
    /// Hard cap on the number of ADMM iterations.
    pub max_iter: usize,
    /// Joint threshold for the primal and dual residual norms.
    pub tol: f64,
    /// Observer cadence in iterations; `None` disables reporting.
    pub progress_every: Option<usize>,
}

impl FilterOptions {
    /// Construct validated solver options.
    ///
    /// # Rules
    /// - `tol` must be **finite and strictly positive**.
    /// - `max_iter` must be `≥ 1`.
    /// - `progress_every`, if provided, must be `≥ 1`.
    ///
    /// # Errors
    /// - [`FilterError::InvalidTol`](crate::filtering::errors::FilterError::InvalidTol)
    ///   for a non-finite or non-positive tolerance.
    /// - [`FilterError::InvalidMaxIter`](crate::filtering::errors::FilterError::InvalidMaxIter)
    ///   if `max_iter == 0`.
    /// - [`FilterError::InvalidProgressEvery`](crate::filtering::errors::FilterError::InvalidProgressEvery)
    ///   if `progress_every == Some(0)`.
    pub fn new(
        max_iter: usize, tol: f64, progress_every: Option<usize>,
    ) -> FilterResult<Self> {
        verify_tol(tol)?;
        verify_max_iter(max_iter)?;
        verify_progress_every(progress_every)?;
        Ok(Self { max_iter, tol, progress_every })
    }
}

impl Default for FilterOptions {
    /// Reference defaults: `max_iter = 100_000`, `tol = 1e-3`, progress
    /// reporting disabled.
    fn default() -> Self {
        Self { max_iter: DEFAULT_MAX_ITER, tol: DEFAULT_TOL, progress_every: None }
    }
}
