//! filtering — L1 trend filtering via ADMM.
//!
//! Purpose
//! -------
//! Decompose a noisy one-dimensional series into a slowly varying,
//! piecewise-linear trend by solving
//! `minimize (1/2)‖x − y‖² + λ‖Dx‖₁` with the scaled-form ADMM
//! recursion. This subtree holds the entire engine: the difference
//! operator, factored linear solvers, the iteration state, solver
//! configuration, validation, and the public entry points.
//!
//! Key behaviors
//! -------------
//! - Expose the filter through three entry points of increasing
//!   richness: [`l1_trend_filter`] (reference defaults, bare trend),
//!   [`l1_trend_filter_with_opts`] (explicit [`FilterOptions`]), and
//!   [`l1_trend_filter_diagnostics`] ([`FilterOutcome`] with solve
//!   diagnostics and an optional [`ProgressObserver`]).
//! - Centralize input guards in [`validate_input`], ensuring signal
//!   length, finiteness, λ, and option fields are checked once in a
//!   consistent way before any iteration is spent.
//! - Provide a dedicated error type [`FilterError`] and result alias
//!   [`FilterResult`], plus a conversion layer to Python exceptions
//!   when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - ρ = 1 throughout; the x-update system is exactly `I + DᵗD` and is
//!   factored once per invocation (Thomas algorithm on the tridiagonal
//!   bands, with a dense Cholesky fallback behind the same
//!   [`LinearSystemSolver`] trait).
//! - Convergence requires *both* the primal norm `‖Dx − z‖₂` and the
//!   dual norm `‖Dᵗ(z_new − z_old)‖₂` strictly below the tolerance in
//!   the same iteration; budget exhaustion is a normal, silent
//!   termination mode.
//! - Modules report failures via [`FilterResult`] and never panic on
//!   user-facing invalid inputs; panics indicate programming errors
//!   such as shape mismatches the validated entry points rule out.
//!
//! Conventions
//! -----------
//! - Larger λ yields flatter trends with fewer slope changes; the
//!   output is a smoothed version of the input, not a resampled or
//!   shortened one.
//! - Error messages are phrased in terms of domain constraints such as
//!   "λ must be positive" or "n ≥ 2" rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use trendfilter::filtering::l1_trend_filter;
//!
//!   # let signal = vec![1.0_f64, 1.4, 0.9, 1.6, 1.2];
//!   let trend = l1_trend_filter(&signal, 20.0)?;
//!   # Ok::<(), trendfilter::filtering::FilterError>(())
//!   ```
//!
//!   and only refers to `filtering::state` or `filtering::linear_solver`
//!   directly when stepping the recursion manually or swapping the
//!   factorization strategy.
//! - Python bindings expose thin wrappers around the same entry points;
//!   they rely on `From<FilterError> for PyErr` to raise `ValueError`
//!   instances instead of returning [`FilterResult`] explicitly.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages and payload
//!   embedding; [`validation`] exercises every guard branch;
//!   [`operator`] checks the adjoint identity and dense agreement;
//!   [`linear_solver`] cross-checks the tridiagonal and dense paths;
//!   [`state`] hand-checks the recursion on tiny signals; [`filter`]
//!   covers entry-point equivalence, budget exhaustion, and observer
//!   cadence.
//! - End-to-end behavior on realistic noisy signals lives in the
//!   crate-level integration tests.

pub mod errors;
pub mod filter;
pub mod linear_solver;
pub mod operator;
pub mod options;
pub mod outcome;
pub mod state;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{FilterError, FilterResult};
pub use self::filter::{l1_trend_filter, l1_trend_filter_diagnostics, l1_trend_filter_with_opts};
pub use self::linear_solver::{DenseSolver, LinearSystemSolver, TridiagonalSolver};
pub use self::operator::DifferenceOperator;
pub use self::options::{DEFAULT_MAX_ITER, DEFAULT_TOL, FilterOptions};
pub use self::outcome::FilterOutcome;
pub use self::state::{AdmmState, ProgressObserver};
pub use self::validation::validate_input;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use trendfilter::filtering::prelude::*;
//
// to import the main filtering surface in a single line.

pub mod prelude {
    pub use super::errors::{FilterError, FilterResult};
    pub use super::filter::{
        l1_trend_filter, l1_trend_filter_diagnostics, l1_trend_filter_with_opts,
    };
    pub use super::options::FilterOptions;
    pub use super::outcome::FilterOutcome;
    pub use super::state::ProgressObserver;
}
