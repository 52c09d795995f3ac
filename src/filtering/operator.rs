//! filtering::operator — the discrete first-difference operator D.
//!
//! Purpose
//! -------
//! Build and apply the (n−1) × n first-difference operator
//! `(Dx)[i] = x[i+1] − x[i]` that couples the quadratic fidelity term
//! and the L1 smoothness term in the trend-filter objective. The
//! operator is derived solely from the signal length and is read-only
//! for the lifetime of one solve.
//!
//! Key behaviors
//! -------------
//! - Construct a [`DifferenceOperator`] for a given signal length n,
//!   rejecting n < 2.
//! - Apply D and its adjoint Dᵗ without ever materializing the matrix;
//!   both applications are O(n).
//! - Materialize the dense matrix on demand ([`DifferenceOperator::to_dense`])
//!   for the dense solver fallback and for tests.
//!
//! Invariants & assumptions
//! ------------------------
//! - `signal_len() == n ≥ 2` and `diff_len() == n − 1` for the lifetime
//!   of the value.
//! - `apply` expects a length-n input and yields length n−1; `apply_transpose`
//!   expects length n−1 and yields length n. Length mismatches are
//!   programming errors and panic, mirroring the private-helper
//!   convention used elsewhere in this crate: public entry points
//!   guarantee the shapes via validation.
//!
//! Conventions
//! -----------
//! - Row i of D has −1 at column i and +1 at column i+1, all other
//!   entries zero.
//! - Purely numeric; no I/O, no logging, no allocation beyond the
//!   output vector of each application.
//!
//! Downstream usage
//! ----------------
//! - The ADMM state uses `apply` for Dx in the z-update and primal
//!   residual, and `apply_transpose` for the x-update right-hand side
//!   and the dual residual.
//! - The linear solvers derive the tridiagonal bands (or dense form) of
//!   `I + DᵗD` from the operator's length alone.
//!
//! Testing notes
//! -------------
//! - Unit tests verify the rejection of n < 2, the forward difference
//!   on a known vector, the adjoint identity ⟨Dx, v⟩ = ⟨x, Dᵗv⟩, and
//!   agreement between `apply` and the dense materialization.

use crate::filtering::errors::{FilterError, FilterResult};
use ndarray::{Array1, Array2, ArrayView1};

/// DifferenceOperator — matrix-free first-difference operator.
///
/// Purpose
/// -------
/// Represent the (n−1) × n operator D for a fixed signal length n,
/// supporting forward and adjoint application without storing the
/// matrix.
///
/// Parameters
/// ----------
/// Constructed via [`DifferenceOperator::new`]:
/// - `n`: `usize`
///   Signal length; must be at least 2.
///
/// Fields
/// ------
/// - `n`: `usize`
///   The signal length the operator was built for.
///
/// Invariants
/// ----------
/// - `n ≥ 2` after successful construction; the operator shape
///   (n−1, n) is fixed thereafter.
///
/// Performance
/// -----------
/// - Holds a single `usize`; `Copy` and free to pass around. Both
///   applications run in O(n) with one output allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifferenceOperator {
    n: usize,
}

impl DifferenceOperator {
    /// Build the first-difference operator for a length-`n` signal.
    ///
    /// Parameters
    /// ----------
    /// - `n`: `usize`
    ///   Signal length. A difference operator requires at least two
    ///   points.
    ///
    /// Returns
    /// -------
    /// `FilterResult<DifferenceOperator>`
    ///   - `Ok(op)` with shape (n−1, n) when `n ≥ 2`.
    ///   - `Err(FilterError::SignalTooShort)` when `n < 2`.
    ///
    /// Errors
    /// ------
    /// - `FilterError::SignalTooShort { n }` for `n < 2`.
    ///
    /// Panics
    /// ------
    /// - Never panics.
    pub fn new(n: usize) -> FilterResult<Self> {
        if n < 2 {
            return Err(FilterError::SignalTooShort { n });
        }
        Ok(Self { n })
    }

    /// Signal length n the operator acts on.
    pub fn signal_len(&self) -> usize {
        self.n
    }

    /// Number of first differences, n − 1.
    pub fn diff_len(&self) -> usize {
        self.n - 1
    }

    /// Apply D: map a length-n vector to its n−1 consecutive differences.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `ArrayView1<f64>`
    ///   Input of length `signal_len()`.
    ///
    /// Returns
    /// -------
    /// `Array1<f64>`
    ///   The vector `[x[1]−x[0], …, x[n−1]−x[n−2]]` of length n−1.
    ///
    /// Panics
    /// ------
    /// - Panics if `x.len() != signal_len()`; shapes are guaranteed by
    ///   the validated entry points.
    pub fn apply(&self, x: ArrayView1<'_, f64>) -> Array1<f64> {
        assert_eq!(x.len(), self.n, "operator built for length {} applied to length {}", self.n, x.len());
        Array1::from_iter((0..self.n - 1).map(|i| x[i + 1] - x[i]))
    }

    /// Apply Dᵗ: map a length-(n−1) vector back to signal space.
    ///
    /// Parameters
    /// ----------
    /// - `v`: `ArrayView1<f64>`
    ///   Input of length `diff_len()`.
    ///
    /// Returns
    /// -------
    /// `Array1<f64>`
    ///   The vector with `(Dᵗv)[0] = −v[0]`, `(Dᵗv)[i] = v[i−1] − v[i]`
    ///   for interior i, and `(Dᵗv)[n−1] = v[n−2]`.
    ///
    /// Panics
    /// ------
    /// - Panics if `v.len() != diff_len()`; shapes are guaranteed by
    ///   the validated entry points.
    pub fn apply_transpose(&self, v: ArrayView1<'_, f64>) -> Array1<f64> {
        assert_eq!(
            v.len(),
            self.n - 1,
            "adjoint of operator built for length {} applied to length {}",
            self.n,
            v.len()
        );
        let mut out = Array1::<f64>::zeros(self.n);
        out[0] = -v[0];
        for i in 1..self.n - 1 {
            out[i] = v[i - 1] - v[i];
        }
        out[self.n - 1] = v[self.n - 2];
        out
    }

    /// Materialize D as a dense (n−1) × n matrix.
    ///
    /// Used by the dense solver fallback and by tests; the iteration
    /// itself stays matrix-free.
    pub fn to_dense(&self) -> Array2<f64> {
        let mut d = Array2::<f64>::zeros((self.n - 1, self.n));
        for i in 0..self.n - 1 {
            d[[i, i]] = -1.0;
            d[[i, i + 1]] = 1.0;
        }
        d
    }
}
