//! filtering::linear_solver — factored solvers for (I + DᵗD) x = b.
//!
//! Purpose
//! -------
//! Provide the linear-system capability behind the ADMM x-update. The
//! system matrix `I + DᵗD` depends only on the signal length n, so each
//! solver factors it exactly once per filtering invocation and then
//! performs O(n) (tridiagonal) or O(n²) (dense back-substitution)
//! solves per iteration.
//!
//! Key behaviors
//! -------------
//! - Define the [`LinearSystemSolver`] trait as the seam between the
//!   ADMM iteration and the factorization strategy.
//! - Implement [`TridiagonalSolver`], a Thomas-algorithm factorization
//!   exploiting the tridiagonal Gram structure of the bidiagonal
//!   difference operator: diagonal `[2, 3, …, 3, 2]`, off-diagonals −1.
//! - Implement [`DenseSolver`], a nalgebra Cholesky fallback that must
//!   produce numerically equivalent solutions; held to that by unit
//!   test rather than selected at runtime.
//!
//! Invariants & assumptions
//! ------------------------
//! - `I + DᵗD` is symmetric positive definite for every n ≥ 2, so both
//!   factorizations succeed in exact arithmetic. Breakdown is still
//!   surfaced as a distinct error kind rather than silently returning
//!   garbage, in case of overflow or pathological inputs.
//! - `solve` expects a right-hand side of length `dim()`; a mismatch is
//!   a programming error and panics, as with the operator applications.
//! - Factorizations are immutable after construction; `solve` takes
//!   `&self` and is safe to call any number of times.
//!
//! Conventions
//! -----------
//! - No explicit matrix inverse is ever formed; the tridiagonal path
//!   stores the forward-elimination pivots and modified super-diagonal,
//!   the dense path stores the Cholesky factor.
//! - Purely numeric; no I/O and no logging.
//!
//! Downstream usage
//! ----------------
//! - The filter driver builds one [`TridiagonalSolver`] per invocation
//!   and threads it through `AdmmState::step` as
//!   `&dyn LinearSystemSolver`.
//! - [`DenseSolver`] exists as the behavior-preserving fallback and for
//!   cross-checking the banded path.
//!
//! Testing notes
//! -------------
//! - Unit tests verify each solver against the residual of the original
//!   system (multiply back through `I + DᵗD`), cross-check the two
//!   implementations on the same right-hand side, and exercise the
//!   minimum size n = 2.

use crate::filtering::{
    errors::{FilterError, FilterResult},
    operator::DifferenceOperator,
};
use nalgebra::{Cholesky, DMatrix, DVector, Dyn};
use ndarray::{Array1, ArrayView1};

/// Linear-system capability used by the ADMM x-update.
///
/// Implementors hold a factorization of `I + DᵗD` for a fixed signal
/// length and solve against arbitrary right-hand sides of that length.
/// All implementations must agree to within floating-point tolerance;
/// the iteration's semantics do not depend on the strategy chosen.
pub trait LinearSystemSolver {
    /// Dimension n of the factored system.
    fn dim(&self) -> usize;

    /// Solve `(I + DᵗD) x = rhs` for x.
    ///
    /// # Errors
    /// - A `FilterError` numerical-failure variant if the factorization
    ///   or substitution produces non-finite values.
    ///
    /// # Panics
    /// - Panics if `rhs.len() != self.dim()`.
    fn solve(&self, rhs: ArrayView1<'_, f64>) -> FilterResult<Array1<f64>>;
}

/// TridiagonalSolver — Thomas-algorithm factorization of I + DᵗD.
///
/// Purpose
/// -------
/// Exploit the tridiagonal structure of `I + DᵗD` (sub- and
/// super-diagonals identically −1) to factor once in O(n) and solve in
/// O(n) per right-hand side. This is the production path sized for the
/// daily-frequency series the filter targets.
///
/// Parameters
/// ----------
/// Constructed via [`TridiagonalSolver::gram_plus_identity`]:
/// - `op`: `&DifferenceOperator`
///   Operator whose Gram matrix defines the system; only its length is
///   consumed.
///
/// Fields
/// ------
/// - `denom`: `Vec<f64>`
///   Forward-elimination pivots, length n.
/// - `cprime`: `Vec<f64>`
///   Modified super-diagonal coefficients, length n − 1.
///
/// Invariants
/// ----------
/// - All pivots are finite and bounded away from zero after successful
///   construction (for this SPD system they lie in (1, 3]).
///
/// Performance
/// -----------
/// - Construction and each solve are O(n) with a single output
///   allocation per solve; nothing is recomputed across iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct TridiagonalSolver {
    denom: Vec<f64>,
    cprime: Vec<f64>,
}

impl TridiagonalSolver {
    /// Factor `I + DᵗD` for the given difference operator.
    ///
    /// The bands follow from D being bidiagonal: diagonal entries are
    /// 2 at both ends and 3 in the interior, off-diagonals are −1.
    /// Forward elimination stores the pivot sequence and the modified
    /// super-diagonal for reuse across all iterations of one call.
    ///
    /// # Errors
    /// - `FilterError::SingularSystem { row }` if a pivot vanishes or
    ///   becomes non-finite. This cannot happen for the SPD system in
    ///   exact arithmetic; the guard exists for overflow scenarios.
    pub fn gram_plus_identity(op: &DifferenceOperator) -> FilterResult<Self> {
        let n = op.signal_len();
        let diag = |i: usize| if i == 0 || i == n - 1 { 2.0 } else { 3.0 };

        let mut denom = vec![0.0_f64; n];
        let mut cprime = vec![0.0_f64; n - 1];

        denom[0] = diag(0);
        cprime[0] = -1.0 / denom[0];
        for i in 1..n {
            // Sub- and super-diagonal entries are both -1.
            let pivot = diag(i) + cprime[i - 1];
            if !pivot.is_finite() || pivot.abs() < f64::EPSILON {
                return Err(FilterError::SingularSystem { row: i });
            }
            denom[i] = pivot;
            if i < n - 1 {
                cprime[i] = -1.0 / pivot;
            }
        }

        Ok(Self { denom, cprime })
    }
}

impl LinearSystemSolver for TridiagonalSolver {
    fn dim(&self) -> usize {
        self.denom.len()
    }

    fn solve(&self, rhs: ArrayView1<'_, f64>) -> FilterResult<Array1<f64>> {
        let n = self.denom.len();
        assert_eq!(rhs.len(), n, "solver factored for dimension {} given rhs of length {}", n, rhs.len());

        // Forward sweep: d[i] = (rhs[i] - a*d[i-1]) / pivot with a = -1.
        let mut d = vec![0.0_f64; n];
        d[0] = rhs[0] / self.denom[0];
        for i in 1..n {
            d[i] = (rhs[i] + d[i - 1]) / self.denom[i];
        }

        // Back substitution: x[i] = d[i] - cprime[i] * x[i+1].
        let mut x = Array1::<f64>::zeros(n);
        x[n - 1] = d[n - 1];
        for i in (0..n - 1).rev() {
            x[i] = d[i] - self.cprime[i] * x[i + 1];
        }
        Ok(x)
    }
}

/// DenseSolver — Cholesky fallback over the materialized system.
///
/// Purpose
/// -------
/// Factor `I + DᵗD` as a dense symmetric positive definite matrix via
/// nalgebra's Cholesky decomposition. Mathematically equivalent to the
/// banded path and kept as the behavior-preserving fallback; the
/// tridiagonal solver remains the production choice.
///
/// Performance
/// -----------
/// - O(n³) construction and O(n²) per solve; acceptable for the
///   hundreds-to-low-thousands signal lengths this engine targets, but
///   strictly dominated by [`TridiagonalSolver`].
#[derive(Debug, Clone)]
pub struct DenseSolver {
    chol: Cholesky<f64, Dyn>,
    n: usize,
}

impl DenseSolver {
    /// Build and factor the dense `I + DᵗD` for the given operator.
    ///
    /// # Errors
    /// - `FilterError::FactorizationFailed` if the Cholesky
    ///   decomposition does not exist, which for this SPD system only
    ///   occurs under overflow or non-finite intermediate values.
    pub fn gram_plus_identity(op: &DifferenceOperator) -> FilterResult<Self> {
        let n = op.signal_len();
        let system = DMatrix::<f64>::from_fn(n, n, |i, j| {
            if i == j {
                if i == 0 || i == n - 1 { 2.0 } else { 3.0 }
            } else if i.abs_diff(j) == 1 {
                -1.0
            } else {
                0.0
            }
        });
        let chol = system.cholesky().ok_or(FilterError::FactorizationFailed)?;
        Ok(Self { chol, n })
    }
}

impl LinearSystemSolver for DenseSolver {
    fn dim(&self) -> usize {
        self.n
    }

    fn solve(&self, rhs: ArrayView1<'_, f64>) -> FilterResult<Array1<f64>> {
        assert_eq!(
            rhs.len(),
            self.n,
            "solver factored for dimension {} given rhs of length {}",
            self.n,
            rhs.len()
        );
        let b = DVector::from_iterator(self.n, rhs.iter().copied());
        let x = self.chol.solve(&b);
        Ok(Array1::from_iter(x.iter().copied()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Correctness of the tridiagonal solve, checked by multiplying the
    //   solution back through I + DᵗD.
    // - Agreement between the tridiagonal and dense Cholesky paths.
    // - The minimum system size n = 2.
    //
    // They intentionally DO NOT cover:
    // - ADMM-level behavior; the iteration is exercised in
    //   `filtering::state` and the integration tests.
    // -------------------------------------------------------------------------

    /// Multiply through I + DᵗD without forming the matrix.
    fn gram_apply(x: &Array1<f64>) -> Array1<f64> {
        let n = x.len();
        let mut out = Array1::<f64>::zeros(n);
        for i in 0..n {
            let diag = if i == 0 || i == n - 1 { 2.0 } else { 3.0 };
            out[i] = diag * x[i];
            if i > 0 {
                out[i] -= x[i - 1];
            }
            if i < n - 1 {
                out[i] -= x[i + 1];
            }
        }
        out
    }

    #[test]
    // Purpose
    // -------
    // Verify that the Thomas solve satisfies the original system by
    // multiplying the solution back through I + DᵗD.
    //
    // Given
    // -----
    // - The factorization for n = 7 and a mixed-sign right-hand side.
    //
    // Expect
    // ------
    // - `(I + DᵗD) x` reproduces the right-hand side to within 1e-10.
    fn tridiagonal_solver_solution_satisfies_system() {
        // Arrange
        let op = DifferenceOperator::new(7).unwrap();
        let solver = TridiagonalSolver::gram_plus_identity(&op).unwrap();
        let rhs = array![1.0_f64, -2.0, 0.5, 4.0, -1.5, 0.0, 2.5];

        // Act
        let x = solver.solve(rhs.view()).unwrap();
        let back = gram_apply(&x);

        // Assert
        for (i, (lhs, b)) in back.iter().zip(rhs.iter()).enumerate() {
            assert!(
                (lhs - b).abs() < 1e-10,
                "residual at row {i}: got {lhs}, expected {b}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Cross-check the tridiagonal and dense Cholesky solvers on the
    // same right-hand side; the fallback must be numerically
    // equivalent.
    //
    // Given
    // -----
    // - Both factorizations for n = 9 and a common right-hand side.
    //
    // Expect
    // ------
    // - The two solutions agree elementwise to within 1e-10.
    fn dense_solver_agrees_with_tridiagonal_solver() {
        // Arrange
        let op = DifferenceOperator::new(9).unwrap();
        let banded = TridiagonalSolver::gram_plus_identity(&op).unwrap();
        let dense = DenseSolver::gram_plus_identity(&op).unwrap();
        let rhs = array![0.3_f64, -1.0, 2.2, 0.0, -0.4, 1.7, -2.5, 0.9, 1.1];

        // Act
        let x_banded = banded.solve(rhs.view()).unwrap();
        let x_dense = dense.solve(rhs.view()).unwrap();

        // Assert
        assert_eq!(banded.dim(), dense.dim());
        for (i, (a, b)) in x_banded.iter().zip(x_dense.iter()).enumerate() {
            assert!(
                (a - b).abs() < 1e-10,
                "solver mismatch at index {i}: banded = {a}, dense = {b}"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Exercise the minimum system size n = 2, where I + DᵗD is the
    // 2 × 2 matrix [[2, -1], [-1, 2]].
    //
    // Given
    // -----
    // - The factorization for n = 2 and rhs = [1, 0].
    //
    // Expect
    // ------
    // - The solution is [2/3, 1/3], the exact inverse applied to rhs.
    fn tridiagonal_solver_handles_minimum_size() {
        // Arrange
        let op = DifferenceOperator::new(2).unwrap();
        let solver = TridiagonalSolver::gram_plus_identity(&op).unwrap();
        let rhs = array![1.0_f64, 0.0];

        // Act
        let x = solver.solve(rhs.view()).unwrap();

        // Assert
        assert!((x[0] - 2.0 / 3.0).abs() < 1e-12, "x[0] = {}", x[0]);
        assert!((x[1] - 1.0 / 3.0).abs() < 1e-12, "x[1] = {}", x[1]);
    }
}
