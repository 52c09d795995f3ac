//! trendfilter — L1 trend filtering for noisy series, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the ADMM trend-filtering engine to Python via the
//! `_trendfilter` extension module. When the `python-bindings` feature is
//! enabled, this module defines the Python-facing functions and result
//! class used by the `trendfilter` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust module (`filtering`) as the public crate
//!   surface.
//! - Define the `#[pyfunction]` wrappers, the `FilterDiagnostics`
//!   `#[pyclass]`, and the `#[pymodule]` initializer for the
//!   `_trendfilter` Python extension.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner `filtering`
//!   module; this file performs only FFI glue, input conversion, and
//!   error mapping.
//! - When `python-bindings` is enabled, the Python-visible functions
//!   mirror the signatures and defaults of their Rust counterparts.
//!
//! Conventions
//! -----------
//! - Python-exposed items live under `_trendfilter` and are typically
//!   wrapped by thin pure-Python facades in the top-level `trendfilter`
//!   package.
//! - Errors from core Rust code are propagated as `FilterError` values
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on `filtering` and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_trendfilter` module
//!   defined here and wraps its functions in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in `filtering` and
//!   by the crate-level integration tests.
//! - Smoke tests for the PyO3 bindings verify that the functions can be
//!   called and their results round-tripped from Python.

pub mod filtering;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    filtering::{
        filter::{l1_trend_filter_diagnostics, l1_trend_filter_with_opts},
        options::{DEFAULT_MAX_ITER, DEFAULT_TOL},
        outcome::FilterOutcome,
    },
    utils::{extract_f64_array, extract_filter_options},
};

/// FilterDiagnostics — Python-facing result of a diagnostic solve.
///
/// Purpose
/// -------
/// Present the trend and solve diagnostics from [`FilterOutcome`] to
/// Python code in a lightweight, read-only wrapper.
///
/// Key behaviors
/// -------------
/// - Hold the extracted trend alongside the convergence flag, iteration
///   count, and final residual norms.
/// - Provide accessors that copy the underlying values into
///   Python-owned containers.
///
/// Parameters
/// ----------
/// Instances are constructed internally by `filter_diagnostics` and are
/// not created directly by user code.
///
/// Fields
/// ------
/// - `inner`: [`FilterOutcome`]
///   Full solve result from the trend filter.
///
/// Invariants
/// ----------
/// - `inner` always corresponds to a completed solve; budget exhaustion
///   is visible as `converged == False`, never as an exception.
///
/// Performance
/// -----------
/// - The `trend` accessor is O(n) when cloning into Python; the other
///   fields are scalar copies.
///
/// Notes
/// -----
/// - This type is part of the Python FFI surface; Rust code should
///   prefer using [`FilterOutcome`] directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "trendfilter")]
pub struct FilterDiagnostics {
    /// Underlying Rust FilterOutcome.
    pub inner: FilterOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl FilterDiagnostics {
    #[getter]
    pub fn trend(&self) -> Vec<f64> {
        self.inner.trend.to_vec()
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.inner.converged
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.inner.iterations
    }

    #[getter]
    pub fn primal_res(&self) -> f64 {
        self.inner.primal_res
    }

    #[getter]
    pub fn dual_res(&self) -> f64 {
        self.inner.dual_res
    }
}

/// Extract the L1 trend of a noisy series.
///
/// Mirrors the Rust entry point `l1_trend_filter_with_opts`: validates
/// the signal and λ, runs the ADMM solve, and returns the trend as a
/// list of floats. Budget exhaustion returns the final iterate without
/// further indication; use `filter_diagnostics` when the distinction
/// matters.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    text_signature = "(signal, lambda_, /, max_iter=100000, tol=1e-3)",
    signature = (signal, lambda_, max_iter = DEFAULT_MAX_ITER, tol = DEFAULT_TOL)
)]
pub fn l1_trend_filter<'py>(
    py: Python<'py>, signal: &Bound<'py, PyAny>, lambda_: f64, max_iter: usize, tol: f64,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, signal)?;
    let data = arr.as_slice().map_err(|_| {
        PyValueError::new_err("signal must be a 1-D contiguous float64 array or sequence")
    })?;
    let opts = extract_filter_options(max_iter, tol, None)?;
    let trend = l1_trend_filter_with_opts(data, lambda_, &opts)?;
    Ok(trend.to_vec())
}

/// Extract the L1 trend together with solve diagnostics.
///
/// Returns a [`FilterDiagnostics`] carrying the trend, the convergence
/// flag, the number of iterations used, and the final residual norms.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    text_signature = "(signal, lambda_, /, max_iter=100000, tol=1e-3)",
    signature = (signal, lambda_, max_iter = DEFAULT_MAX_ITER, tol = DEFAULT_TOL)
)]
pub fn filter_diagnostics<'py>(
    py: Python<'py>, signal: &Bound<'py, PyAny>, lambda_: f64, max_iter: usize, tol: f64,
) -> PyResult<FilterDiagnostics> {
    let arr = extract_f64_array(py, signal)?;
    let data = arr.as_slice().map_err(|_| {
        PyValueError::new_err("signal must be a 1-D contiguous float64 array or sequence")
    })?;
    let opts = extract_filter_options(max_iter, tol, None)?;
    let outcome = l1_trend_filter_diagnostics(data, lambda_, &opts, None)?;
    Ok(FilterDiagnostics { inner: outcome })
}

/// _trendfilter — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_trendfilter` Python module used by the public
/// `trendfilter` package.
///
/// Key behaviors
/// -------------
/// - Register the filtering functions and the `FilterDiagnostics`
///   result class on the module.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_trendfilter`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Errors
/// ------
/// - `PyErr`
///   If adding functions or classes to the module fails.
///
/// Panics
/// ------
/// - Never panics under normal operation; all failures are mapped into
///   `PyErr`.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing
///   the compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _trendfilter<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(l1_trend_filter, m)?)?;
    m.add_function(wrap_pyfunction!(filter_diagnostics, m)?)?;
    m.add_class::<FilterDiagnostics>()?;
    Ok(())
}
