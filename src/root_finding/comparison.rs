//! Side-by-side runs of the square-root and derivative strategies.
//!
//! [`compare_sqrt_methods`]       : newton vs heron vs `f64::sqrt` for one number
//! [`compare_derivative_methods`] : one newton run per [`DerivativeMethod`]
//!
//! Results are plain data. Formatting is left to the caller.

use super::derivative::DerivativeMethod;
use super::heron::{heron_sqrt, HeronCfg};
use super::newton::{find_root, newton_sqrt, DerivativeSource, NewtonCfg, NewtonError};
use tracing::debug;


/// Square root of `number` computed three ways.
#[derive(Debug, Clone, PartialEq)]
pub struct SqrtComparison {
    pub number          : f64,
    pub newton          : f64,
    pub heron           : f64,
    pub builtin         : f64,
    pub newton_error    : f64,
    pub heron_error     : f64,
    /// Length of the newton trace, initial guess included.
    pub newton_trace_len: usize,
    pub heron_converged : bool,
}


/// Runs [`newton_sqrt`] and [`heron_sqrt`] with default configs and measures
/// both against `f64::sqrt`.
///
/// # Errors
/// - [`NewtonError::InvalidArgument`] : `number < 0`
/// - [`NewtonError::NonConvergence`]  : newton failed under the default budget
pub fn compare_sqrt_methods(number: f64) -> Result<SqrtComparison, NewtonError> {
    let newton = newton_sqrt(number, NewtonCfg::new())?;
    let heron  = heron_sqrt(number, HeronCfg::new())?;
    let builtin = number.sqrt();

    Ok(SqrtComparison {
        number,
        newton          : newton.root,
        heron           : heron.root,
        builtin,
        newton_error    : (newton.root - builtin).abs(),
        heron_error     : (heron.root - builtin).abs(),
        newton_trace_len: newton.trace.len(),
        heron_converged : heron.converged(),
    })
}


/// A successful run of one derivative method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodRun {
    pub root       : f64,
    pub f_root     : f64,
    pub iterations : usize,
    pub trace      : Vec<f64>,
    /// `|root - reference_root|`
    pub abs_error  : f64,
}

/// Outcome of [`compare_derivative_methods`] for one method.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodOutcome {
    pub method : DerivativeMethod,
    pub result : Result<MethodRun, NewtonError>,
}


/// Runs [`find_root`] from `x0` once per [`DerivativeMethod`], always with an
/// estimated derivative, and compares each root with `reference_root`.
///
/// A failing method is recorded in its [`MethodOutcome`] and does not stop
/// the remaining runs. Outcomes follow [`DerivativeMethod::ALL`] order.
pub fn compare_derivative_methods<F>(
    mut func: F,
    x0: f64,
    reference_root: f64,
    cfg: NewtonCfg,
) -> Vec<MethodOutcome>
where F: FnMut(f64) -> f64 {
    DerivativeMethod::ALL
        .iter()
        .map(|&method| {
            let result = find_root(&mut func, DerivativeSource::estimated(method), x0, cfg)
                .map(|report| MethodRun {
                    root       : report.root,
                    f_root     : report.f_root,
                    iterations : report.iterations,
                    abs_error  : (report.root - reference_root).abs(),
                    trace      : report.trace.into_vec(),
                });

            if let Err(err) = &result {
                debug!(%method, %err, "derivative method failed");
            }
            MethodOutcome { method, result }
        })
        .collect()
}
