//! Newton-Raphson method

use super::algorithms::Algorithm;
use super::report::{IterationTrace, RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::derivative::{estimate_derivative, DerivativeMethod, DEFAULT_STEP};
use super::errors::ArgumentError;
use super::config::{CommonCfg, impl_common_cfg};
use thiserror::Error;
use tracing::debug;


#[derive(Debug, Clone, PartialEq, Error)]
pub enum NewtonError {
    #[error(transparent)]
    InvalidArgument(#[from] ArgumentError),

    #[error("derivative is zero at x={x} (f(x)={fx}); newton step undefined")]
    ZeroDerivative { x: f64, fx: f64 },

    #[error("newton method did not converge within {max_iter} iterations (last x={last_x})")]
    NonConvergence { max_iter: usize, last_x: f64 },
}


/// Where the derivative at each iterate comes from.
///
/// - [`DerivativeSource::Exact`]     : caller-supplied `f'`
/// - [`DerivativeSource::Estimated`] : finite difference of `f` with the given method
///
/// Use [`DerivativeSource::estimated`] when no analytic derivative is at hand;
/// it fixes the otherwise unconstrained closure type.
#[derive(Debug, Clone, Copy)]
pub enum DerivativeSource<G> {
    Exact(G),
    Estimated(DerivativeMethod),
}
impl DerivativeSource<fn(f64) -> f64> {
    pub fn estimated(method: DerivativeMethod) -> Self {
        DerivativeSource::Estimated(method)
    }
}
impl Default for DerivativeSource<fn(f64) -> f64> {
    fn default() -> Self {
        DerivativeSource::Estimated(DerivativeMethod::default())
    }
}


/// Newton configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with residual tolerance `epsilon` and optional `max_iter`.
/// - `step`   : finite-difference step `h`, only read for
///              [`DerivativeSource::Estimated`] (default: [`DEFAULT_STEP`]).
///
/// # Construction
/// - Use [`NewtonCfg::new`] then optional setters.
///
/// # Defaults
/// - `epsilon = 1e-7`
/// - `max_iter` unset resolves to [`Algorithm::default_max_iter`] (100).
#[derive(Debug, Copy, Clone)]
pub struct NewtonCfg {
    common: CommonCfg,
    step:   f64,
}
impl NewtonCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new(),
            step:   DEFAULT_STEP,
        }
    }

    pub fn set_step(mut self, v: f64) -> Result<Self, ArgumentError> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ArgumentError::InvalidStep { got: v });
        }
        self.step = v;
        Ok(self)
    }

    pub fn step(&self) -> f64 { self.step }
}
impl Default for NewtonCfg {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(NewtonCfg);


/// Finds a root of `func` using the
/// [Newton–Raphson method](https://en.wikipedia.org/wiki/Newton_method).
///
/// # Arguments
/// - `func`       : function whose root is sought
/// - `derivative` : [`DerivativeSource`], exact `f'` or a finite-difference method
/// - `x0`         : initial guess
/// - `cfg`        : [`NewtonCfg`] (`epsilon`, optional `max_iter`, fd step)
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`        : first iterate with `|f(root)| < epsilon`
/// - `iterations`  : newton steps taken before that iterate
/// - `trace`       : `x0` followed by one entry per step; ends at `root`
///
/// # Errors
/// - [`NewtonError::ZeroDerivative`] : derivative is exactly `0.0` at an iterate
/// - [`NewtonError::NonConvergence`] : `max_iter` steps without meeting `epsilon`
///
/// # Behavior
/// Each step evaluates `f(x)` once, stops if the residual is below `epsilon`,
/// otherwise evaluates the derivative and moves to `x - f(x)/f'(x)`.
///
/// # Notes
/// - Stopping is on the residual `|f(x)|`, not on the step size. A function
///   that stays within `epsilon` of zero over a wide interval is reported as
///   converged at the first iterate that lands in it, which may be far from
///   the actual root.
/// - Nothing is retried. Try another `x0` or derivative method on failure.
pub fn find_root<F, G>(
    mut func: F,
    mut derivative: DerivativeSource<G>,
    x0: f64,
    cfg: NewtonCfg,
) -> Result<RootFindingReport, NewtonError>
where
    F: FnMut(f64) -> f64,
    G: FnMut(f64) -> f64
{
    let algorithm = Algorithm::Newton;
    let algo_name = algorithm.algorithm_name();

    let epsilon  = cfg.common.epsilon();
    let max_iter = cfg.common.resolve_max_iter(algorithm);
    let h        = cfg.step;

    let mut evals: usize = 0;
    let mut trace = IterationTrace::start(x0);
    let mut x = x0;

    for iter in 0..max_iter {
        let fx = { evals += 1; func(x) };
        if fx.abs() < epsilon {
            debug!(iterations = iter, root = x, f_root = fx, "newton converged");
            return Ok(RootFindingReport {
                root                : x,
                f_root              : fx,
                iterations          : iter,
                evaluations         : evals,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::ResidualReached,
                trace,
                algorithm_name      : algo_name,
            });
        }

        let dfx = match &mut derivative {
            DerivativeSource::Exact(df) => { evals += 1; df(x) },
            DerivativeSource::Estimated(method) => {
                evals += method.evaluations();
                estimate_derivative(&mut func, x, h, *method)
            }
        };

        if dfx == 0.0 {
            debug!(iteration = iter, x, fx, "newton stopped on zero derivative");
            return Err(NewtonError::ZeroDerivative { x, fx });
        }

        x -= fx / dfx;
        trace.push(x);
    }

    debug!(max_iter, last_x = x, "newton exhausted its iteration budget");
    Err(NewtonError::NonConvergence { max_iter, last_x: x })
}


/// Square root of `number` by Newton-Raphson on `x² - number` with the exact
/// derivative `2x`, starting from `number / 2`.
///
/// # Errors
/// - [`NewtonError::InvalidArgument`] wrapping
///   [`ArgumentError::NegativeRadicand`] : `number < 0`
/// - anything [`find_root`] returns
///
/// # Notes
/// `number == 0` returns `0` immediately with the trace `[0]`.
pub fn newton_sqrt(number: f64, cfg: NewtonCfg) -> Result<RootFindingReport, NewtonError> {
    if number < 0.0 {
        return Err(ArgumentError::NegativeRadicand { number }.into());
    }

    if number == 0.0 {
        return Ok(RootFindingReport {
            root                : 0.0,
            f_root              : 0.0,
            iterations          : 0,
            evaluations         : 0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::ResidualReached,
            trace               : IterationTrace::start(0.0),
            algorithm_name      : Algorithm::Newton.algorithm_name(),
        });
    }

    find_root(
        move |x: f64| x * x - number,
        DerivativeSource::Exact(|x: f64| 2.0 * x),
        number / 2.0,
        cfg,
    )
}
