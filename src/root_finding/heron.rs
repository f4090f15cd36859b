//! Heron's square root

use super::algorithms::Algorithm;
use super::report::{IterationTrace, RootFindingReport, TerminationReason, ToleranceSatisfied};
use super::errors::ArgumentError;
use super::config::{CommonCfg, impl_common_cfg};
use tracing::warn;


/// Heron configuration.
///
/// # Fields
/// - `common` : [`CommonCfg`] with step tolerance `epsilon` and optional `max_iter`.
///
/// # Defaults
/// - `epsilon = 1e-7`
/// - `max_iter` unset resolves to [`Algorithm::default_max_iter`] (100).
#[derive(Debug, Copy, Clone)]
pub struct HeronCfg {
    common: CommonCfg,
}
impl HeronCfg {
    #[must_use]
    pub fn new() -> Self {
        Self {
            common: CommonCfg::new()
        }
    }
}
impl Default for HeronCfg {
    fn default() -> Self {
        Self::new()
    }
}
impl_common_cfg!(HeronCfg);


/// Square root of `number` by Heron's method, `g ← (g + number/g) / 2`
/// starting from `number / 2`.
///
/// # Returns
/// [`RootFindingReport`] with
/// - `root`                : the estimate
/// - `f_root`              : `root² - number`
/// - `tolerance_satisfied` : [`ToleranceSatisfied::StepSizeReached`] on success
/// - `trace`               : every guess, starting with `number / 2`
///
/// # Errors
/// - [`ArgumentError::NegativeRadicand`] : `number < 0`
///
/// # Behavior
/// - `number == 0` returns `0` with no iterations.
/// - Stops once two successive guesses differ by less than `epsilon` and
///   returns the newer one.
/// - Running out of iterations is not an error: the last guess comes back
///   with [`RootFindingReport::converged`] `== false` and a warning is logged.
pub fn heron_sqrt(number: f64, cfg: HeronCfg) -> Result<RootFindingReport, ArgumentError> {
    if number < 0.0 {
        return Err(ArgumentError::NegativeRadicand { number });
    }

    let algorithm = Algorithm::Heron;
    let algo_name = algorithm.algorithm_name();

    if number == 0.0 {
        return Ok(RootFindingReport {
            root                : 0.0,
            f_root              : 0.0,
            iterations          : 0,
            evaluations         : 0,
            termination_reason  : TerminationReason::ToleranceReached,
            tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
            trace               : IterationTrace::start(0.0),
            algorithm_name      : algo_name,
        });
    }

    let epsilon  = cfg.common.epsilon();
    let max_iter = cfg.common.resolve_max_iter(algorithm);

    let mut guess = number / 2.0;
    let mut trace = IterationTrace::start(guess);

    for iter in 1..=max_iter {
        let next = (guess + number / guess) / 2.0;
        trace.push(next);

        if (next - guess).abs() < epsilon {
            return Ok(RootFindingReport {
                root                : next,
                f_root              : next * next - number,
                iterations          : iter,
                evaluations         : iter,
                termination_reason  : TerminationReason::ToleranceReached,
                tolerance_satisfied : ToleranceSatisfied::StepSizeReached,
                trace,
                algorithm_name      : algo_name,
            });
        }
        guess = next;
    }

    warn!(
        max_iter,
        number,
        estimate = guess,
        "heron: maximum number of iterations reached; the result may not be accurate"
    );

    Ok(RootFindingReport {
        root                : guess,
        f_root              : guess * guess - number,
        iterations          : max_iter,
        evaluations         : max_iter,
        termination_reason  : TerminationReason::IterationLimit,
        tolerance_satisfied : ToleranceSatisfied::ToleranceNotReached,
        trace,
        algorithm_name      : algo_name,
    })
}
