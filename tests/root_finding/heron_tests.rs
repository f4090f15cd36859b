use approx::assert_abs_diff_eq;
use radix::root_finding::heron::{heron_sqrt, HeronCfg};
use radix::root_finding::newton::{newton_sqrt, NewtonCfg, NewtonError};
use radix::root_finding::errors::ArgumentError;
use radix::root_finding::report::{TerminationReason, ToleranceSatisfied};

type TestResult = Result<(), ArgumentError>;

#[test]
fn sqrt_16_is_four() -> TestResult {
    let res = heron_sqrt(16.0, HeronCfg::new())?;
    assert!(res.converged());
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::StepSizeReached);
    assert_abs_diff_eq!(res.root, 4.0, epsilon = 1e-7);
    Ok(())
}

#[test]
fn sqrt_2_within_epsilon() -> TestResult {
    let res = heron_sqrt(2.0, HeronCfg::new())?;
    assert_abs_diff_eq!(res.root, 2.0_f64.sqrt(), epsilon = 1e-7);
    Ok(())
}

#[test]
fn returns_newer_guess_on_step_convergence() -> TestResult {
    let res = heron_sqrt(1.0e6, HeronCfg::new())?;
    let trace = res.trace.as_slice();
    let n = trace.len();

    assert!(n >= 2);
    assert_eq!(trace[0], 5.0e5);
    assert_eq!(trace[n - 1], res.root);
    assert!((trace[n - 1] - trace[n - 2]).abs() < 1e-7);
    assert_eq!(res.iterations, n - 1);
    Ok(())
}

#[test]
fn zero_returns_exact_zero_without_iterating() -> TestResult {
    let res = heron_sqrt(0.0, HeronCfg::new())?;
    assert_eq!(res.root, 0.0);
    assert_eq!(res.iterations, 0);
    assert!(res.converged());
    Ok(())
}

#[test]
fn negative_is_invalid_argument() {
    let err = heron_sqrt(-1.0, HeronCfg::new()).unwrap_err();
    assert_eq!(err, ArgumentError::NegativeRadicand { number: -1.0 });
}

#[test]
fn exhausted_budget_degrades_softly() -> TestResult {
    let cfg = HeronCfg::new().set_max_iter(1)?;
    let res = heron_sqrt(1.0e6, cfg)?;

    assert!(!res.converged());
    assert_eq!(res.termination_reason, TerminationReason::IterationLimit);
    assert_eq!(res.tolerance_satisfied, ToleranceSatisfied::ToleranceNotReached);
    assert_eq!(res.iterations, 1);
    assert_eq!(res.root, 250_001.0);
    Ok(())
}

#[test]
fn newton_hard_fails_where_heron_degrades() -> TestResult {
    let heron = heron_sqrt(1.0e6, HeronCfg::new().set_max_iter(1)?)?;

    let err = newton_sqrt(1.0e6, NewtonCfg::new().set_max_iter(1)?).unwrap_err();
    let NewtonError::NonConvergence { last_x, .. } = err else {
        panic!("expected NonConvergence, got {err:?}");
    };

    // both take the same first step from number / 2
    assert_eq!(last_x, heron.root);
    Ok(())
}

#[test]
fn loose_epsilon_stops_early() -> TestResult {
    let tight = heron_sqrt(2.0, HeronCfg::new().set_epsilon(1e-12)?)?;
    let loose = heron_sqrt(2.0, HeronCfg::new().set_epsilon(0.5)?)?;
    assert!(loose.iterations < tight.iterations);
    Ok(())
}

#[test]
fn identical_inputs_give_bit_identical_results() -> TestResult {
    let a = heron_sqrt(123.456, HeronCfg::new())?;
    let b = heron_sqrt(123.456, HeronCfg::new())?;
    assert_eq!(a.root.to_bits(), b.root.to_bits());
    assert_eq!(a.trace, b.trace);
    Ok(())
}

#[test]
fn invalid_epsilon_rejected_by_setter() {
    let err = HeronCfg::new().set_epsilon(-1.0).unwrap_err();
    assert!(matches!(err, ArgumentError::InvalidEpsilon { got } if got == -1.0));
}
