use radix::root_finding::comparison::{compare_derivative_methods, compare_sqrt_methods};
use radix::root_finding::derivative::DerivativeMethod;
use radix::root_finding::errors::ArgumentError;
use radix::root_finding::newton::{NewtonCfg, NewtonError};

type TestResult = Result<(), NewtonError>;

fn cubic(x: f64) -> f64 {
    x.powi(3) - 2.0 * x.powi(2) + 4.0 * x - 8.0
}

#[test]
fn sqrt_comparison_agrees_with_builtin() -> TestResult {
    for n in [16.0, 2.0, 1_000_000.0] {
        let cmp = compare_sqrt_methods(n)?;
        assert_eq!(cmp.number, n);
        assert_eq!(cmp.builtin, n.sqrt());
        assert!(cmp.newton_error < 1e-7);
        assert!(cmp.heron_error < 1e-7);
        assert!(cmp.heron_converged);
        assert!(cmp.newton_trace_len >= 1);
    }
    Ok(())
}

#[test]
fn sqrt_comparison_of_zero() -> TestResult {
    let cmp = compare_sqrt_methods(0.0)?;
    assert_eq!(cmp.newton, 0.0);
    assert_eq!(cmp.heron, 0.0);
    assert_eq!(cmp.newton_trace_len, 1);
    Ok(())
}

#[test]
fn sqrt_comparison_rejects_negative() {
    let err = compare_sqrt_methods(-2.0).unwrap_err();
    assert_eq!(
        err,
        NewtonError::InvalidArgument(ArgumentError::NegativeRadicand { number: -2.0 })
    );
}

#[test]
fn every_derivative_method_finds_cubic_root() {
    let outcomes = compare_derivative_methods(cubic, 0.1, 2.0, NewtonCfg::new());

    assert_eq!(outcomes.len(), DerivativeMethod::ALL.len());
    for (outcome, method) in outcomes.iter().zip(DerivativeMethod::ALL) {
        assert_eq!(outcome.method, method);
        let run = outcome.result.as_ref().unwrap();
        assert!(run.abs_error < 1e-6, "{method}: {}", run.abs_error);
        assert!(run.f_root.abs() < 1e-7);
        assert_eq!(run.trace.first().copied(), Some(0.1));
        assert_eq!(run.trace.last().copied(), Some(run.root));
    }
}

#[test]
fn failing_method_does_not_stop_the_others() {
    let outcomes = compare_derivative_methods(|_x| 1.0, 0.0, 0.0, NewtonCfg::new());

    assert_eq!(outcomes.len(), 4);
    for outcome in &outcomes {
        assert!(matches!(outcome.result, Err(NewtonError::ZeroDerivative { .. })));
    }
}
