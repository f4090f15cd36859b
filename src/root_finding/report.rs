//! Defines the [`RootFindingReport`] struct returned by all
//! root-finding algorithms, and the [`IterationTrace`] it carries.

/// Reasons a root-finding algorithm may terminate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    ToleranceReached,
    IterationLimit,
}


/// Which tolerance condition was satisfied (or not).
/// - [`ToleranceSatisfied::ResidualReached`]
///     - newton
///     - |f(x)| < epsilon
/// - [`ToleranceSatisfied::StepSizeReached`]
///     - heron
///     - |x_n - x_{n - 1}| < epsilon
/// - [`ToleranceSatisfied::ToleranceNotReached`]
///     - budget exhausted, only ever reported by soft-degrading methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToleranceSatisfied {
    ResidualReached,
    StepSizeReached,
    ToleranceNotReached,
}


/// Successive approximations produced during one run.
///
/// Starts with the initial guess and grows by exactly one value per
/// completed step. There is no way to remove or rewrite an entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IterationTrace {
    points: Vec<f64>,
}
impl IterationTrace {
    pub fn start(x0: f64) -> Self {
        Self { points: vec![x0] }
    }

    pub(crate) fn push(&mut self, x: f64) {
        self.points.push(x);
    }

    pub fn as_slice(&self) -> &[f64] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn first(&self) -> Option<f64> { self.points.first().copied() }
    pub fn last(&self) -> Option<f64> { self.points.last().copied() }

    /// Number of update steps recorded, i.e. `len() - 1`.
    pub fn steps(&self) -> usize { self.points.len().saturating_sub(1) }

    pub fn into_vec(self) -> Vec<f64> { self.points }
}
impl AsRef<[f64]> for IterationTrace {
    fn as_ref(&self) -> &[f64] { &self.points }
}


/// Final report returned by all root-finding algorithms.
///
/// [`RootFindingReport`]
/// - `root`                : best root estimate
/// - `f_root`              : residual at `root` (`root² - number` for heron)
/// - `iterations`          : total update steps
/// - `evaluations`         : total function (and derivative) evaluations
/// - `termination_reason`  : why the solver stopped  ([`TerminationReason`])
/// - `tolerance_satisfied` : which tolerance was met ([`ToleranceSatisfied`])
/// - `trace`               : every iterate, starting with the initial guess
/// - `algorithm_name`      : algorithm name (e.g. `"newton"`)
#[derive(Debug, Clone)]
pub struct RootFindingReport {
    pub root                : f64,
    pub f_root              : f64,
    pub iterations          : usize,
    pub evaluations         : usize,
    pub termination_reason  : TerminationReason,
    pub tolerance_satisfied : ToleranceSatisfied,
    pub trace               : IterationTrace,
    pub algorithm_name      : &'static str,
}
impl RootFindingReport {
    /// `false` only when a method ran out of iterations and returned its
    /// last estimate anyway.
    pub fn converged(&self) -> bool {
        self.termination_reason == TerminationReason::ToleranceReached
    }

    /// `(root, trace)` pair.
    pub fn into_parts(self) -> (f64, Vec<f64>) {
        (self.root, self.trace.into_vec())
    }
}
