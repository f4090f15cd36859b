//! Finite-difference derivative estimates.
//!
//! [`DerivativeMethod`]
//! ├ `Forward`            : (f(x+h) - f(x)) / h                                 O(h)
//! ├ `Backward`           : (f(x) - f(x-h)) / h                                 O(h)
//! ├ `Central`            : (f(x+h) - f(x-h)) / 2h                              O(h²)
//! └ `CentralHigherOrder` : (-f(x+2h) + 8f(x+h) - 8f(x-h) + f(x-2h)) / 12h      O(h⁴)
//!
//! The step `h` is used as given. There is no step-size adaptation.

use std::str::FromStr;

use super::errors::ArgumentError;


/// Default finite-difference step.
pub const DEFAULT_STEP: f64 = 1e-5;


/// Finite-difference formula.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum DerivativeMethod {
    #[default]
    Central,
    Forward,
    Backward,
    CentralHigherOrder,
}

impl DerivativeMethod {
    pub const ALL: [DerivativeMethod; 4] = [
        DerivativeMethod::Central,
        DerivativeMethod::Forward,
        DerivativeMethod::Backward,
        DerivativeMethod::CentralHigherOrder,
    ];

    pub const fn method_name(self) -> &'static str {
        match self {
            DerivativeMethod::Central            => "central",
            DerivativeMethod::Forward            => "forward",
            DerivativeMethod::Backward           => "backward",
            DerivativeMethod::CentralHigherOrder => "central_higher_order",
        }
    }

    /// Calls to `f` made by one estimate.
    pub const fn evaluations(self) -> usize {
        match self {
            DerivativeMethod::Central
            | DerivativeMethod::Forward
            | DerivativeMethod::Backward           => 2,
            DerivativeMethod::CentralHigherOrder => 4,
        }
    }

    /// Order of the truncation error in `h`.
    pub const fn order(self) -> u32 {
        match self {
            DerivativeMethod::Forward
            | DerivativeMethod::Backward           => 1,
            DerivativeMethod::Central            => 2,
            DerivativeMethod::CentralHigherOrder => 4,
        }
    }
}

impl std::fmt::Display for DerivativeMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.method_name())
    }
}

impl FromStr for DerivativeMethod {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "central"              => Ok(DerivativeMethod::Central),
            "forward"              => Ok(DerivativeMethod::Forward),
            "backward"             => Ok(DerivativeMethod::Backward),
            "central_higher_order" => Ok(DerivativeMethod::CentralHigherOrder),
            other => Err(ArgumentError::UnknownDerivativeMethod { got: other.to_string() }),
        }
    }
}


/// Estimates `f'(x)` with the given finite-difference `method` and step `h`.
///
/// # Arguments
/// - `f`      : function to differentiate
/// - `x`      : evaluation point
/// - `h`      : step, expected small, finite and > 0 (see [`DEFAULT_STEP`])
/// - `method` : [`DerivativeMethod`]
///
/// # Notes
/// - Invokes `f` exactly [`DerivativeMethod::evaluations`] times.
/// - Nothing is checked: a non-finite `f` yields a non-finite estimate.
pub fn estimate_derivative<F>(
    mut f: F,
    x: f64,
    h: f64,
    method: DerivativeMethod,
) -> f64
where F: FnMut(f64) -> f64 {
    match method {
        DerivativeMethod::Forward  => (f(x + h) - f(x)) / h,
        DerivativeMethod::Backward => (f(x) - f(x - h)) / h,
        DerivativeMethod::Central  => (f(x + h) - f(x - h)) / (2.0 * h),
        DerivativeMethod::CentralHigherOrder => {
            let f_p2 = f(x + 2.0 * h);
            let f_p1 = f(x + h);
            let f_m1 = f(x - h);
            let f_m2 = f(x - 2.0 * h);
            (-f_p2 + 8.0 * f_p1 - 8.0 * f_m1 + f_m2) / (12.0 * h)
        }
    }
}
