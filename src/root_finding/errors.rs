//! Root-finding error types.
//!
//! [`ArgumentError`] : caller supplied an argument outside its domain
//! ├ unknown derivative method name
//! ├ negative radicand for a square root
//! └ invalid configuration (`epsilon`, `max_iter`, finite-difference step)
//!
//! Routine-specific failures (e.g. a vanishing Newton derivative) live next
//! to the routine that raises them and wrap [`ArgumentError`] via `#[from]`.


use thiserror::Error;


/// Invalid argument errors.
///
/// Always surfaced synchronously, never recovered internally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgumentError {
    #[error("unknown derivative method `{got}`: expected one of \
             `central`, `forward`, `backward`, `central_higher_order`")]
    UnknownDerivativeMethod { got: String },

    #[error("cannot take the square root of a negative number. got {number}")]
    NegativeRadicand { number: f64 },

    #[error("invalid `epsilon`: must be finite and > 0. got {got}")]
    InvalidEpsilon { got: f64 },

    #[error("invalid max_iter: must be >= 1. got max_iter={got}")]
    InvalidMaxIter { got: usize },

    #[error("invalid finite-difference step: must be finite and > 0. got h={got}")]
    InvalidStep { got: f64 },
}
