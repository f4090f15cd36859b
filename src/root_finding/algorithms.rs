//! Root-finding algorithm definitions.
//!
//! Provides the [`Algorithm`] enum, which enumerates all supported methods,
//! along with the defaults each one falls back on when a config leaves them unset.


/// Default residual / step tolerance shared by every method.
pub const DEFAULT_EPSILON: f64 = 1e-7;


/// Root-finding algorithm variants.
/// - [`Algorithm::Newton`] : Newton-Raphson, residual-based stopping
/// - [`Algorithm::Heron`]  : Heron's square root, step-based stopping
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Algorithm {
    Newton,
    Heron,
}

impl Algorithm {
    /// Default iteration count if `max_iter` is unset in config.
    pub const fn default_max_iter(self) -> usize {
        match self {
            Algorithm::Newton => 100,
            Algorithm::Heron  => 100,
        }
    }

    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Algorithm::Newton => "newton",
            Algorithm::Heron  => "heron",
        }
    }
}
impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
