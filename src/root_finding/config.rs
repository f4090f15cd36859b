//! Shared configuration for root-finding algorithms.
//!
//! Provides [`CommonCfg`] with the default tolerance and iteration limit,
//! used by all root-finding configs.
//!
//! [`CommonCfg`] universal fields
//! ├ `epsilon`  : convergence tolerance (residual for newton, step for heron)
//! └ `max_iter` : iteration cap (optional)
//!
//! [`CommonCfg::new`] initializes configuration with default values.
//!
//! Values are validated once, in the setters generated by `impl_common_cfg!`.
//! The iteration loops take them as preconditions.

use super::algorithms::{Algorithm, DEFAULT_EPSILON};


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg {
    epsilon:  f64,
    max_iter: Option<usize>,
}

impl CommonCfg {
    pub fn new() -> Self {
        Self {
            epsilon  : DEFAULT_EPSILON,
            max_iter : None
        }
    }

    // getters
    pub fn epsilon(&self)  -> f64 { self.epsilon }
    pub fn max_iter(&self) -> Option<usize> { self.max_iter }

    /// `max_iter` if set, otherwise the algorithm default.
    pub fn resolve_max_iter(&self, algorithm: Algorithm) -> usize {
        self.max_iter.unwrap_or_else(|| algorithm.default_max_iter())
    }

    // setters (internal)
    pub(crate) fn with_epsilon  (&mut self, v: f64)   { self.epsilon  = v; }
    pub(crate) fn with_max_iter (&mut self, v: usize) { self.max_iter = Some(v); }
}

impl Default for CommonCfg {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl $cfg {
            pub fn set_epsilon(
                mut self, v: f64
            ) -> Result<Self, $crate::root_finding::errors::ArgumentError> {
                if !v.is_finite() || v <= 0.0 {
                    return Err(
                        $crate::root_finding::errors::ArgumentError::InvalidEpsilon { got: v }
                    );
                }
                self.common.with_epsilon(v);
                Ok(self)
            }
            pub fn set_max_iter(
                mut self, v: usize
            ) -> Result<Self, $crate::root_finding::errors::ArgumentError> {
                if v == 0 {
                    return Err(
                        $crate::root_finding::errors::ArgumentError::InvalidMaxIter { got: v }
                    );
                }
                self.common.with_max_iter(v);
                Ok(self)
            }

            pub fn epsilon(&self) -> f64 { self.common.epsilon() }
            pub fn max_iter(&self) -> Option<usize> { self.common.max_iter() }
        }
    };
}
pub(crate) use impl_common_cfg;
