// common helpers
pub mod algorithms;
pub mod report;
pub mod errors;
pub(crate) mod config;

// algorithms
pub mod derivative;
pub mod newton;
pub mod heron;

pub mod comparison;

pub use derivative::{estimate_derivative, DerivativeMethod};
pub use newton::{find_root, newton_sqrt, DerivativeSource, NewtonCfg, NewtonError};
pub use heron::{heron_sqrt, HeronCfg};
