//! Iterative scalar root-finding.
//!
//! [`root_finding`]
//! ├ [`root_finding::derivative`] : finite-difference derivative estimates
//! ├ [`root_finding::newton`]     : Newton-Raphson with exact or estimated derivative
//! ├ [`root_finding::heron`]      : Heron's square root
//! └ [`root_finding::comparison`] : side-by-side runs of the above

pub mod root_finding;
