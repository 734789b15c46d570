//! Error types for cosmological distance calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from cosmology construction or distance evaluation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum CosmoError {
    /// A cosmological parameter is out of its physical range.
    InvalidParameter(&'static str),
    /// Redshift is negative or not finite.
    InvalidRedshift(f64),
    /// Adaptive quadrature exhausted its depth without meeting tolerance.
    NoConvergence(&'static str),
}

impl Display for CosmoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter(msg) => write!(f, "invalid cosmology parameter: {msg}"),
            Self::InvalidRedshift(z) => write!(f, "invalid redshift: {z}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for CosmoError {}
