//! Error types for CO line calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use coline_cosmo::CosmoError;

/// Errors from flux conversion or luminosity calculation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum LineError {
    /// Upper level outside the tabulated CO(2-1)..CO(7-6) range.
    InvalidTransition(u8),
    /// Flux is zero, so its relative error is undefined.
    ZeroFlux,
    /// Non-finite value or negative / non-finite uncertainty.
    InvalidMeasurement(&'static str),
    /// Frequency is zero, negative or not finite.
    InvalidFrequency(f64),
    /// Redshift is negative or not finite.
    InvalidRedshift(f64),
    /// Error from the cosmological distance routine.
    Cosmo(CosmoError),
}

impl Display for LineError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTransition(j) => {
                write!(f, "invalid CO transition: upper level {j} not in 2..=7")
            }
            Self::ZeroFlux => write!(f, "flux is zero; relative uncertainty undefined"),
            Self::InvalidMeasurement(msg) => write!(f, "invalid measurement: {msg}"),
            Self::InvalidFrequency(nu) => write!(f, "invalid frequency: {nu} GHz"),
            Self::InvalidRedshift(z) => write!(f, "invalid redshift: {z}"),
            Self::Cosmo(e) => write!(f, "cosmology error: {e}"),
        }
    }
}

impl Error for LineError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Cosmo(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CosmoError> for LineError {
    fn from(e: CosmoError) -> Self {
        Self::Cosmo(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn cosmo_error_wraps() {
        let e: LineError = CosmoError::NoConvergence("x").into();
        assert!(e.source().is_some());
        assert_eq!(e.to_string(), "cosmology error: no convergence: x");
    }

    #[test]
    fn transition_message() {
        let e = LineError::InvalidTransition(8);
        assert_eq!(
            e.to_string(),
            "invalid CO transition: upper level 8 not in 2..=7"
        );
    }
}
