//! CO rotational line utilities for radio-astronomy spectral analysis.
//!
//! This crate provides:
//! - The CO(2-1)..CO(7-6) transitions with rest frequencies and the
//!   Bothwell et al. (2013) conversion ratios to CO(1-0)
//! - Line flux conversion to CO(1-0) with uncertainty propagation
//! - Apparent CO line luminosity L'_CO under a flat ΛCDM cosmology
//!
//! # Quick start
//!
//! ```
//! use coline_core::*;
//!
//! // CO(3-2) flux of 10 ± 1 Jy km/s as CO(1-0)
//! let s10 = to_co10(3, 10.0, 1.0).unwrap();
//!
//! // Apparent luminosity of CO(1-0) observed at z = 2
//! let calc = LuminosityCalculator::planck();
//! let nu_obs = CO10_REST_FREQ_GHZ / 3.0;
//! let lp = calc.apparent_luminosity_measurement(s10, nu_obs, 2.0).unwrap();
//! assert!(lp.value > 0.0 && lp.sigma > 0.0);
//! ```

pub mod error;
pub mod flux;
pub mod luminosity;
pub mod measurement;
pub mod transition;

pub use error::LineError;
pub use flux::{convert_to_co10, to_co10};
pub use luminosity::{DistanceArgument, LPRIME_PREFACTOR, LuminosityCalculator, apparent_luminosity};
pub use measurement::Measurement;
pub use transition::{
    ALL_TRANSITIONS, CO10_REST_FREQ_GHZ, CoTransition, observed_frequency_ghz,
};

// Re-export the cosmology so callers don't need to depend on coline_cosmo directly.
pub use coline_cosmo::{CosmoError, DistanceModel, FlatLambdaCdm};
