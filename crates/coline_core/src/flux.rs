//! Conversion of a CO(J-(J-1)) line flux to an equivalent CO(1-0) flux.
//!
//! ```text
//! S_10     = r_J1 * S_J
//! σ(S_10)  = |S_10| * sqrt((σ_S / S_J)^2 + (σ_r / r_J1)^2)
//! ```
//!
//! The measured flux and the conversion ratio are treated as independent, so
//! their relative errors add in quadrature.

use crate::error::LineError;
use crate::measurement::Measurement;
use crate::transition::CoTransition;

/// Convert a line flux of the given transition to CO(1-0).
///
/// Fails with [`LineError::ZeroFlux`] when `flux.value == 0` and with
/// [`LineError::InvalidMeasurement`] for non-finite values or a negative sigma.
pub fn convert_to_co10(
    transition: CoTransition,
    flux: Measurement,
) -> Result<Measurement, LineError> {
    let flux = Measurement::new(flux.value, flux.sigma)?;
    let ratio = transition.ratio_to_co10();
    flux.mul_independent(&ratio)
}

/// Convert a line flux `S ± S_err` [Jy km/s] from CO(J-(J-1)) to CO(1-0).
///
/// `j` is the upper level and must be in `2..=7`. Returns the converted flux
/// and its one-sigma uncertainty in the same units.
///
/// ```
/// use coline_core::to_co10;
///
/// let s = to_co10(3, 10.0, 1.0).unwrap();
/// assert!((s.value - 5.2).abs() < 1e-12);
/// ```
pub fn to_co10(j: u8, flux: f64, flux_err: f64) -> Result<Measurement, LineError> {
    let transition = CoTransition::from_upper_j(j)?;
    let flux = Measurement::new(flux, flux_err)?;
    convert_to_co10(transition, flux)
}
