//! Apparent CO line luminosity L'_CO (Solomon & Vanden Bout 2005).
//!
//! ```text
//! L'_CO [K km/s pc^2] = 3.25e7 * S ΔV * ν_obs^-2 * D_L^2 * (1+z)^-3
//! ```
//!
//! with `S ΔV` in Jy km/s, `ν_obs` in GHz and `D_L` in Mpc.
//!
//! The luminosity distance is normally evaluated at `z`. Some published
//! tables were produced with the distance evaluated at `1+z` instead; the
//! [`DistanceArgument`] setting selects between the two so that those numbers
//! can be reproduced deliberately.

use coline_cosmo::{DistanceModel, FlatLambdaCdm};

use crate::error::LineError;
use crate::measurement::Measurement;
use crate::transition::CoTransition;

/// Prefactor of the L'_CO relation in these units.
pub const LPRIME_PREFACTOR: f64 = 3.25e7;

/// Redshift argument handed to the luminosity-distance routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DistanceArgument {
    /// `D_L(z)`: the standard definition.
    #[default]
    Redshift,
    /// `D_L(1+z)`: reproduces tables computed with the shifted argument.
    OnePlusRedshift,
}

impl DistanceArgument {
    /// Redshift at which to evaluate the luminosity distance.
    pub fn distance_redshift(self, z: f64) -> f64 {
        match self {
            Self::Redshift => z,
            Self::OnePlusRedshift => 1.0 + z,
        }
    }
}

/// Immutable luminosity context: a distance model plus the argument convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LuminosityCalculator<D = FlatLambdaCdm> {
    distances: D,
    argument: DistanceArgument,
}

impl LuminosityCalculator<FlatLambdaCdm> {
    /// Planck-like flat ΛCDM with the standard `D_L(z)` argument.
    pub fn planck() -> Self {
        Self::new(FlatLambdaCdm::planck())
    }
}

impl Default for LuminosityCalculator<FlatLambdaCdm> {
    fn default() -> Self {
        Self::planck()
    }
}

impl<D: DistanceModel> LuminosityCalculator<D> {
    pub fn new(distances: D) -> Self {
        Self {
            distances,
            argument: DistanceArgument::Redshift,
        }
    }

    /// Select the luminosity-distance argument convention.
    pub fn with_distance_argument(mut self, argument: DistanceArgument) -> Self {
        if argument == DistanceArgument::OnePlusRedshift {
            log::debug!("luminosity distances will be evaluated at 1+z");
        }
        self.argument = argument;
        self
    }

    pub fn distances(&self) -> &D {
        &self.distances
    }

    pub fn distance_argument(&self) -> DistanceArgument {
        self.argument
    }

    /// Luminosity distance in Mpc used for a source at redshift `z`.
    pub fn luminosity_distance_mpc(&self, z: f64) -> Result<f64, LineError> {
        check_redshift(z)?;
        let dl = self
            .distances
            .luminosity_distance_mpc(self.argument.distance_redshift(z))?;
        Ok(dl)
    }

    /// L'_CO in K km/s pc^2 from intensity [Jy km/s], frequency [GHz] and redshift.
    pub fn apparent_luminosity(
        &self,
        intensity: f64,
        nu_ghz: f64,
        z: f64,
    ) -> Result<f64, LineError> {
        if !intensity.is_finite() {
            return Err(LineError::InvalidMeasurement("intensity must be finite"));
        }
        if !(nu_ghz.is_finite() && nu_ghz > 0.0) {
            return Err(LineError::InvalidFrequency(nu_ghz));
        }
        let dl = self.luminosity_distance_mpc(z)?;
        let zp1 = 1.0 + z;
        Ok(LPRIME_PREFACTOR * intensity * dl * dl / (nu_ghz * nu_ghz * zp1 * zp1 * zp1))
    }

    /// L'_CO with the intensity uncertainty propagated linearly.
    pub fn apparent_luminosity_measurement(
        &self,
        intensity: Measurement,
        nu_ghz: f64,
        z: f64,
    ) -> Result<Measurement, LineError> {
        let intensity = Measurement::new(intensity.value, intensity.sigma)?;
        let factor = self.apparent_luminosity(1.0, nu_ghz, z)?;
        Ok(intensity.scale(factor))
    }

    /// L'_CO of a transition observed at its redshifted rest frequency.
    pub fn apparent_luminosity_for_transition(
        &self,
        transition: CoTransition,
        intensity: Measurement,
        z: f64,
    ) -> Result<Measurement, LineError> {
        let nu_obs = transition.observed_frequency_ghz(z)?;
        self.apparent_luminosity_measurement(intensity, nu_obs, z)
    }
}

/// L'_CO in K km/s pc^2 using the given calculator.
///
/// ```
/// use coline_core::{LuminosityCalculator, apparent_luminosity};
///
/// let calc = LuminosityCalculator::planck();
/// let lp = apparent_luminosity(1.0, 57.6, 1.0, &calc).unwrap();
/// assert!(lp > 1e10 && lp < 1e11);
/// ```
pub fn apparent_luminosity<D: DistanceModel>(
    intensity: f64,
    nu_ghz: f64,
    z: f64,
    calc: &LuminosityCalculator<D>,
) -> Result<f64, LineError> {
    calc.apparent_luminosity(intensity, nu_ghz, z)
}

fn check_redshift(z: f64) -> Result<(), LineError> {
    if z.is_finite() && z >= 0.0 {
        Ok(())
    } else {
        Err(LineError::InvalidRedshift(z))
    }
}
