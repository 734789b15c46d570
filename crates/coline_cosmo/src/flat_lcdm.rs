//! Flat ΛCDM cosmology with photons and massless neutrinos.
//!
//! The density budget follows the usual convention of the astronomical
//! community's reference cosmology libraries: a non-zero CMB temperature adds
//! a photon density `Ω_γ` plus `Neff` species of massless neutrinos, and the
//! dark-energy density absorbs the remainder so that the total is exactly one.
//!
//! ```text
//! E(z)  = sqrt(Ω_m (1+z)^3 + Ω_r (1+z)^4 + Ω_Λ)
//! D_C   = D_H ∫₀ᶻ dz' / E(z')
//! D_L   = (1+z) D_C
//! D_A   = D_C / (1+z)
//! ```

use std::f64::consts::PI;

use crate::constants::{
    GRAVITATIONAL_CONSTANT, MPC_M, NEFF_STANDARD, NEUTRINO_PHOTON_RATIO, PC_PER_MPC,
    SPEED_OF_LIGHT_KM_S, SPEED_OF_LIGHT_M_S, STEFAN_BOLTZMANN,
};
use crate::error::CosmoError;
use crate::integrate::{QuadratureConfig, adaptive_simpson};

/// Anything that can turn a redshift into a luminosity distance.
///
/// Consumers of distances take this trait rather than a concrete cosmology so
/// that tabulated or externally computed distances can be plugged in.
pub trait DistanceModel {
    /// Luminosity distance in Mpc at redshift `z`.
    fn luminosity_distance_mpc(&self, z: f64) -> Result<f64, CosmoError>;
}

/// Immutable flat-ΛCDM parameter set with derived densities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatLambdaCdm {
    h0: f64,
    tcmb0: f64,
    om0: f64,
    neff: f64,
    ogamma0: f64,
    onu0: f64,
    ode0: f64,
    quadrature: QuadratureConfig,
}

impl FlatLambdaCdm {
    /// Hubble constant of the default parameter set, km/s/Mpc.
    pub const PLANCK_H0: f64 = 67.4;
    /// CMB temperature of the default parameter set, K.
    pub const PLANCK_TCMB0: f64 = 2.725;
    /// Matter density fraction of the default parameter set.
    pub const PLANCK_OM0: f64 = 0.315;

    /// Build a flat cosmology with the standard `Neff = 3.04`.
    pub fn new(h0: f64, tcmb0: f64, om0: f64) -> Result<Self, CosmoError> {
        Self::with_neff(h0, tcmb0, om0, NEFF_STANDARD)
    }

    /// Build a flat cosmology with an explicit effective neutrino number.
    pub fn with_neff(h0: f64, tcmb0: f64, om0: f64, neff: f64) -> Result<Self, CosmoError> {
        if !(h0.is_finite() && h0 > 0.0) {
            return Err(CosmoError::InvalidParameter("H0 must be positive"));
        }
        if !(tcmb0.is_finite() && tcmb0 >= 0.0) {
            return Err(CosmoError::InvalidParameter("Tcmb0 must be non-negative"));
        }
        if !(om0.is_finite() && (0.0..=1.0).contains(&om0)) {
            return Err(CosmoError::InvalidParameter("Om0 must lie in [0, 1]"));
        }
        if !(neff.is_finite() && neff >= 0.0) {
            return Err(CosmoError::InvalidParameter("Neff must be non-negative"));
        }

        let cosmo = Self::from_parameters(h0, tcmb0, om0, neff);
        if cosmo.ode0 < 0.0 {
            return Err(CosmoError::InvalidParameter(
                "matter and radiation exceed critical density",
            ));
        }
        Ok(cosmo)
    }

    /// H0 = 67.4 km/s/Mpc, Tcmb0 = 2.725 K, Om0 = 0.315.
    pub fn planck() -> Self {
        // Constants lie inside the ranges `with_neff` checks.
        Self::from_parameters(
            Self::PLANCK_H0,
            Self::PLANCK_TCMB0,
            Self::PLANCK_OM0,
            NEFF_STANDARD,
        )
    }

    /// Derive the density budget without validation.
    fn from_parameters(h0: f64, tcmb0: f64, om0: f64, neff: f64) -> Self {
        let ogamma0 = photon_density(h0, tcmb0);
        let onu0 = ogamma0 * neff * NEUTRINO_PHOTON_RATIO;
        Self {
            h0,
            tcmb0,
            om0,
            neff,
            ogamma0,
            onu0,
            ode0: 1.0 - om0 - ogamma0 - onu0,
            quadrature: QuadratureConfig::DEFAULT,
        }
    }

    /// Replace the quadrature settings used for distance integrals.
    pub fn with_quadrature(mut self, quadrature: QuadratureConfig) -> Self {
        self.quadrature = quadrature;
        self
    }

    pub fn h0(&self) -> f64 {
        self.h0
    }

    pub fn tcmb0(&self) -> f64 {
        self.tcmb0
    }

    pub fn om0(&self) -> f64 {
        self.om0
    }

    pub fn neff(&self) -> f64 {
        self.neff
    }

    /// Photon density fraction today.
    pub fn ogamma0(&self) -> f64 {
        self.ogamma0
    }

    /// Massless-neutrino density fraction today.
    pub fn onu0(&self) -> f64 {
        self.onu0
    }

    /// Dark-energy density fraction today.
    pub fn ode0(&self) -> f64 {
        self.ode0
    }

    pub fn quadrature(&self) -> &QuadratureConfig {
        &self.quadrature
    }

    /// Hubble distance `c / H0` in Mpc.
    pub fn hubble_distance_mpc(&self) -> f64 {
        SPEED_OF_LIGHT_KM_S / self.h0
    }

    /// Dimensionless Hubble parameter `E(z) = H(z) / H0`.
    pub fn efunc(&self, z: f64) -> f64 {
        let zp1 = 1.0 + z;
        let zp1_3 = zp1 * zp1 * zp1;
        let or0 = self.ogamma0 + self.onu0;
        (self.om0 * zp1_3 + or0 * zp1_3 * zp1 + self.ode0).sqrt()
    }

    /// `1 / E(z)`, the comoving-distance integrand.
    pub fn inv_efunc(&self, z: f64) -> f64 {
        1.0 / self.efunc(z)
    }

    /// Hubble parameter at `z` in km/s/Mpc.
    pub fn hubble_parameter(&self, z: f64) -> f64 {
        self.h0 * self.efunc(z)
    }

    /// Line-of-sight comoving distance in Mpc.
    pub fn comoving_distance_mpc(&self, z: f64) -> Result<f64, CosmoError> {
        check_redshift(z)?;
        if z == 0.0 {
            return Ok(0.0);
        }
        let integral = adaptive_simpson(|x| self.inv_efunc(x), 0.0, z, &self.quadrature)?;
        let dc = self.hubble_distance_mpc() * integral;
        log::trace!("comoving distance z={z}: {dc} Mpc");
        Ok(dc)
    }

    /// Luminosity distance `(1+z) D_C` in Mpc.
    pub fn luminosity_distance_mpc(&self, z: f64) -> Result<f64, CosmoError> {
        Ok((1.0 + z) * self.comoving_distance_mpc(z)?)
    }

    /// Angular diameter distance `D_C / (1+z)` in Mpc.
    pub fn angular_diameter_distance_mpc(&self, z: f64) -> Result<f64, CosmoError> {
        Ok(self.comoving_distance_mpc(z)? / (1.0 + z))
    }

    /// Distance modulus `5 log10(D_L / 10 pc)` in magnitudes.
    ///
    /// Undefined at `z = 0`, where the luminosity distance vanishes.
    pub fn distance_modulus(&self, z: f64) -> Result<f64, CosmoError> {
        if z == 0.0 {
            return Err(CosmoError::InvalidRedshift(z));
        }
        let dl_pc = self.luminosity_distance_mpc(z)? * PC_PER_MPC;
        Ok(5.0 * (dl_pc / 10.0).log10())
    }
}

impl Default for FlatLambdaCdm {
    fn default() -> Self {
        Self::planck()
    }
}

impl DistanceModel for FlatLambdaCdm {
    fn luminosity_distance_mpc(&self, z: f64) -> Result<f64, CosmoError> {
        FlatLambdaCdm::luminosity_distance_mpc(self, z)
    }
}

fn check_redshift(z: f64) -> Result<(), CosmoError> {
    if z.is_finite() && z >= 0.0 {
        Ok(())
    } else {
        Err(CosmoError::InvalidRedshift(z))
    }
}

/// Photon density fraction `a_B Tcmb0^4 / (c^2 ρ_crit)`.
fn photon_density(h0: f64, tcmb0: f64) -> f64 {
    let h0_si = h0 * 1000.0 / MPC_M;
    let rho_crit = 3.0 * h0_si * h0_si / (8.0 * PI * GRAVITATIONAL_CONSTANT);
    let a_b_over_c2 = 4.0 * STEFAN_BOLTZMANN / SPEED_OF_LIGHT_M_S.powi(3);
    a_b_over_c2 * tcmb0.powi(4) / rho_crit
}
