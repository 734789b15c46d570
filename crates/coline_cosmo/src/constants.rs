//! Physical constants (CODATA 2018, SI) used by the cosmology.

/// Speed of light in vacuum, m/s.
pub const SPEED_OF_LIGHT_M_S: f64 = 299_792_458.0;

/// Speed of light in vacuum, km/s.
pub const SPEED_OF_LIGHT_KM_S: f64 = SPEED_OF_LIGHT_M_S / 1000.0;

/// Newtonian constant of gravitation, m^3 kg^-1 s^-2.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.674_30e-11;

/// Stefan-Boltzmann constant, W m^-2 K^-4.
pub const STEFAN_BOLTZMANN: f64 = 5.670_374_419e-8;

/// One megaparsec in metres (IAU 2015 parsec).
pub const MPC_M: f64 = 3.085_677_581_491_367_3e22;

/// Parsecs per megaparsec.
pub const PC_PER_MPC: f64 = 1.0e6;

/// Ratio of the energy density of one massless neutrino species to the
/// photon density: `7/8 * (4/11)^(4/3)`.
pub const NEUTRINO_PHOTON_RATIO: f64 = 0.227_107_317_660_239_4;

/// Effective number of neutrino species in the standard model.
pub const NEFF_STANDARD: f64 = 3.04;
