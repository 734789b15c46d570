//! Flat ΛCDM cosmological distances.
//!
//! This crate provides:
//! - A validated, immutable [`FlatLambdaCdm`] parameter set including photon
//!   and massless-neutrino densities derived from the CMB temperature
//! - Comoving, luminosity and angular diameter distances plus distance modulus
//! - The [`DistanceModel`] trait used by downstream luminosity calculations
//! - Adaptive Simpson quadrature for the distance integrals

pub mod constants;
pub mod error;
pub mod flat_lcdm;
pub mod integrate;

pub use constants::{MPC_M, NEFF_STANDARD, PC_PER_MPC, SPEED_OF_LIGHT_KM_S};
pub use error::CosmoError;
pub use flat_lcdm::{DistanceModel, FlatLambdaCdm};
pub use integrate::{QuadratureConfig, adaptive_simpson};
