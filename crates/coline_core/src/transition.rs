//! CO rotational transitions and their CO(1-0) conversion ratios.
//!
//! Ratios are the mean line-luminosity ratios `r_J1 = L'_J / L'_10` for
//! submillimetre galaxies from Bothwell et al. 2013, MNRAS 429, 3047,
//! Table 4. Rest frequencies are the laboratory values from the CDMS
//! catalogue.

use crate::error::LineError;
use crate::measurement::Measurement;

/// Rest frequency of CO(1-0) in GHz.
pub const CO10_REST_FREQ_GHZ: f64 = 115.271_201_8;

/// CO rotational transitions J → J-1 with a tabulated conversion to CO(1-0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoTransition {
    /// CO(2-1)
    J2,
    /// CO(3-2)
    J3,
    /// CO(4-3)
    J4,
    /// CO(5-4)
    J5,
    /// CO(6-5)
    J6,
    /// CO(7-6)
    J7,
}

/// All tabulated transitions in order of upper level.
pub const ALL_TRANSITIONS: [CoTransition; 6] = [
    CoTransition::J2,
    CoTransition::J3,
    CoTransition::J4,
    CoTransition::J5,
    CoTransition::J6,
    CoTransition::J7,
];

impl CoTransition {
    /// Transition from its upper rotational level `J`.
    pub const fn from_upper_j(j: u8) -> Result<Self, LineError> {
        match j {
            2 => Ok(Self::J2),
            3 => Ok(Self::J3),
            4 => Ok(Self::J4),
            5 => Ok(Self::J5),
            6 => Ok(Self::J6),
            7 => Ok(Self::J7),
            _ => Err(LineError::InvalidTransition(j)),
        }
    }

    /// Upper rotational level `J`.
    pub const fn upper_j(self) -> u8 {
        match self {
            Self::J2 => 2,
            Self::J3 => 3,
            Self::J4 => 4,
            Self::J5 => 5,
            Self::J6 => 6,
            Self::J7 => 7,
        }
    }

    /// Conventional label, e.g. `"CO(3-2)"`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::J2 => "CO(2-1)",
            Self::J3 => "CO(3-2)",
            Self::J4 => "CO(4-3)",
            Self::J5 => "CO(5-4)",
            Self::J6 => "CO(6-5)",
            Self::J7 => "CO(7-6)",
        }
    }

    /// `(ratio, ratio uncertainty)` converting this line to CO(1-0).
    pub const fn ratio_pair(self) -> (f64, f64) {
        match self {
            Self::J2 => (0.84, 0.13),
            Self::J3 => (0.52, 0.09),
            Self::J4 => (0.41, 0.07),
            Self::J5 => (0.32, 0.05),
            Self::J6 => (0.21, 0.04),
            Self::J7 => (0.18, 0.04),
        }
    }

    /// Conversion ratio as a [`Measurement`].
    pub const fn ratio_to_co10(self) -> Measurement {
        let (value, sigma) = self.ratio_pair();
        Measurement { value, sigma }
    }

    /// Laboratory rest frequency in GHz.
    pub const fn rest_frequency_ghz(self) -> f64 {
        match self {
            Self::J2 => 230.538_000_0,
            Self::J3 => 345.795_989_9,
            Self::J4 => 461.040_768_2,
            Self::J5 => 576.267_930_5,
            Self::J6 => 691.473_076_3,
            Self::J7 => 806.651_806_0,
        }
    }

    /// Observed frequency `nu_rest / (1+z)` in GHz.
    pub fn observed_frequency_ghz(self, z: f64) -> Result<f64, LineError> {
        observed_frequency_ghz(self.rest_frequency_ghz(), z)
    }
}

impl std::fmt::Display for CoTransition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl TryFrom<u8> for CoTransition {
    type Error = LineError;

    fn try_from(j: u8) -> Result<Self, Self::Error> {
        Self::from_upper_j(j)
    }
}

/// Redshift a rest frequency to the observer frame.
pub fn observed_frequency_ghz(rest_ghz: f64, z: f64) -> Result<f64, LineError> {
    if !(z.is_finite() && z >= 0.0) {
        return Err(LineError::InvalidRedshift(z));
    }
    Ok(rest_ghz / (1.0 + z))
}
