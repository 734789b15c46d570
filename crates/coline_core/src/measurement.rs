//! A measured value with its one-sigma uncertainty.

use crate::error::LineError;

/// Value and one-sigma uncertainty in the same units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    pub value: f64,
    pub sigma: f64,
}

impl Measurement {
    /// Validated constructor: finite value, finite non-negative sigma.
    pub fn new(value: f64, sigma: f64) -> Result<Self, LineError> {
        if !value.is_finite() {
            return Err(LineError::InvalidMeasurement("value must be finite"));
        }
        if !(sigma.is_finite() && sigma >= 0.0) {
            return Err(LineError::InvalidMeasurement(
                "uncertainty must be finite and non-negative",
            ));
        }
        Ok(Self { value, sigma })
    }

    /// A value with no uncertainty.
    pub const fn exact(value: f64) -> Self {
        Self { value, sigma: 0.0 }
    }

    /// `sigma / |value|`. Fails for a zero value.
    pub fn relative_error(&self) -> Result<f64, LineError> {
        if self.value == 0.0 {
            return Err(LineError::ZeroFlux);
        }
        Ok(self.sigma / self.value.abs())
    }

    /// Product of two independent measurements, relative errors in quadrature.
    pub fn mul_independent(&self, other: &Self) -> Result<Self, LineError> {
        let value = self.value * other.value;
        let rel = self.relative_error()?.hypot(other.relative_error()?);
        Ok(Self {
            value,
            sigma: value.abs() * rel,
        })
    }

    /// Multiply by an exact factor; sigma scales by its magnitude.
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            value: self.value * factor,
            sigma: self.sigma * factor.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative_sigma() {
        assert!(Measurement::new(1.0, -0.1).is_err());
        assert!(Measurement::new(f64::NAN, 0.1).is_err());
        assert!(Measurement::new(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn relative_error_of_zero() {
        assert_eq!(
            Measurement::exact(0.0).relative_error(),
            Err(LineError::ZeroFlux)
        );
    }

    #[test]
    fn quadrature_product() {
        let a = Measurement::new(10.0, 1.0).unwrap();
        let b = Measurement::new(2.0, 0.2).unwrap();
        let p = a.mul_independent(&b).unwrap();
        assert!((p.value - 20.0).abs() < 1e-12);
        let expected = 20.0 * (0.1_f64 * 0.1 + 0.1 * 0.1).sqrt();
        assert!((p.sigma - expected).abs() < 1e-12);
    }

    #[test]
    fn negative_value_keeps_positive_sigma() {
        let m = Measurement::new(-4.0, 1.0).unwrap().scale(-2.0);
        assert_eq!(m.value, 8.0);
        assert_eq!(m.sigma, 2.0);
    }
}
