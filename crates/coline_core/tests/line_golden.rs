//! Golden-value tests for CO flux conversion and L'_CO.
//!
//! Luminosity references use H0 = 67.4 km/s/Mpc, Tcmb0 = 2.725 K,
//! Om0 = 0.315 with massless neutrinos, computed independently by composite
//! Simpson integration of the distance integral.

use coline_core::*;

fn assert_rel(actual: f64, expected: f64, tol: f64, what: &str) {
    let rel = ((actual - expected) / expected).abs();
    assert!(rel < tol, "{what} = {actual}, expected {expected} (rel {rel:.2e})");
}

#[test]
fn co32_ten_jansky() {
    // CO(3-2) flux of 10 ± 1 Jy km/s
    let s = to_co10(3, 10.0, 1.0).unwrap();
    assert_rel(s.value, 5.2, 1e-12, "S_10");
    assert_rel(s.sigma, 1.039_422_916_814_902_7, 1e-3, "σ(S_10)");
}

#[test]
fn conversion_is_linear() {
    for t in ALL_TRANSITIONS {
        let j = t.upper_j();
        let a = to_co10(j, 4.0, 0.4).unwrap();
        let b = to_co10(j, 8.0, 0.8).unwrap();
        assert_rel(b.value, 2.0 * a.value, 1e-12, &format!("{t} value"));
        assert_rel(b.sigma, 2.0 * a.sigma, 1e-12, &format!("{t} sigma"));
    }
}

#[test]
fn invalid_transitions_rejected() {
    for j in [0u8, 1, 8, 9, 42] {
        assert_eq!(to_co10(j, 1.0, 0.1), Err(LineError::InvalidTransition(j)));
    }
}

#[test]
fn luminosity_standard_argument() {
    let calc = LuminosityCalculator::planck();
    let lp = calc.apparent_luminosity(1.0, 115.27, 1.0).unwrap();
    assert_rel(lp, 14_145_481_455.135_773, 1e-8, "L'(z=1)");
}

#[test]
fn luminosity_shifted_argument() {
    let calc = LuminosityCalculator::planck()
        .with_distance_argument(DistanceArgument::OnePlusRedshift);
    let lp = calc.apparent_luminosity(1.0, 115.27, 1.0).unwrap();
    assert_rel(lp, 77_621_822_161.472_73, 1e-8, "L'(z=1, shifted)");
}

#[test]
fn luminosity_at_zero_redshift() {
    // Standard: D_L(0) = 0. Shifted: 3.25e7 * I * nu^-2 * D_L(1)^2.
    let std_calc = LuminosityCalculator::planck();
    assert_eq!(std_calc.apparent_luminosity(1.0, 115.27, 0.0).unwrap(), 0.0);

    let shifted = LuminosityCalculator::planck()
        .with_distance_argument(DistanceArgument::OnePlusRedshift);
    let lp = shifted.apparent_luminosity(1.0, 115.27, 0.0).unwrap();
    let dl1 = 6_801.872_282_484_627_f64;
    let expected = 3.25e7 * dl1 * dl1 / (115.27 * 115.27);
    assert_rel(lp, expected, 1e-8, "L'(z=0, shifted)");
    assert_rel(lp, 113_163_851_641.086_18, 1e-8, "L'(z=0, shifted) golden");
}

#[test]
fn free_function_matches_method() {
    let calc = LuminosityCalculator::planck();
    let a = apparent_luminosity(3.0, 90.0, 1.7, &calc).unwrap();
    let b = calc.apparent_luminosity(3.0, 90.0, 1.7).unwrap();
    assert_eq!(a, b);
}

#[test]
fn luminosity_scalings() {
    let calc = LuminosityCalculator::planck();
    let base = calc.apparent_luminosity(1.0, 100.0, 2.5).unwrap();
    let double_i = calc.apparent_luminosity(2.0, 100.0, 2.5).unwrap();
    let double_nu = calc.apparent_luminosity(1.0, 200.0, 2.5).unwrap();
    assert_rel(double_i, 2.0 * base, 1e-12, "2I");
    assert_rel(double_nu, base / 4.0, 1e-12, "2nu");
}

#[test]
fn convert_then_luminosity_is_sane() {
    let calc = LuminosityCalculator::planck();
    let mut prev = 0.0;
    for flux in [0.5, 1.0, 2.0, 5.0, 10.0] {
        let s10 = to_co10(4, flux, 0.1 * flux).unwrap();
        let z = 2.3;
        let nu_obs = CO10_REST_FREQ_GHZ / (1.0 + z);
        let lp = calc.apparent_luminosity_measurement(s10, nu_obs, z).unwrap();
        assert!(lp.value.is_finite() && lp.value > 0.0);
        assert!(lp.sigma.is_finite() && lp.sigma > 0.0);
        assert!(lp.value > prev, "L' not monotonic in flux");
        prev = lp.value;
    }
}

#[test]
fn high_j_transition_luminosity() {
    let calc = LuminosityCalculator::planck();
    let flux = Measurement::new(2.0, 0.2).unwrap();
    let lp = calc
        .apparent_luminosity_for_transition(CoTransition::J5, flux, 3.0)
        .unwrap();
    let nu_obs = CoTransition::J5.rest_frequency_ghz() / 4.0;
    let direct = calc.apparent_luminosity(2.0, nu_obs, 3.0).unwrap();
    assert_rel(lp.value, direct, 1e-12, "L'_54");
    assert_rel(lp.sigma, 0.1 * direct, 1e-12, "σ(L'_54)");
}

#[test]
fn custom_cosmology_injected() {
    let cosmo = FlatLambdaCdm::new(70.0, 2.725, 0.3).unwrap();
    let calc = LuminosityCalculator::new(cosmo);
    let planck = LuminosityCalculator::planck();
    let a = calc.apparent_luminosity(1.0, 100.0, 1.0).unwrap();
    let b = planck.apparent_luminosity(1.0, 100.0, 1.0).unwrap();
    assert!(a < b, "higher H0 should give smaller L'");
}
