//! Adaptive Simpson quadrature for smooth one-dimensional integrands.
//!
//! The distance integrals of a flat-ΛCDM model have integrands `1/E(z)` that
//! are smooth, positive and slowly varying, so recursive Simpson refinement
//! with Richardson extrapolation converges in a few hundred evaluations even
//! for tight tolerances.

use crate::error::CosmoError;

/// Quadrature settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadratureConfig {
    /// Target relative tolerance on the integral.
    pub rel_tol: f64,
    /// Maximum bisection depth of any sub-interval.
    pub max_depth: u32,
}

impl QuadratureConfig {
    pub const DEFAULT: Self = Self {
        rel_tol: 1e-10,
        max_depth: 40,
    };

    fn validate(&self) -> Result<(), CosmoError> {
        if !(self.rel_tol.is_finite() && self.rel_tol > 0.0) {
            return Err(CosmoError::InvalidParameter(
                "quadrature tolerance must be positive",
            ));
        }
        if self.max_depth == 0 {
            return Err(CosmoError::InvalidParameter(
                "quadrature depth must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for QuadratureConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

struct Panel {
    a: f64,
    b: f64,
    fa: f64,
    fm: f64,
    fb: f64,
    whole: f64,
}

fn simpson(a: f64, b: f64, fa: f64, fm: f64, fb: f64) -> f64 {
    (b - a) / 6.0 * (fa + 4.0 * fm + fb)
}

/// Integrate `f` over `[a, b]` to the requested relative tolerance.
///
/// Returns `0.0` for an empty interval and a negated integral when `b < a`.
pub fn adaptive_simpson<F>(
    f: F,
    a: f64,
    b: f64,
    config: &QuadratureConfig,
) -> Result<f64, CosmoError>
where
    F: Fn(f64) -> f64,
{
    config.validate()?;
    if a == b {
        return Ok(0.0);
    }
    if b < a {
        return adaptive_simpson(f, b, a, config).map(|v| -v);
    }

    let fa = f(a);
    let fb = f(b);
    let m = 0.5 * (a + b);
    let fm = f(m);
    let whole = simpson(a, b, fa, fm, fb);

    let panel = || Panel {
        a,
        b,
        fa,
        fm,
        fb,
        whole,
    };

    // The three-point estimate can overshoot badly for integrands that decay
    // over the interval, so rescale once from the refined result. The floor
    // keeps near-cancelling integrands from demanding unreachable tolerances.
    let coarse = whole.abs().max(f64::MIN_POSITIVE);
    let result = refine(&f, panel(), config.rel_tol * coarse, config.max_depth)?;
    if result.abs() >= 0.5 * coarse {
        return Ok(result);
    }
    let refined = result.abs().max(coarse * f64::EPSILON.sqrt());
    refine(&f, panel(), config.rel_tol * refined, config.max_depth)
}

fn refine<F>(f: &F, p: Panel, tol: f64, depth: u32) -> Result<f64, CosmoError>
where
    F: Fn(f64) -> f64,
{
    let m = 0.5 * (p.a + p.b);
    let lm = 0.5 * (p.a + m);
    let rm = 0.5 * (m + p.b);
    let flm = f(lm);
    let frm = f(rm);
    let left = simpson(p.a, m, p.fa, flm, p.fm);
    let right = simpson(m, p.b, p.fm, frm, p.fb);
    let delta = left + right - p.whole;

    if !delta.is_finite() {
        return Err(CosmoError::NoConvergence("integrand is not finite"));
    }
    if delta.abs() <= 15.0 * tol {
        return Ok(left + right + delta / 15.0);
    }
    if depth == 0 {
        log::warn!(
            "quadrature depth exhausted on [{:.6}, {:.6}] (error estimate {:.3e})",
            p.a,
            p.b,
            delta.abs() / 15.0
        );
        return Err(CosmoError::NoConvergence("adaptive Simpson depth exhausted"));
    }

    let l = refine(
        f,
        Panel {
            a: p.a,
            b: m,
            fa: p.fa,
            fm: flm,
            fb: p.fm,
            whole: left,
        },
        0.5 * tol,
        depth - 1,
    )?;
    let r = refine(
        f,
        Panel {
            a: m,
            b: p.b,
            fa: p.fm,
            fm: frm,
            fb: p.fb,
            whole: right,
        },
        0.5 * tol,
        depth - 1,
    )?;
    Ok(l + r)
}
