//! Root finding by Durand-Kerner simultaneous iteration.
//!
//! All roots are refined together: each estimate is nudged by the
//! Weierstrass correction `P(v) / prod (v - v_j)` over the other
//! estimates. The iteration is only locally stable on monic
//! polynomials, so the input is scaled to monic internally; scaling by
//! a nonzero constant leaves the roots untouched.

use num::complex::Complex64;
use num::Zero;

use crate::error::{Error, Result};

use super::{Factor, Poly};

/// Tuning knobs for [`durand_kerner`].
#[derive(Clone, Debug)]
pub struct DurandKernerConfig {
    /// Iteration ceiling. Hitting it is not an error, just a quality
    /// warning.
    pub max_iterations: usize,

    /// The iteration stops once every estimate moved by less than this
    /// in the same sweep.
    pub convergence_epsilon: f64,

    /// Initial guess components smaller than this in magnitude are
    /// snapped to zero.
    pub min_start_value: f64,
}

impl Default for DurandKernerConfig {
    fn default() -> Self {
        Self {
            max_iterations: 500,
            convergence_epsilon: 1e-10,
            min_start_value: 1e-9,
        }
    }
}

/// Finds all `rank` roots of `poly` simultaneously and returns them as
/// monic linear factors, one per root, multiplicity included.
///
/// Non-convergence within the iteration ceiling is reported with
/// `log::warn` and the current estimates are returned anyway.
///
/// # Errors
/// [`Error::DegeneratePolynomial`] if the rank is below 2 or the leading
/// coefficient is zero; rank-1 polynomials are already factored and
/// constants have no roots to find.
pub fn durand_kerner(poly: &Poly, config: &DurandKernerConfig) -> Result<Vec<Factor>> {
    let rank = poly.rank();
    let leading = poly.coeff(rank);
    if rank < 2 || leading.is_zero() {
        return Err(Error::DegeneratePolynomial { rank });
    }

    // scale to monic, the correction term is unstable otherwise
    let monic = Poly::new(
        &poly
            .as_slice()
            .iter()
            .map(|c| c / leading)
            .collect::<Vec<_>>(),
    );

    let mut guesses = initial_guesses_circle(&monic, config.min_start_value);
    let mut next = guesses.clone();

    for iteration in 0..config.max_iterations {
        let mut worst_delta = 0.0_f64;

        for i in 0..rank {
            let v = guesses[i];
            let mut denom = Complex64::new(1.0, 0.0);
            for (j, &w) in guesses.iter().enumerate() {
                if j != i {
                    denom *= v - w;
                }
            }
            let correction = monic.eval(v) / denom;
            next[i] = v - correction;
            worst_delta = worst_delta.max(correction.norm());
        }

        std::mem::swap(&mut guesses, &mut next);
        log::trace!("iteration {iteration}: worst delta {worst_delta:e}");

        if worst_delta < config.convergence_epsilon {
            return Ok(guesses.into_iter().map(Factor::from_root).collect());
        }
    }

    log::warn!(
        "no convergence after {} iterations, roots are low quality",
        config.max_iterations
    );
    Ok(guesses.into_iter().map(Factor::from_root).collect())
}

/// Spreads `rank` starting estimates evenly on a circle around the
/// origin. The radius is `(|lowest nonzero coeff| / |leading|)^(1/rank)`
/// and the angles carry a half-step offset so no guess starts on the
/// real axis. Components below `min_start_value` snap to zero.
#[must_use]
pub fn initial_guesses_circle(poly: &Poly, min_start_value: f64) -> Vec<Complex64> {
    let rank = poly.rank();
    let leading = poly.coeff(rank);
    let lowest = poly
        .as_slice()
        .iter()
        .find(|c| !c.is_zero())
        .copied()
        .unwrap_or_else(Complex64::zero);
    let radius = (lowest.norm() / leading.norm()).powf(1.0 / rank as f64);

    let snap = |x: f64| if x.abs() < min_start_value { 0.0 } else { x };

    (0..rank)
        .map(|i| {
            let angle = i as f64 * std::f64::consts::TAU / rank as f64
                + std::f64::consts::PI / (2.0 * rank as f64);
            Complex64::new(snap(radius * angle.cos()), snap(radius * angle.sin()))
        })
        .collect()
}
