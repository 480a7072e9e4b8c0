//! Polynomials over [`Complex64`] in the monomial basis.
//!
//! Coefficients are stored little-endian: `self.0[i]` multiplies `x^i`.
//! Zero coefficients are kept as written, so the rank of a polynomial is
//! exactly `coefficients - 1` even when the leading coefficient is zero.
//! Evaluation and arithmetic skip zero terms rather than normalizing
//! them away.

use std::fmt;

use num::complex::Complex64;
use num::Zero;

use crate::complex::complex_fmt;
use crate::error::Result;

mod factors;
mod impl_num;
mod roots;

pub use factors::Factor;
pub use roots::{durand_kerner, initial_guesses_circle, DurandKernerConfig};

/// A polynomial with complex coefficients, lowest power first.
#[derive(Clone, Debug, PartialEq)]
pub struct Poly(pub(crate) Vec<Complex64>);

impl Poly {
    /// Makes a polynomial from the given coefficients, constant term
    /// first. An empty slice yields the zero polynomial of rank 0.
    #[must_use]
    pub fn new(coeffs: &[Complex64]) -> Self {
        if coeffs.is_empty() {
            return Self(vec![Complex64::zero()]);
        }
        Self(coeffs.to_vec())
    }

    /// Makes a polynomial from real coefficients, constant term first.
    #[must_use]
    pub fn from_reals(coeffs: &[f64]) -> Self {
        Self::new(
            &coeffs
                .iter()
                .map(|&c| Complex64::new(c, 0.0))
                .collect::<Vec<_>>(),
        )
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self(vec![Complex64::zero()])
    }

    /// The constant polynomial `1`.
    #[must_use]
    pub fn one() -> Self {
        Self(vec![Complex64::new(1.0, 0.0)])
    }

    /// The rank (degree slot count minus one). The leading coefficient
    /// may be zero; stored length is what counts.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.0.len() - 1
    }

    /// The coefficient of `x^i`, or zero beyond the stored length.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Complex64 {
        self.0.get(i).copied().unwrap_or_else(Complex64::zero)
    }

    /// The coefficients, constant term first.
    #[must_use]
    pub fn as_slice(&self) -> &[Complex64] {
        &self.0
    }

    /// Evaluates the polynomial at `x` by summing `c_i * x^i` over the
    /// nonzero coefficients, with `x^i` computed as a complex power.
    #[must_use]
    pub fn eval(&self, x: Complex64) -> Complex64 {
        let mut acc = Complex64::zero();
        for (i, c) in self.0.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if i == 0 {
                acc += *c;
            } else {
                acc += c * x.powc(Complex64::new(i as f64, 0.0));
            }
        }
        acc
    }

    /// Finds the roots with default Durand-Kerner settings, returned as
    /// linear factors.
    ///
    /// # Errors
    /// [`crate::Error::DegeneratePolynomial`] if the rank is below 2.
    pub fn factorize(&self) -> Result<Vec<Factor>> {
        durand_kerner(self, &DurandKernerConfig::default())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.0.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            first = false;
            match i {
                0 => write!(f, "{}", complex_fmt(c))?,
                1 => write!(f, "{}x", complex_fmt(c))?,
                _ => write!(f, "{}x^{i}", complex_fmt(c))?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use crate::poly;

    use super::Poly;

    #[test]
    fn empty_coefficients_make_the_zero_polynomial() {
        let p = Poly::new(&[]);
        assert_eq!(p.rank(), 0);
        assert_eq!(p, Poly::zero());
    }

    #[test]
    fn rank_counts_stored_slots() {
        // leading zero is kept, not trimmed
        let p = poly![1.0, 2.0, 0.0];
        assert_eq!(p.rank(), 2);
        assert_eq!(p.coeff(2), Complex64::new(0.0, 0.0));
        assert_eq!(p.coeff(9), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn eval_real_polynomial() {
        // 1 + 2x + 3x^2 at x = 2 is 17
        let p = poly![1.0, 2.0, 3.0];
        let y = p.eval(Complex64::new(2.0, 0.0));
        assert!((y - Complex64::new(17.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn eval_at_zero_is_the_constant_term() {
        // skipping zero coefficients keeps 0^i out of the sum entirely
        let p = poly![0.0, -16.0, 0.0, 0.0, 0.0, 4.0];
        assert_eq!(p.eval(Complex64::new(0.0, 0.0)), Complex64::new(0.0, 0.0));
    }

    #[test]
    fn eval_complex_argument() {
        // x^2 + 1 at x = i is 0
        let p = poly![1.0, 0.0, 1.0];
        let y = p.eval(Complex64::new(0.0, 1.0));
        assert!(y.norm() < 1e-12);
    }

    #[test]
    fn display_skips_zero_terms() {
        let p = poly![1.0, 0.0, 3.0];
        let s = format!("{p}");
        assert!(s.contains("x^2"), "{s}");
        assert!(!s.contains("x +"), "{s}");
        assert_eq!(format!("{}", Poly::zero()), "0");
    }
}
