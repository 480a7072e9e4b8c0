//! Linear factors `coeff * x + constant` and conversion between factored
//! and expanded form.

use std::fmt;

use num::complex::Complex64;

use crate::complex::complex_fmt;

use super::Poly;

/// A rank-1 polynomial `coeff * x + constant`, the atom of a
/// factorization. Root finding always produces monic factors, so
/// `coeff` is real.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Factor {
    pub coeff: f64,
    pub constant: Complex64,
}

impl Factor {
    #[must_use]
    pub fn new(coeff: f64, constant: Complex64) -> Self {
        Self { coeff, constant }
    }

    /// The monic factor `(x - root)` vanishing at `root`.
    #[must_use]
    pub fn from_root(root: Complex64) -> Self {
        Self {
            coeff: 1.0,
            constant: -root,
        }
    }

    /// The point where this factor vanishes.
    #[must_use]
    pub fn root(&self) -> Complex64 {
        -self.constant / self.coeff
    }

    /// This factor as a rank-1 [`Poly`], constant term first.
    #[must_use]
    pub fn as_poly(&self) -> Poly {
        Poly::new(&[self.constant, Complex64::new(self.coeff, 0.0)])
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (self.coeff - 1.0).abs() < f64::EPSILON {
            write!(f, "(x + {})", complex_fmt(&self.constant))
        } else {
            write!(f, "({}x + {})", self.coeff, complex_fmt(&self.constant))
        }
    }
}

impl Poly {
    /// Expands a product of linear factors into coefficient form by
    /// folding the factors together with convolution. The result's rank
    /// equals the number of factors, and intermediate zero coefficients
    /// are kept.
    #[must_use]
    pub fn from_factors(factors: &[Factor]) -> Self {
        factors
            .iter()
            .fold(Self::one(), |acc, f| acc * f.as_poly())
    }
}
