//! Polar representation of complex values.
//!
//! The rectangular representation used throughout the crate is
//! [`Complex64`]; this module adds the interchangeable polar form and the
//! lossless conversions between the two. Multiplication and division stay
//! native to the polar form (magnitudes combine, angles add or subtract),
//! while addition and subtraction round-trip through the rectangular form,
//! which is the cheapest correct way to do them.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use num::complex::Complex64;
use num::{One, Zero};

/// A complex value stored as `(magnitude, angle)`.
///
/// The angle is not normalized to a canonical range by construction, and
/// the magnitude may be transiently negative as an arithmetic artifact
/// (unary negation flips its sign). [`Polar::absolute`] produces the
/// canonical non-negative magnitude when one is needed.
///
/// # Examples
/// ```
/// use polymat::{Complex64, Polar};
///
/// let p = Polar::new(2.0, std::f64::consts::FRAC_PI_2);
/// let c = Complex64::from(p);
/// assert!((c.re).abs() < 1e-12);
/// assert!((c.im - 2.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub magnitude: f64,
    pub angle: f64,
}

impl Polar {
    #[must_use]
    pub const fn new(magnitude: f64, angle: f64) -> Self {
        Self { magnitude, angle }
    }

    /// A purely real value, placed on the positive real axis (angle 0).
    #[must_use]
    pub const fn from_real(value: f64) -> Self {
        Self {
            magnitude: value,
            angle: 0.0,
        }
    }

    /// The rectangular real part, `magnitude * cos(angle)`, computed on
    /// demand.
    #[must_use]
    pub fn real(&self) -> f64 {
        self.magnitude * self.angle.cos()
    }

    /// The rectangular imaginary part, `magnitude * sin(angle)`, computed
    /// on demand.
    #[must_use]
    pub fn imaginary(&self) -> f64 {
        self.magnitude * self.angle.sin()
    }

    /// The canonical (non-negative) magnitude.
    #[must_use]
    pub fn absolute(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Complex conjugate: same magnitude, negated angle.
    #[must_use]
    pub fn conjugate(&self) -> Self {
        Self::new(self.magnitude, -self.angle)
    }

    /// Raise to a real power by de Moivre: `(m^k, angle * k)`.
    ///
    /// A negative transient magnitude yields `NaN` here, the same way
    /// `pow` does for any negative base; callers that care should
    /// canonicalize first.
    #[must_use]
    pub fn pow_real(&self, exponent: f64) -> Self {
        Self::new(self.magnitude.powf(exponent), self.angle * exponent)
    }
}

impl From<Polar> for Complex64 {
    fn from(p: Polar) -> Self {
        Complex64::from_polar(p.magnitude, p.angle)
    }
}

impl From<Complex64> for Polar {
    fn from(c: Complex64) -> Self {
        // atan2(0, 0) is 0, so the argument of zero is 0 by convention
        Self::new(c.norm(), c.arg())
    }
}

impl Add for Polar {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::from(Complex64::from(self) + Complex64::from(rhs))
    }
}

impl Add<f64> for Polar {
    type Output = Self;

    fn add(self, rhs: f64) -> Self {
        self + Self::from_real(rhs)
    }
}

impl Add<Polar> for f64 {
    type Output = Polar;

    fn add(self, rhs: Polar) -> Polar {
        // + is commutative, so reuse the other arrangement
        rhs + self
    }
}

impl Sub for Polar {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::from(Complex64::from(self) - Complex64::from(rhs))
    }
}

impl Sub<f64> for Polar {
    type Output = Self;

    fn sub(self, rhs: f64) -> Self {
        self - Self::from_real(rhs)
    }
}

impl Sub<Polar> for f64 {
    type Output = Polar;

    fn sub(self, rhs: Polar) -> Polar {
        Polar::from_real(self) - rhs
    }
}

impl Mul for Polar {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(self.magnitude * rhs.magnitude, self.angle + rhs.angle)
    }
}

impl Mul<f64> for Polar {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.magnitude * rhs, self.angle)
    }
}

impl Mul<Polar> for f64 {
    type Output = Polar;

    fn mul(self, rhs: Polar) -> Polar {
        rhs * self
    }
}

impl Div for Polar {
    type Output = Self;

    fn div(self, rhs: Self) -> Self {
        Self::new(self.magnitude / rhs.magnitude, self.angle - rhs.angle)
    }
}

impl Div<f64> for Polar {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        Self::new(self.magnitude / rhs, self.angle)
    }
}

impl Div<Polar> for f64 {
    type Output = Polar;

    fn div(self, rhs: Polar) -> Polar {
        Polar::from(Complex64::from_polar(self, 0.0) / Complex64::from(rhs))
    }
}

impl Neg for Polar {
    type Output = Self;

    fn neg(self) -> Self {
        // negate the magnitude, leaving it transiently non-canonical
        Self::new(-self.magnitude, self.angle)
    }
}

impl PartialEq<f64> for Polar {
    fn eq(&self, other: &f64) -> bool {
        self.magnitude == *other && self.angle == 0.0
    }
}

impl Zero for Polar {
    fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.magnitude == 0.0
    }
}

impl One for Polar {
    fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    fn is_one(&self) -> bool {
        self.magnitude == 1.0 && self.angle == 0.0
    }
}

impl fmt::Display for Polar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+.6}\u{2220} {:+.6}\u{3c0}",
            self.magnitude,
            self.angle / std::f64::consts::PI
        )
    }
}

/// Formatting for [`Complex64`], because the built-in implementation is not
/// good enough for polynomial and matrix display.
pub(crate) fn complex_fmt(c: &Complex64) -> String {
    if c.im == 0.0 {
        format!("{}", c.re)
    } else if c.im == 1.0 {
        format!("({}+i)", c.re)
    } else {
        format!("({}+i{})", c.re, c.im)
    }
}

#[cfg(test)]
mod test {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use num::complex::Complex64;
    use num::{One, Zero};

    use super::{complex_fmt, Polar};

    #[test]
    fn round_trip_polar_to_cart_and_back() {
        let cases = [
            Polar::new(1.0, FRAC_PI_4),
            Polar::new(2.5, -FRAC_PI_2),
            Polar::new(0.001, 3.0),
            Polar::new(17.0, 0.0),
        ];
        for p in cases {
            let back = Polar::from(Complex64::from(p));
            assert!((back.magnitude - p.magnitude).abs() < 1e-12, "{p:?}");
            assert!((back.angle - p.angle).abs() < 1e-12, "{p:?}");
        }
    }

    #[test]
    fn argument_of_zero_is_zero() {
        let p = Polar::from(Complex64::zero());
        assert_eq!(p.angle, 0.0);
        assert_eq!(p.magnitude, 0.0);
    }

    #[test]
    fn multiplication_stays_polar() {
        let a = Polar::new(2.0, FRAC_PI_4);
        let b = Polar::new(3.0, FRAC_PI_4);
        let prod = a * b;
        assert_eq!(prod.magnitude, 6.0);
        assert_eq!(prod.angle, FRAC_PI_2);
    }

    #[test]
    fn division_subtracts_angles() {
        let a = Polar::new(6.0, PI);
        let b = Polar::new(2.0, FRAC_PI_2);
        let q = a / b;
        assert_eq!(q.magnitude, 3.0);
        assert_eq!(q.angle, FRAC_PI_2);
    }

    #[test]
    fn addition_through_rectangular() {
        let a = Polar::from_real(1.0);
        let b = Polar::new(1.0, PI);
        let sum = a + b;
        assert!(sum.magnitude.abs() < 1e-12);
    }

    #[test]
    fn negation_flips_magnitude_sign() {
        let p = -Polar::new(2.0, FRAC_PI_4);
        assert_eq!(p.magnitude, -2.0);
        assert_eq!(p.angle, FRAC_PI_4);
        assert_eq!(p.absolute(), 2.0);
    }

    #[test]
    fn pow_real_de_moivre() {
        let p = Polar::new(4.0, FRAC_PI_2).pow_real(0.5);
        assert_eq!(p.magnitude, 2.0);
        assert_eq!(p.angle, FRAC_PI_4);
    }

    #[test]
    fn real_scalar_comparisons() {
        assert_eq!(Polar::from_real(3.0), 3.0);
        assert_ne!(Polar::new(3.0, 0.1), 3.0);
        assert!(Polar::zero().is_zero());
        assert!(Polar::one().is_one());
    }

    #[test]
    fn complex_display_helper() {
        assert_eq!(complex_fmt(&Complex64::new(2.0, 0.0)), "2");
        assert_eq!(complex_fmt(&Complex64::new(2.0, 1.0)), "(2+i)");
        assert_eq!(complex_fmt(&Complex64::new(2.0, -1.5)), "(2+i-1.5)");
    }
}
