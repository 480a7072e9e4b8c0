//! Arithmetic operators for [`Poly`].
//!
//! Sums and differences of unequal ranks keep the longer operand's
//! length, padding the shorter one with zeros. Products keep every
//! coefficient slot of the convolution, zero or not.

use std::ops::{Add, Mul, Neg, Sub};

use itertools::{
    EitherOrBoth::{Both, Left, Right},
    Itertools,
};

use crate::util::linalg::convolve_1d;

use super::Poly;

impl Add for Poly {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .into_iter()
                .zip_longest(rhs.0)
                .map(|p| match p {
                    Both(a, b) => a + b,
                    Left(a) => a,
                    Right(b) => b,
                })
                .collect_vec(),
        )
    }
}

impl Sub for Poly {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(
            self.0
                .into_iter()
                .zip_longest(rhs.0)
                .map(|p| match p {
                    Both(a, b) => a - b,
                    Left(a) => a,
                    Right(b) => -b,
                })
                .collect_vec(),
        )
    }
}

impl Mul for Poly {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(convolve_1d(&self.0, &rhs.0))
    }
}

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(self.0.into_iter().map(Neg::neg).collect_vec())
    }
}
