//! The scalar capability shared by [`Vector`](crate::Vector) and
//! [`Matrix`](crate::Matrix) element types.

use std::fmt::Debug;
use std::ops::{Div, Mul, Neg, Sub};

use num::complex::Complex64;
use num::{One, Zero};

use crate::complex::Polar;

/// A ring-like scalar: the capability set a matrix or vector element type
/// must provide.
///
/// This is the full arithmetic closure (`+`, `-`, `*`, `/` with itself,
/// `*` and `/` with `f64`), the `0`/`1` literals through [`Zero`] and
/// [`One`], and a square root generalized to the element type. The square
/// root is the one piece that genuinely differs between element types:
/// for real scalars it is the ordinary `sqrt`, while for either complex
/// representation it must be the complex power `z^0.5`, because the sum of
/// squared complex elements is itself complex and a naive real square root
/// would be wrong. Resolving this at compile time through the trait is
/// what lets `magnitude`/`normalize` stay generic.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + Zero
    + One
    + Neg<Output = Self>
    + Sub<Output = Self>
    + Div<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
{
    /// Square root generalized to the element type.
    fn sqrt(&self) -> Self;
}

impl Scalar for f64 {
    fn sqrt(&self) -> Self {
        f64::sqrt(*self)
    }
}

impl Scalar for Complex64 {
    fn sqrt(&self) -> Self {
        self.powf(0.5)
    }
}

impl Scalar for Polar {
    fn sqrt(&self) -> Self {
        self.pow_real(0.5)
    }
}
