#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::cast_precision_loss)]

//! Complex, matrix/vector and polynomial numerics.
//!
//! Three layers build on each other:
//! - [`Polar`] complements [`Complex64`] with a polar representation,
//!   and [`Scalar`] abstracts over reals, complex numbers and polar
//!   forms so the linear algebra is written once;
//! - [`Matrix`] and [`Vector`] provide dense row-major algebra with
//!   elementwise `*`, true matrix product `%`, cofactor determinants,
//!   inverses and QR decomposition;
//! - [`Poly`] is a complex-coefficient polynomial with arithmetic,
//!   evaluation and Durand-Kerner root finding into linear [`Factor`]s.
//!
//! ```
//! use polymat::poly;
//!
//! let p = poly![-6.0, 11.0, -6.0, 1.0]; // (x - 1)(x - 2)(x - 3)
//! let factors = p.factorize().unwrap();
//! assert_eq!(factors.len(), 3);
//! ```

pub use num::complex::Complex64;

mod complex;
mod error;
mod matrix;
mod poly;
mod scalar;
mod util;
mod vector;

pub use complex::Polar;
pub use error::{Error, Result};
pub use matrix::Matrix;
pub use poly::{durand_kerner, initial_guesses_circle, DurandKernerConfig, Factor, Poly};
pub use scalar::Scalar;
pub use vector::Vector;

/// Shorthand for [`Complex64`] literals: `complex!(re)` or
/// `complex!(re, im)`.
#[macro_export]
macro_rules! complex {
    ($re:expr) => {
        $crate::Complex64::new($re, 0.0)
    };
    ($re:expr, $im:expr) => {
        $crate::Complex64::new($re, $im)
    };
}

/// A [`Poly`] from real coefficients, constant term first.
#[macro_export]
macro_rules! poly {
    ($($coeff:expr),+ $(,)?) => {
        $crate::Poly::from_reals(&[$($coeff),+])
    };
}

/// A [`Vector`] from its elements.
///
/// # Panics
/// If no elements are given.
#[macro_export]
macro_rules! vector {
    ($($x:expr),+ $(,)?) => {
        $crate::Vector::from_vec(vec![$($x),+]).expect("vector! given no elements")
    };
}

/// A [`Matrix`] from bracketed rows: `matrix![[a, b], [c, d]]`.
///
/// # Panics
/// If the rows are empty or ragged.
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),+ $(,)?]),+ $(,)?) => {
        $crate::Matrix::from_rows(vec![$(vec![$($x),+]),+])
            .expect("matrix! rows must be non-empty and rectangular")
    };
}
