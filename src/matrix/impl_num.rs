//! Operator implementations for [`Matrix`].
//!
//! `+`, `-` and `*` between matrices are element-wise and require
//! identical dimensions. The true matrix product is spelled `%` so that
//! `*` can keep its element-wise meaning; it delegates to the checked
//! [`Matrix::matmul`].

use std::ops::{Add, Div, Mul, Rem, Sub};

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::scalar::Scalar;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// True matrix product: `(m x p) % (p x n) -> (m x n)`.
    ///
    /// # Errors
    /// [`Error::DimensionMismatch`] unless the left column count equals
    /// the right row count.
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if self.col_count() != rhs.row_count() {
            return Err(Error::DimensionMismatch {
                op: "matrix product",
                left_rows: self.row_count(),
                left_cols: self.col_count(),
                right_rows: rhs.row_count(),
                right_cols: rhs.col_count(),
            });
        }

        let (m, p, n) = (self.row_count(), self.col_count(), rhs.col_count());
        let mut out = Self::zeros(m, n)?;
        for i in 0..m {
            for j in 0..n {
                let mut sum = T::zero();
                for k in 0..p {
                    sum = sum + self.data[i * p + k].clone() * rhs.data[k * n + j].clone();
                }
                out.data[i * n + j] = sum;
            }
        }
        Ok(out)
    }

    fn check_same_dimensions(&self, rhs: &Self, op: &'static str) -> Result<()> {
        if self.row_count() == rhs.row_count() && self.col_count() == rhs.col_count() {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                op,
                left_rows: self.row_count(),
                left_cols: self.col_count(),
                right_rows: rhs.row_count(),
                right_cols: rhs.col_count(),
            })
        }
    }

    fn zip_elementwise(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self {
            data: self
                .data
                .into_iter()
                .zip(rhs.data)
                .map(|(a, b)| f(a, b))
                .collect_vec(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    fn map_elementwise(self, f: impl Fn(T) -> T) -> Self {
        Self {
            data: self.data.into_iter().map(f).collect_vec(),
            rows: self.rows,
            cols: self.cols,
        }
    }
}

impl<T: Scalar> Add for Matrix<T> {
    type Output = Self;

    /// # Panics
    /// If the operands differ in dimensions.
    fn add(self, rhs: Self) -> Self {
        self.check_same_dimensions(&rhs, "matrix addition")
            .unwrap_or_else(|e| panic!("{e}"));
        self.zip_elementwise(rhs, |a, b| a + b)
    }
}

impl<T: Scalar> Sub for Matrix<T> {
    type Output = Self;

    /// # Panics
    /// If the operands differ in dimensions.
    fn sub(self, rhs: Self) -> Self {
        self.check_same_dimensions(&rhs, "matrix subtraction")
            .unwrap_or_else(|e| panic!("{e}"));
        self.zip_elementwise(rhs, |a, b| a - b)
    }
}

/// Element-wise product, not the matrix product (that is `%`).
impl<T: Scalar> Mul<Matrix<T>> for Matrix<T> {
    type Output = Self;

    /// # Panics
    /// If the operands differ in dimensions.
    fn mul(self, rhs: Matrix<T>) -> Self {
        self.check_same_dimensions(&rhs, "element product")
            .unwrap_or_else(|e| panic!("{e}"));
        self.zip_elementwise(rhs, |a, b| a * b)
    }
}

impl<T: Scalar> Mul<T> for Matrix<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map_elementwise(|x| x * rhs.clone())
    }
}

impl<T: Scalar> Div<T> for Matrix<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        self.map_elementwise(|x| x / rhs.clone())
    }
}

/// True matrix product, see [`Matrix::matmul`].
impl<T: Scalar> Rem for Matrix<T> {
    type Output = Self;

    /// # Panics
    /// If the left column count does not equal the right row count.
    fn rem(self, rhs: Self) -> Self {
        self.matmul(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::matrix;
    use crate::matrix::Matrix;

    #[test]
    fn elementwise_arithmetic() {
        let a = matrix![[1.0, 2.0], [3.0, 4.0]];
        let b = matrix![[5.0, 6.0], [7.0, 8.0]];
        assert_eq!(a.clone() + b.clone(), matrix![[6.0, 8.0], [10.0, 12.0]]);
        assert_eq!(b.clone() - a.clone(), matrix![[4.0, 4.0], [4.0, 4.0]]);
        assert_eq!(a * b, matrix![[5.0, 12.0], [21.0, 32.0]]);
    }

    #[test]
    fn scalar_arithmetic() {
        let m = matrix![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(m.clone() * 2.0, matrix![[2.0, 4.0], [6.0, 8.0]]);
        assert_eq!(m.clone() / 2.0, matrix![[0.5, 1.0], [1.5, 2.0]]);
        assert_eq!(m.scale(3.0), matrix![[3.0, 6.0], [9.0, 12.0]]);
    }

    #[test]
    fn matrix_product() {
        let a = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let b = matrix![[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]];
        let prod = a % b;
        assert_eq!(prod, matrix![[58.0, 64.0], [139.0, 154.0]]);
    }

    #[test]
    fn matmul_dimension_mismatch() {
        let a = matrix![[1.0, 2.0]];
        let b = matrix![[1.0, 2.0]];
        assert!(matches!(
            a.matmul(&b),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    #[should_panic(expected = "matrix addition")]
    fn add_mismatch_panics() {
        let _ = matrix![[1.0]] + matrix![[1.0, 2.0]];
    }

    #[test]
    fn product_against_identity() {
        let m = matrix![[5.0, 6.0], [7.0, 8.0]];
        let id = Matrix::identity(2).unwrap();
        assert_eq!(m.clone() % id.clone(), m);
        assert_eq!(id % m.clone(), m);
    }
}
