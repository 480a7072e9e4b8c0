//! Determinant, adjoint, inverse and QR decomposition for [`Matrix`].
//!
//! The determinant is computed by recursive cofactor expansion. The
//! expansion row is the one with the most zero elements, and zero terms
//! are skipped outright; for an otherwise exponential algorithm this is
//! the dominant performance lever, not a nicety.

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// The `(rows-1) x (cols-1)` matrix formed by deleting `row` and
    /// `col`, via a skip-and-shift walk over the original.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the excluded coordinate does not
    /// exist; [`Error::EmptyDimensions`] if the matrix has no interior to
    /// keep (a single row or column).
    pub fn sub_matrix(&self, row: usize, col: usize) -> Result<Self> {
        self.index_of(row, col)?;
        let mut out = Self::zeros(self.rows - 1, self.cols - 1)?;

        let mut out_i = 0;
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            let mut out_j = 0;
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                out.data[out_i * out.cols + out_j] = self.data[i * self.cols + j].clone();
                out_j += 1;
            }
            out_i += 1;
        }

        Ok(out)
    }

    /// The minor at `(i, j)`: the determinant of the sub-matrix excluding
    /// row `i` and column `j`.
    ///
    /// # Errors
    /// Propagates the errors of [`Matrix::sub_matrix`] and
    /// [`Matrix::determinant`].
    pub fn minor(&self, i: usize, j: usize) -> Result<T> {
        self.sub_matrix(i, j)?.determinant()
    }

    /// The cofactor at `(i, j)`: the minor with the checkerboard sign
    /// `(-1)^(i+j)` applied.
    ///
    /// # Errors
    /// Propagates the errors of [`Matrix::minor`].
    pub fn cofactor(&self, i: usize, j: usize) -> Result<T> {
        let minor = self.minor(i, j)?;
        Ok(if (i + j) % 2 == 0 { minor } else { -minor })
    }

    /// The determinant, by recursive cofactor expansion along the row
    /// with the most zeros.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if the matrix is not square.
    ///
    /// # Examples
    /// ```
    /// use polymat::matrix;
    ///
    /// let m = matrix![[5.0, 6.0, 9.0], [2.0, 1.0, 6.0], [1.0, 2.0, 3.0]];
    /// assert_eq!(m.determinant().unwrap(), -18.0);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        if self.rows != self.cols {
            return Err(Error::NotSquare { op: "determinant" });
        }
        Ok(self.det_unchecked())
    }

    /// Recursive core of the determinant; the caller has already
    /// established squareness.
    fn det_unchecked(&self) -> T {
        if self.cols == 1 {
            return self.data[0].clone();
        }
        if self.cols == 2 {
            // closed form, avoids the recursion overhead
            return self.data[0].clone() * self.data[3].clone()
                - self.data[2].clone() * self.data[1].clone();
        }

        let pivot_row = self.zero_richest_row();

        let mut det = T::zero();
        for j in 0..self.cols {
            let element = self.data[pivot_row * self.cols + j].clone();
            if element.is_zero() {
                // zero terms contribute nothing, skip the whole expansion
                continue;
            }
            let minor = self
                .sub_matrix(pivot_row, j)
                .expect("interior coordinates of a square matrix of side >= 3 are valid")
                .det_unchecked();
            let cofactor = if (pivot_row + j) % 2 == 0 {
                minor
            } else {
                -minor
            };
            det = det + element * cofactor;
        }

        det
    }

    /// The row with the greatest count of zero elements, ties broken by
    /// first occurrence. Row 0 if no zeros exist anywhere.
    fn zero_richest_row(&self) -> usize {
        let mut best_count = 0;
        let mut best_row = 0;

        for i in 0..self.rows {
            let count = (0..self.cols)
                .filter(|&j| self.data[i * self.cols + j].is_zero())
                .count();
            if count > best_count {
                best_count = count;
                best_row = i;
            }
        }

        best_row
    }

    /// The adjugate: the cofactor matrix, transposed.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if the matrix is not square.
    pub fn adjoint(&self) -> Result<Self> {
        if self.rows != self.cols {
            return Err(Error::NotSquare { op: "adjoint" });
        }

        let mut out = Self::zeros(self.rows, self.cols)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                let cofactor = self.cofactor(i, j)?;
                out.data[i * self.cols + j] = cofactor;
            }
        }

        Ok(out.transpose())
    }

    /// The inverse, as `adjoint() / determinant()`.
    ///
    /// # Errors
    /// [`Error::NotSquare`] if the matrix is not square;
    /// [`Error::SingularMatrix`] if the determinant is zero, rather than
    /// letting `Inf` elements escape.
    pub fn inverse(&self) -> Result<Self> {
        let det = self.determinant()?;
        if det.is_zero() {
            return Err(Error::SingularMatrix);
        }
        Ok(self.adjoint()? / det)
    }

    /// QR decomposition by modified Gram-Schmidt.
    ///
    /// Returns `(Q, R)` where `Q` is `rows x cols` with orthonormal
    /// columns, `R` is `cols x cols` upper triangular, and `Q % R`
    /// reconstructs the matrix. The projections reuse the crate's own
    /// [`Vector`] dot product, so for complex element types
    /// orthogonality is with respect to the bilinear (unconjugated) form.
    ///
    /// # Errors
    /// [`Error::QrShape`] unless `rows >= cols`.
    pub fn qr_decompose(&self) -> Result<(Self, Self)> {
        if self.rows < self.cols {
            return Err(Error::QrShape {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let mut q_cols: Vec<Vector<T>> = Vec::with_capacity(self.cols);
        let mut r = Self::zeros(self.cols, self.cols)?;

        for j in 0..self.cols {
            let mut v = self.get_col(j)?;
            for (i, q) in q_cols.iter().enumerate() {
                let r_ij = q.dot(&v)?;
                v = v - q.clone() * r_ij.clone();
                r.data[i * self.cols + j] = r_ij;
            }
            let r_jj = v.magnitude();
            r.data[j * self.cols + j] = r_jj.clone();
            q_cols.push(v / r_jj);
        }

        let mut q = Self::zeros(self.rows, self.cols)?;
        for (j, col) in q_cols.iter().enumerate() {
            q.set_col(j, col.as_slice())?;
        }

        Ok((q, r))
    }
}

#[cfg(test)]
mod test {
    use num::complex::Complex64;

    use crate::error::Error;
    use crate::matrix;
    use crate::matrix::Matrix;
    use crate::util::testing::random_matrix;

    fn assert_close(a: &Matrix<f64>, b: &Matrix<f64>, tol: f64) {
        assert_eq!(a.row_count(), b.row_count());
        assert_eq!(a.col_count(), b.col_count());
        for i in 0..a.row_count() {
            for j in 0..a.col_count() {
                let (x, y) = (a.get(i, j).unwrap(), b.get(i, j).unwrap());
                assert!((x - y).abs() < tol, "({i},{j}): {x} != {y}");
            }
        }
    }

    #[test]
    fn determinant_3x3() {
        let m = matrix![[5.0, 6.0, 9.0], [2.0, 1.0, 6.0], [1.0, 2.0, 3.0]];
        assert_eq!(m.determinant().unwrap(), -18.0);
    }

    #[test]
    fn determinant_base_cases() {
        assert_eq!(matrix![[7.0]].determinant().unwrap(), 7.0);
        assert_eq!(matrix![[1.0, 2.0], [3.0, 4.0]].determinant().unwrap(), -2.0);
    }

    #[test]
    fn determinant_requires_square() {
        let m = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(matches!(
            m.determinant(),
            Err(Error::NotSquare { op: "determinant" })
        ));
    }

    #[test]
    fn determinant_expands_along_zero_rich_row() {
        // row 2 has two zeros, so the expansion touches one cofactor only
        let m = matrix![[5.0, 6.0, 9.0], [2.0, 1.0, 6.0], [0.0, 3.0, 0.0]];
        assert_eq!(m.determinant().unwrap(), -3.0 * (5.0 * 6.0 - 2.0 * 9.0));
    }

    #[test]
    fn determinant_complex_elements() {
        let i = Complex64::new(0.0, 1.0);
        let one = Complex64::new(1.0, 0.0);
        // det [[i, 1], [1, i]] = i*i - 1 = -2
        let m = matrix![[i, one], [one, i]];
        assert_eq!(m.determinant().unwrap(), Complex64::new(-2.0, 0.0));
    }

    #[test]
    fn sub_matrix_skip_and_shift() {
        let m = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        assert_eq!(m.sub_matrix(1, 1).unwrap(), matrix![[1.0, 3.0], [7.0, 9.0]]);
        assert!(m.sub_matrix(3, 0).is_err());
        assert!(matrix![[1.0]].sub_matrix(0, 0).is_err());
    }

    #[test]
    fn minor_and_cofactor_signs() {
        let m = matrix![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(m.minor(0, 0).unwrap(), 4.0);
        assert_eq!(m.cofactor(0, 0).unwrap(), 4.0);
        assert_eq!(m.minor(0, 1).unwrap(), 3.0);
        assert_eq!(m.cofactor(0, 1).unwrap(), -3.0);
    }

    #[test]
    fn adjoint_2x2() {
        let m = matrix![[1.0, 2.0], [3.0, 4.0]];
        assert_eq!(m.adjoint().unwrap(), matrix![[4.0, -2.0], [-3.0, 1.0]]);
    }

    #[test]
    fn inverse_times_original_is_identity() {
        let m = matrix![[5.0, 6.0, 9.0], [2.0, 1.0, 6.0], [1.0, 2.0, 3.0]];
        let prod = m.clone() % m.inverse().unwrap();
        assert_close(&prod, &Matrix::identity(3).unwrap(), 1e-12);
    }

    #[test]
    fn singular_matrix_has_no_inverse() {
        let m = matrix![[1.0, 2.0], [2.0, 4.0]];
        assert_eq!(m.determinant().unwrap(), 0.0);
        assert!(matches!(m.inverse(), Err(Error::SingularMatrix)));
    }

    #[test]
    fn inverse_of_random_matrices() {
        let mut rng = fastrand::Rng::with_seed(7);
        let id = Matrix::identity(3).unwrap();
        let mut checked = 0;
        while checked < 10 {
            let m = random_matrix(&mut rng, 3, 3, -5.0, 5.0);
            if m.determinant().unwrap().abs() < 1e-3 {
                continue;
            }
            assert_close(&(m.clone() % m.inverse().unwrap()), &id, 1e-9);
            checked += 1;
        }
    }

    #[test]
    fn qr_reconstructs_and_is_orthonormal() {
        let m = matrix![[12.0, -51.0, 4.0], [6.0, 167.0, -68.0], [-4.0, 24.0, -41.0]];
        let (q, r) = m.qr_decompose().unwrap();

        assert_close(&(q.clone() % r.clone()), &m, 1e-9);

        // Q^T Q = I
        let qtq = q.transpose() % q;
        assert_close(&qtq, &Matrix::identity(3).unwrap(), 1e-9);

        // R upper triangular
        for i in 1..3 {
            for j in 0..i {
                assert!(r.get(i, j).unwrap().abs() < 1e-9);
            }
        }
    }

    #[test]
    fn qr_rejects_wide_matrices() {
        let m = matrix![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        assert!(matches!(
            m.qr_decompose(),
            Err(Error::QrShape { rows: 2, cols: 3 })
        ));
    }
}
