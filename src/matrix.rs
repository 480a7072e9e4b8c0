//! Two-dimensional row-major matrices over any [`Scalar`] element type.

use std::fmt;

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::scalar::Scalar;
use crate::vector::Vector;

mod impl_num;
mod linalg;

/// An ordered `rows x cols` grid of scalar-like elements, stored row-major
/// in one contiguous buffer.
///
/// Both dimensions are at least 1 and fixed at construction. Storage is
/// exclusively owned; `Clone` is a deep copy and instances never alias.
/// Equality requires identical dimensions and exact element-wise equality.
///
/// # Examples
/// ```
/// use polymat::matrix;
///
/// let m = matrix![[1.0, 2.0], [3.0, 4.0]];
/// assert_eq!(m.determinant().unwrap(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Scalar> Matrix<T> {
    /// A `rows x cols` matrix of zero elements.
    ///
    /// # Errors
    /// [`Error::EmptyDimensions`] if either dimension is 0.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyDimensions);
        }
        Ok(Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        })
    }

    /// Build a matrix from a rectangular list of rows.
    ///
    /// # Errors
    /// [`Error::EmptyDimensions`] if there are no rows or the rows are
    /// empty; [`Error::RaggedRows`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyDimensions);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(Error::EmptyDimensions);
        }
        if rows.iter().any(|row| row.len() != cols) {
            return Err(Error::RaggedRows);
        }
        let row_count = rows.len();
        Ok(Self {
            data: rows.into_iter().flatten().collect_vec(),
            rows: row_count,
            cols,
        })
    }

    /// The identity matrix of side length `len`, built from the element
    /// type's `0` and `1` literals.
    ///
    /// # Errors
    /// [`Error::EmptyDimensions`] if `len` is 0.
    pub fn identity(len: usize) -> Result<Self> {
        let mut id = Self::zeros(len, len)?;
        for i in 0..len {
            id.data[i * len + i] = T::one();
        }
        Ok(id)
    }

    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Translate a coordinate to its index in the backing buffer.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] naming the offending coordinate and the
    /// valid range.
    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(Error::CoordOutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(row * self.cols + col)
    }

    /// The element at `(row, col)`.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the coordinate is outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        Ok(self.data[self.index_of(row, col)?].clone())
    }

    /// Overwrite the element at `(row, col)`.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the coordinate is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let idx = self.index_of(row, col)?;
        self.data[idx] = value;
        Ok(())
    }

    /// The requested row, left to right, as an owned [`Vector`].
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the row does not exist.
    pub fn get_row(&self, row: usize) -> Result<Vector<T>> {
        let start = self.index_of(row, 0)?;
        Vector::from_slice(&self.data[start..start + self.cols])
    }

    /// The requested column, top to bottom, as an owned [`Vector`].
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the column does not exist.
    pub fn get_col(&self, col: usize) -> Result<Vector<T>> {
        self.index_of(0, col)?;
        Vector::from_vec(
            (0..self.rows)
                .map(|row| self.data[row * self.cols + col].clone())
                .collect_vec(),
        )
    }

    /// Overwrite an entire row.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the row does not exist;
    /// [`Error::LengthMismatch`] unless `data` has exactly `col_count()`
    /// elements.
    pub fn set_row(&mut self, row: usize, data: &[T]) -> Result<()> {
        if data.len() != self.cols {
            return Err(Error::LengthMismatch {
                op: "row write",
                left: self.cols,
                right: data.len(),
            });
        }
        let start = self.index_of(row, 0)?;
        self.data[start..start + self.cols].clone_from_slice(data);
        Ok(())
    }

    /// Overwrite an entire column.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the column does not exist;
    /// [`Error::LengthMismatch`] unless `data` has exactly `row_count()`
    /// elements.
    pub fn set_col(&mut self, col: usize, data: &[T]) -> Result<()> {
        if data.len() != self.rows {
            return Err(Error::LengthMismatch {
                op: "column write",
                left: self.rows,
                right: data.len(),
            });
        }
        self.index_of(0, col)?;
        for (row, value) in data.iter().enumerate() {
            self.data[row * self.cols + col] = value.clone();
        }
        Ok(())
    }

    /// The requested row as a `1 x cols` matrix.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the row does not exist.
    pub fn get_row_matrix(&self, row: usize) -> Result<Self> {
        let data = self.get_row(row)?;
        let mut out = Self::zeros(1, self.cols)?;
        out.set_row(0, data.as_slice())?;
        Ok(out)
    }

    /// The requested column as a `rows x 1` matrix.
    ///
    /// # Errors
    /// [`Error::CoordOutOfBounds`] if the column does not exist.
    pub fn get_col_matrix(&self, col: usize) -> Result<Self> {
        let data = self.get_col(col)?;
        let mut out = Self::zeros(self.rows, 1)?;
        out.set_col(0, data.as_slice())?;
        Ok(out)
    }

    /// A new `cols x rows` matrix with `out[j][i] = in[i][j]`.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut out = Self::zeros(self.cols, self.rows)
            .expect("transposing a valid matrix cannot produce empty dimensions");
        for i in 0..self.rows {
            for j in 0..self.cols {
                out.data[j * self.rows + i] = self.data[i * self.cols + j].clone();
            }
        }
        out
    }

    /// Every element multiplied by a real factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x.clone() * factor).collect_vec(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Every element replaced by its reciprocal. Zero elements propagate
    /// as `Inf`/`NaN`.
    #[must_use]
    pub fn reciprocal(&self) -> Self {
        Self {
            data: self
                .data
                .iter()
                .map(|x| T::one() / x.clone())
                .collect_vec(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Every element divided by the square root of the sum of squared
    /// elements, with the square root dispatched through [`Scalar::sqrt`]
    /// (complex element types need a complex square root here).
    #[must_use]
    pub fn normalize(&self) -> Self {
        let mut sum = T::zero();
        for x in &self.data {
            sum = sum + x.clone() * x.clone();
        }
        self.clone() / sum.sqrt()
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            for j in 0..self.cols {
                write!(f, "{}", self.data[i * self.cols + j])?;
                if j + 1 != self.cols {
                    write!(f, ", ")?;
                }
            }
            if i + 1 != self.rows {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
