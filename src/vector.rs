//! Fixed-length one-dimensional vectors over any [`Scalar`] element type.

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

use crate::error::{Error, Result};
use crate::scalar::Scalar;

/// A fixed-length ordered sequence of scalar-like elements.
///
/// The length is set at construction, is always at least 1, and never
/// changes afterwards. Storage is exclusively owned; `Clone` produces a
/// fully independent copy. Equality is element-wise and exact, with no
/// tolerance.
///
/// # Examples
/// ```
/// use polymat::vector;
///
/// let a = vector![2.0, 3.0, 4.0];
/// let b = vector![5.0, 6.0, 7.0];
/// assert_eq!(a.dot(&b).unwrap(), 56.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vector<T: Scalar> {
    data: Vec<T>,
}

impl<T: Scalar> Vector<T> {
    /// A vector of `len` zero elements.
    ///
    /// # Errors
    /// [`Error::EmptyVector`] if `len` is 0.
    pub fn zeros(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::EmptyVector);
        }
        Ok(Self {
            data: vec![T::zero(); len],
        })
    }

    /// # Errors
    /// [`Error::EmptyVector`] if the slice is empty.
    pub fn from_slice(data: &[T]) -> Result<Self> {
        Self::from_vec(data.to_vec())
    }

    /// # Errors
    /// [`Error::EmptyVector`] if the vec is empty.
    pub fn from_vec(data: Vec<T>) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::EmptyVector);
        }
        Ok(Self { data })
    }

    /// The number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// The element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] if `index` is not in `0..size()`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.data
            .get(index)
            .cloned()
            .ok_or(Error::IndexOutOfBounds {
                index,
                len: self.size(),
            })
    }

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    /// [`Error::IndexOutOfBounds`] if `index` is not in `0..size()`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.size();
        match self.data.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfBounds { index, len }),
        }
    }

    /// Dot product.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if the operands differ in length.
    pub fn dot(&self, other: &Self) -> Result<T> {
        if self.size() != other.size() {
            return Err(Error::LengthMismatch {
                op: "dot product",
                left: self.size(),
                right: other.size(),
            });
        }
        let mut sum = T::zero();
        for (a, b) in self.iter().zip(other.iter()) {
            sum = sum + a.clone() * b.clone();
        }
        Ok(sum)
    }

    /// Cross product in R3, by the standard determinant expansion.
    ///
    /// # Errors
    /// [`Error::NotThreeDimensional`] unless both operands have exactly 3
    /// elements.
    pub fn cross_r3(&self, other: &Self) -> Result<Self> {
        if self.size() != 3 || other.size() != 3 {
            return Err(Error::NotThreeDimensional);
        }
        let a = self.as_slice();
        let b = other.as_slice();
        Self::from_vec(vec![
            a[1].clone() * b[2].clone() - a[2].clone() * b[1].clone(),
            a[2].clone() * b[0].clone() - a[0].clone() * b[2].clone(),
            a[0].clone() * b[1].clone() - a[1].clone() * b[0].clone(),
        ])
    }

    /// The magnitude `sqrt(a^2 + b^2 + c^2 ...)`, with the square root
    /// dispatched through [`Scalar::sqrt`] so that complex element types
    /// get a complex square root of their (complex) sum of squares.
    #[must_use]
    pub fn magnitude(&self) -> T {
        let mut sum = T::zero();
        for x in self.iter() {
            // elements are squared with the element product, not a norm
            sum = sum + x.clone() * x.clone();
        }
        sum.sqrt()
    }

    /// Cosine of the angle between two vectors.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if the operands differ in length.
    pub fn cosine_ang(&self, other: &Self) -> Result<T> {
        Ok(self.dot(other)? / (self.magnitude() * other.magnitude()))
    }

    /// The scalar component of `self` in the direction of `other`.
    ///
    /// # Errors
    /// [`Error::LengthMismatch`] if the operands differ in length.
    pub fn scalar_in_direction(&self, other: &Self) -> Result<T> {
        Ok(self.dot(other)? / other.magnitude())
    }

    /// Every element divided by the magnitude. Division by zero for the
    /// zero vector propagates as `NaN`/`Inf` elements.
    #[must_use]
    pub fn normalize(&self) -> Self {
        self.clone() / self.magnitude()
    }

    /// Every element multiplied by a real factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            data: self.iter().map(|x| x.clone() * factor).collect(),
        }
    }

    fn check_same_length(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.size() == other.size() {
            Ok(())
        } else {
            Err(Error::LengthMismatch {
                op,
                left: self.size(),
                right: other.size(),
            })
        }
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Vector<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: Scalar> Add for Vector<T> {
    type Output = Self;

    /// # Panics
    /// If the operands differ in length.
    fn add(self, rhs: Self) -> Self {
        self.check_same_length(&rhs, "vector addition")
            .unwrap_or_else(|e| panic!("{e}"));
        Self {
            data: self
                .data
                .into_iter()
                .zip(rhs.data)
                .map(|(a, b)| a + b)
                .collect(),
        }
    }
}

impl<T: Scalar> Sub for Vector<T> {
    type Output = Self;

    /// # Panics
    /// If the operands differ in length.
    fn sub(self, rhs: Self) -> Self {
        self.check_same_length(&rhs, "vector subtraction")
            .unwrap_or_else(|e| panic!("{e}"));
        Self {
            data: self
                .data
                .into_iter()
                .zip(rhs.data)
                .map(|(a, b)| a - b)
                .collect(),
        }
    }
}

/// Dot product, see [`Vector::dot`].
impl<T: Scalar> Mul<Vector<T>> for Vector<T> {
    type Output = T;

    /// # Panics
    /// If the operands differ in length.
    fn mul(self, rhs: Vector<T>) -> T {
        self.dot(&rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl<T: Scalar> Mul<T> for Vector<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        Self {
            data: self.data.into_iter().map(|x| x * rhs.clone()).collect(),
        }
    }
}

impl<T: Scalar> Div<T> for Vector<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self {
        Self {
            data: self.data.into_iter().map(|x| x / rhs.clone()).collect(),
        }
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.iter();
        if let Some(x) = iter.next() {
            write!(f, "{x}")?;
        }
        for x in iter {
            write!(f, ", {x}")?;
        }
        Ok(())
    }
}
