//! Shared helpers for unit tests.

use num::complex::Complex64;

use crate::matrix::Matrix;

/// Checks that `found` and `expected` agree as multisets, pairing each
/// expected root with the closest unclaimed found root within `tol`.
pub(crate) fn check_roots(found: &[Complex64], expected: &[Complex64], tol: f64) -> bool {
    if found.len() != expected.len() {
        return false;
    }
    let mut claimed = vec![false; found.len()];
    for e in expected {
        let hit = found
            .iter()
            .enumerate()
            .filter(|(i, f)| !claimed[*i] && (*f - e).norm() < tol)
            .map(|(i, _)| i)
            .next();
        match hit {
            Some(i) => claimed[i] = true,
            None => return false,
        }
    }
    true
}

/// A matrix of uniform random elements in `[lo, hi)`, from a seeded
/// stream so failures reproduce.
pub(crate) fn random_matrix(
    rng: &mut fastrand::Rng,
    rows: usize,
    cols: usize,
    lo: f64,
    hi: f64,
) -> Matrix<f64> {
    let mut m = Matrix::zeros(rows, cols).unwrap();
    for i in 0..rows {
        for j in 0..cols {
            m.set(i, j, lo + rng.f64() * (hi - lo)).unwrap();
        }
    }
    m
}
