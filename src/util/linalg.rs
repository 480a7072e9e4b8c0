use num::complex::Complex64;
use num::Zero;

/// Full discrete convolution of two coefficient slices. The output has
/// length `a.len() + b.len() - 1`.
pub(crate) fn convolve_1d(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    debug_assert!(!a.is_empty() && !b.is_empty());
    let mut out = vec![Complex64::zero(); a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}
