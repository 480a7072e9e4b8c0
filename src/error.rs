use thiserror::Error;

/// The top-level error type for this crate.
///
/// All failures are raised synchronously at the call site; nothing is
/// retried and no partial result is ever produced alongside an error.
/// Numerically degenerate situations that are well-defined in floating
/// point (division by a zero-magnitude complex number, `ln` of zero inside
/// a complex power) deliberately resolve to `NaN`/`Inf` instead of a
/// variant here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("rows and columns of a matrix must be above 0")]
    EmptyDimensions,

    #[error("vector must contain at least one element")]
    EmptyVector,

    #[error("rows must all be of the same length")]
    RaggedRows,

    #[error("{op} requires vectors of the same length, got {left} and {right}")]
    LengthMismatch {
        op: &'static str,
        left: usize,
        right: usize,
    },

    #[error(
        "{op} requires matrices of compatible dimensions, \
         got {left_rows}x{left_cols} and {right_rows}x{right_cols}"
    )]
    DimensionMismatch {
        op: &'static str,
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("index {index} is not within the bounds of 0..{len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("bad coordinate, ({row}, {col}) is not within the bounds of (0..{rows}, 0..{cols})")]
    CoordOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("matrix must be square to have a {op}")]
    NotSquare { op: &'static str },

    #[error("r3 cross product vectors must both be 3 elements")]
    NotThreeDimensional,

    #[error("matrix determinant is zero, no inverse exists")]
    SingularMatrix,

    #[error("qr decomposition requires at least as many rows as columns, got {rows}x{cols}")]
    QrShape { rows: usize, cols: usize },

    #[error("polynomials below rank 2 have trivial solutions, got rank {rank}")]
    DegeneratePolynomial { rank: usize },

    #[error("unexpected error")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
