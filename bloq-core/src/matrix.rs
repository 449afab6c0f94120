//! 2×2 complex matrix helpers
//!
//! Every gate in this workspace is a single-qubit operation, so matrices are
//! fixed-size row-major arrays rather than dynamically sized buffers. The
//! helpers here cover the small amount of linear algebra the rest of the
//! workspace needs: products, adjoints, and the unitarity/hermiticity checks
//! used when validating user-supplied gates.

use num_complex::Complex64;

/// 2×2 complex matrix (single-qubit gate), row-major
pub type Matrix2 = [[Complex64; 2]; 2];

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// Multiply two 2×2 matrices
pub fn matrix_multiply(a: &Matrix2, b: &Matrix2) -> Matrix2 {
    let mut result = [[ZERO; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            for k in 0..2 {
                result[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    result
}

/// Conjugate transpose (adjoint) of a 2×2 matrix
pub fn matrix_adjoint(m: &Matrix2) -> Matrix2 {
    [
        [m[0][0].conj(), m[1][0].conj()],
        [m[0][1].conj(), m[1][1].conj()],
    ]
}

/// Determinant of a 2×2 matrix
pub fn determinant(m: &Matrix2) -> Complex64 {
    m[0][0] * m[1][1] - m[0][1] * m[1][0]
}

/// Trace of a 2×2 matrix
pub fn trace(m: &Matrix2) -> Complex64 {
    m[0][0] + m[1][1]
}

/// Max-norm deviation of U†U from the identity
///
/// Returns max_ij |(U†U − I)_ij|. Zero for an exactly unitary matrix.
pub fn unitarity_deviation(m: &Matrix2) -> f64 {
    let product = matrix_multiply(&matrix_adjoint(m), m);
    let mut max_deviation = 0.0f64;
    for i in 0..2 {
        for j in 0..2 {
            let expected = if i == j { ONE } else { ZERO };
            max_deviation = max_deviation.max((product[i][j] - expected).norm());
        }
    }
    max_deviation
}

/// Check whether a matrix is unitary within the given tolerance
pub fn is_unitary(m: &Matrix2, tolerance: f64) -> bool {
    unitarity_deviation(m) <= tolerance
}

/// Check whether a matrix is hermitian (A = A†) within the given tolerance
pub fn is_hermitian(m: &Matrix2, tolerance: f64) -> bool {
    let adjoint = matrix_adjoint(m);
    for i in 0..2 {
        for j in 0..2 {
            if (m[i][j] - adjoint[i][j]).norm() > tolerance {
                return false;
            }
        }
    }
    true
}

/// Check that every entry is finite (no NaN, no infinities)
pub fn has_finite_entries(m: &Matrix2) -> bool {
    m.iter()
        .flatten()
        .all(|v| v.re.is_finite() && v.im.is_finite())
}
