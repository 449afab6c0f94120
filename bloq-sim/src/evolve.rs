//! Principal matrix logarithm and continuous interpolation
//!
//! A 2×2 unitary (more generally, normal) matrix is diagonalized by its
//! eigensystem, so analytic functions of it reduce to functions of the two
//! eigenvalues. That spectral form is exact for this matrix size; no
//! series approximation is involved.
//!
//! Branch policy: the logarithm is applied per eigenvalue through
//! [`num_complex::Complex64::ln`], whose imaginary part lies in (−π, π].
//! Gates with eigenvalue −1 (X, Y, Z, H) therefore interpolate through the
//! +iπ branch; this is the same convention the usual numerical matrix-log
//! primitives pick.

use bloq_core::{Complex64, Gate, Matrix2};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);

/// Off-diagonal magnitude below which a matrix is treated as diagonal
const DIAGONAL_EPSILON: f64 = 1e-12;

/// Apply an analytic function to a 2×2 normal matrix through its eigensystem
///
/// A diagonal matrix maps entrywise. Otherwise the matrix has distinct
/// eigenvalues (a degenerate normal matrix is a multiple of the identity,
/// which the diagonal path already covers), and f(M) = P·diag(f(λ₁), f(λ₂))·P⁻¹
/// with eigenvectors in the columns of P. Non-normal input is outside the
/// contract; for it the degenerate fallback is a best effort, not a promise.
fn spectral_map<F>(m: &Matrix2, f: F) -> Matrix2
where
    F: Fn(Complex64) -> Complex64,
{
    if m[0][1].norm() < DIAGONAL_EPSILON && m[1][0].norm() < DIAGONAL_EPSILON {
        return [[f(m[0][0]), ZERO], [ZERO, f(m[1][1])]];
    }

    // Eigenvalues from the characteristic polynomial λ² − tr·λ + det = 0
    let tr = m[0][0] + m[1][1];
    let det = m[0][0] * m[1][1] - m[0][1] * m[1][0];
    let disc = (tr * tr - det * 4.0).sqrt();
    let half = Complex64::new(0.5, 0.0);
    let lambda1 = (tr + disc) * half;
    let lambda2 = (tr - disc) * half;

    if disc.norm() < DIAGONAL_EPSILON {
        // Coincident eigenvalues with nonzero off-diagonals: not normal.
        let f_lambda = f(tr * half);
        return [[f_lambda, ZERO], [ZERO, f_lambda]];
    }

    // With m[0][1] ≠ 0, (m01, λ − m00) is an eigenvector for either eigenvalue
    let p = [
        [m[0][1], m[0][1]],
        [lambda1 - m[0][0], lambda2 - m[0][0]],
    ];
    let det_p = p[0][0] * p[1][1] - p[0][1] * p[1][0];
    let p_inv = [
        [p[1][1] / det_p, -p[0][1] / det_p],
        [-p[1][0] / det_p, p[0][0] / det_p],
    ];

    let f1 = f(lambda1);
    let f2 = f(lambda2);

    // P · diag(f1, f2) · P⁻¹
    let mut result = [[ZERO; 2]; 2];
    for i in 0..2 {
        for j in 0..2 {
            result[i][j] = p[i][0] * f1 * p_inv[0][j] + p[i][1] * f2 * p_inv[1][j];
        }
    }
    result
}

/// Principal matrix logarithm of a 2×2 unitary
///
/// For a unitary U with eigenvalues e^(iθₖ), returns the anti-hermitian
/// matrix with eigenvalues iθₖ, θₖ ∈ (−π, π]. exp(principal_log(U)) = U.
pub fn principal_log(m: &Matrix2) -> Matrix2 {
    spectral_map(m, |lambda| lambda.ln())
}

/// Interpolate a gate along its one-parameter subgroup
///
/// Computes U(t) = exp(t·log U) with the principal logarithm, so that
/// U(0) = I and U(1) = U. Deterministic and total for any unitary gate
/// and any real t; t is not clamped to [0, 1] here, that constraint
/// belongs to the input surface.
///
/// # Example
/// ```
/// use bloq_core::QubitState;
/// use bloq_gates::{resolve, Selector};
/// use bloq_sim::evolve;
///
/// let h = resolve(Selector::H, "").unwrap();
/// let at_zero = evolve(&h, 0.0).apply(&QubitState::zero());
/// assert!((at_zero.alpha().re - 1.0).abs() < 1e-9);
/// ```
pub fn evolve(gate: &Gate, t: f64) -> Gate {
    let matrix = spectral_map(gate.matrix(), |lambda| (lambda.ln() * t).exp());
    Gate::from_matrix_unchecked(format!("{}(t={:.3})", gate.name(), t), matrix)
}
