//! Bloch sphere projection for single-qubit states
//!
//! Any pure single-qubit state can be written as
//!
//! |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
//!
//! where θ ∈ [0, π] and φ ∈ [0, 2π) define a point on the unit sphere. This
//! module maps states to Cartesian points on that sphere and back through
//! spherical coordinates.
//!
//! # Example
//!
//! ```
//! use bloq_core::{BlochVector, Complex64, QubitState};
//!
//! // |+⟩ points along +x
//! let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
//! let plus = QubitState::new(
//!     Complex64::new(inv_sqrt2, 0.0),
//!     Complex64::new(inv_sqrt2, 0.0),
//! );
//! let bloch = BlochVector::from_state(&plus);
//! assert!((bloch.x - 1.0).abs() < 1e-10);
//! ```

use crate::state::QubitState;
use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

/// A point on the Bloch sphere in Cartesian coordinates
#[derive(Clone, Copy, Debug)]
pub struct BlochVector {
    /// X coordinate (-1 to 1), +X is |+⟩
    pub x: f64,
    /// Y coordinate (-1 to 1), +Y is |+i⟩
    pub y: f64,
    /// Z coordinate (-1 to 1), +Z is |0⟩ and -Z is |1⟩
    pub z: f64,
}

/// Bloch sphere angles (spherical coordinates)
#[derive(Clone, Copy, Debug)]
pub struct BlochAngles {
    /// Polar angle θ ∈ [0, π]
    pub theta: f64,
    /// Azimuthal angle φ ∈ [0, 2π)
    pub phi: f64,
}

impl BlochVector {
    /// Create a Bloch vector from Cartesian coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Project a single-qubit state onto the Bloch sphere
    ///
    /// The components are the Pauli expectation values
    ///
    /// x = ⟨σ_x⟩ = 2·Re(α*·β),
    /// y = ⟨σ_y⟩ = 2·Im(α*·β),
    /// z = ⟨σ_z⟩ = |α|² − |β|².
    ///
    /// For a normalized state the result lies on the unit sphere. No
    /// normalization is performed here; an unnormalized input simply maps
    /// off the sphere. Total on any complex pair.
    pub fn from_state(state: &QubitState) -> Self {
        let alpha_conj_beta = state.alpha().conj() * state.beta();

        Self {
            x: 2.0 * alpha_conj_beta.re,
            y: 2.0 * alpha_conj_beta.im,
            z: state.alpha().norm_sqr() - state.beta().norm_sqr(),
        }
    }

    /// Convert to spherical coordinates
    pub fn to_angles(&self) -> BlochAngles {
        let r = self.magnitude();

        if r < 1e-10 {
            return BlochAngles {
                theta: 0.0,
                phi: 0.0,
            };
        }

        let theta = (self.z / r).acos();
        let phi = self.y.atan2(self.x);
        let phi = if phi < 0.0 { phi + 2.0 * PI } else { phi };

        BlochAngles { theta, phi }
    }

    /// Magnitude of the Bloch vector; 1.0 for pure states
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Check if this represents a pure state (magnitude ≈ 1.0)
    pub fn is_pure(&self, tolerance: f64) -> bool {
        (self.magnitude() - 1.0).abs() < tolerance
    }

    /// Human-readable description, naming the six cardinal states
    pub fn describe(&self) -> String {
        let angles = self.to_angles();
        let mut desc = format!(
            "Bloch vector: ({:.4}, {:.4}, {:.4})\nAngles: θ={:.4}, φ={:.4}\n",
            self.x, self.y, self.z, angles.theta, angles.phi
        );

        if (self.z - 1.0).abs() < 0.01 {
            desc.push_str("State: |0⟩ (north pole)\n");
        } else if (self.z + 1.0).abs() < 0.01 {
            desc.push_str("State: |1⟩ (south pole)\n");
        } else if (self.x - 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |+⟩\n");
        } else if (self.x + 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |−⟩\n");
        } else if (self.y - 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |+i⟩\n");
        } else if (self.y + 1.0).abs() < 0.01 && self.z.abs() < 0.01 {
            desc.push_str("State: |−i⟩\n");
        }

        desc
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BlochVector({:.4}, {:.4}, {:.4})", self.x, self.y, self.z)
    }
}

impl BlochAngles {
    /// Convert spherical coordinates to a Bloch vector
    pub fn to_vector(&self) -> BlochVector {
        BlochVector {
            x: self.theta.sin() * self.phi.cos(),
            y: self.theta.sin() * self.phi.sin(),
            z: self.theta.cos(),
        }
    }

    /// Convert to state amplitudes |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)sin(θ/2)|1⟩
    pub fn to_state(&self) -> QubitState {
        let half = self.theta / 2.0;
        QubitState::new(
            Complex64::new(half.cos(), 0.0),
            Complex64::new(half.sin() * self.phi.cos(), half.sin() * self.phi.sin()),
        )
    }
}

/// Project an ordered sequence of states onto the Bloch sphere
///
/// Order-preserving, one output point per input state, no filtering.
pub fn project_orbit(states: &[QubitState]) -> Vec<BlochVector> {
    states.iter().map(BlochVector::from_state).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn plus_state() -> QubitState {
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        QubitState::new(
            Complex64::new(inv_sqrt2, 0.0),
            Complex64::new(inv_sqrt2, 0.0),
        )
    }

    #[test]
    fn test_zero_state_north_pole() {
        let bloch = BlochVector::from_state(&QubitState::zero());
        assert_relative_eq!(bloch.x, 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.z, 1.0, epsilon = 1e-10);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_one_state_south_pole() {
        let bloch = BlochVector::from_state(&QubitState::one());
        assert_relative_eq!(bloch.z, -1.0, epsilon = 1e-10);
        assert!(bloch.is_pure(1e-10));
    }

    #[test]
    fn test_plus_state_along_x() {
        let bloch = BlochVector::from_state(&plus_state());
        assert_relative_eq!(bloch.x, 1.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.y, 0.0, epsilon = 1e-10);
        assert_relative_eq!(bloch.z, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_plus_i_state_along_y() {
        let inv_sqrt2 = 1.0 / 2.0_f64.sqrt();
        let state = QubitState::new(
            Complex64::new(inv_sqrt2, 0.0),
            Complex64::new(0.0, inv_sqrt2),
        );
        let bloch = BlochVector::from_state(&state);
        assert_relative_eq!(bloch.y, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_projection_stays_on_unit_sphere() {
        // Arbitrary normalized state: magnitude must be 1 within 1e-9
        let state = QubitState::new(Complex64::new(0.6, 0.0), Complex64::new(0.0, 0.8));
        let bloch = BlochVector::from_state(&state);
        assert_relative_eq!(bloch.magnitude(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_angles_roundtrip() {
        let angles = BlochAngles {
            theta: PI / 3.0,
            phi: PI / 4.0,
        };
        let vector = angles.to_vector();
        let back = vector.to_angles();
        assert_relative_eq!(back.theta, angles.theta, epsilon = 1e-10);
        assert_relative_eq!(back.phi, angles.phi, epsilon = 1e-10);
    }

    #[test]
    fn test_angles_to_state_projects_back() {
        let angles = BlochAngles {
            theta: PI / 2.0,
            phi: 0.0,
        };
        let bloch = BlochVector::from_state(&angles.to_state());
        assert_relative_eq!(bloch.x, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_project_orbit_preserves_length_and_order() {
        let states = vec![QubitState::zero(), plus_state(), QubitState::one()];
        let points = project_orbit(&states);
        assert_eq!(points.len(), states.len());
        for (point, state) in points.iter().zip(&states) {
            let direct = BlochVector::from_state(state);
            assert_relative_eq!(point.x, direct.x, epsilon = 1e-15);
            assert_relative_eq!(point.y, direct.y, epsilon = 1e-15);
            assert_relative_eq!(point.z, direct.z, epsilon = 1e-15);
        }
    }

    #[test]
    fn test_describe_names_poles() {
        let north = BlochVector::from_state(&QubitState::zero());
        assert!(north.describe().contains("|0⟩"));
        let plus = BlochVector::from_state(&plus_state());
        assert!(plus.describe().contains("|+⟩"));
    }
}
