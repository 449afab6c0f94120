//! Core types for the bloq single-qubit visualizer
//!
//! This crate provides the fundamental types shared by the rest of the
//! workspace:
//! - [`Gate`]: a named, validated 2×2 unitary matrix
//! - [`QubitState`]: a two-amplitude pure state [α, β]
//! - [`BlochVector`]: the Bloch-sphere projection of a state
//! - [`BlochRenderer`]: terminal rendering of the sphere and an orbit
//!
//! # Example
//! ```
//! use bloq_core::{BlochVector, QubitState};
//!
//! // |0⟩ sits at the north pole of the Bloch sphere
//! let bloch = BlochVector::from_state(&QubitState::zero());
//! assert!((bloch.z - 1.0).abs() < 1e-10);
//! ```

pub mod bloch;
pub mod error;
pub mod gate;
pub mod matrix;
pub mod render;
pub mod state;

// Re-exports for convenience
pub use bloch::{project_orbit, BlochAngles, BlochVector};
pub use error::InvalidGateError;
pub use gate::Gate;
pub use matrix::Matrix2;
pub use num_complex::Complex64;
pub use render::{BlochRenderConfig, BlochRenderer};
pub use state::QubitState;

/// Type alias for results in bloq
pub type Result<T> = std::result::Result<T, InvalidGateError>;
