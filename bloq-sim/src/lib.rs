//! Continuous gate interpolation for bloq
//!
//! Implements the one-parameter subgroup U(t) = exp(t·log U) for 2×2
//! unitaries, and samples orbits of an initial state under it:
//!
//! - [`evolve`]: interpolate between the identity (t = 0) and U (t = 1)
//! - [`principal_log`]: the principal matrix logarithm used underneath
//! - [`orbit`] / [`orbit_from`]: ordered state sequences for drawing paths
//!
//! # Example
//!
//! ```
//! use bloq_gates::{resolve, Selector};
//! use bloq_sim::{evolve, orbit, DEFAULT_ORBIT_SAMPLES};
//!
//! let x = resolve(Selector::X, "").unwrap();
//!
//! // Halfway to X: the √X gate
//! let half = evolve(&x, 0.5);
//! assert!(half.unitarity_deviation() < 1e-9);
//!
//! let path = orbit(&x, 1.0, DEFAULT_ORBIT_SAMPLES);
//! assert_eq!(path.len(), DEFAULT_ORBIT_SAMPLES);
//! ```

pub mod evolve;
pub mod orbit;

pub use evolve::{evolve, principal_log};
pub use orbit::{linspace, orbit, orbit_from, DEFAULT_ORBIT_SAMPLES};
