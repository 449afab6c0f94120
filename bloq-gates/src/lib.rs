//! Gate library for bloq
//!
//! This crate turns a gate selector into a validated 2×2 unitary:
//!
//! - [`matrices`]: compile-time constant matrices for the named gates
//! - [`literal`]: strict literal parsing of custom gate text (no evaluation,
//!   only nested numeric arrays)
//! - [`resolve`]: the resolver combining both paths
//!
//! # Example
//!
//! ```
//! use bloq_gates::{resolve, Selector};
//!
//! // Named gates resolve against the constant table
//! let h = resolve(Selector::H, "").unwrap();
//! assert_eq!(h.name(), "H");
//!
//! // Custom gates are parsed and validated for unitarity
//! let x = resolve(Selector::Custom, "[[0,1],[1,0]]").unwrap();
//! assert!(x.unitarity_deviation() < 1e-9);
//! ```

pub mod literal;
pub mod matrices;
pub mod resolver;

// Re-export commonly used items
pub use literal::{parse_literal, Literal};
pub use resolver::{resolve, Selector, UNITARITY_TOLERANCE};
