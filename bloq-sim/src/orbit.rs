//! Orbit sampling along a gate's one-parameter subgroup

use crate::evolve::evolve;
use bloq_core::{Gate, QubitState};

/// Number of orbit samples used by default
pub const DEFAULT_ORBIT_SAMPLES: usize = 50;

/// Evenly spaced values from `start` to `end`, endpoints included
///
/// `steps == 0` yields an empty vector and `steps == 1` yields `[start]`.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let delta = (end - start) / (steps - 1) as f64;
            (0..steps).map(|k| start + delta * k as f64).collect()
        }
    }
}

/// Orbit of an initial state under U(s) for s in linspace(0, t, steps)
///
/// Returns the ordered sequence evolve(U, s)·|ψ₀⟩. The orbit is recomputed
/// from scratch on every call; nothing is cached and nothing is mutated.
pub fn orbit_from(gate: &Gate, initial: &QubitState, t: f64, steps: usize) -> Vec<QubitState> {
    linspace(0.0, t, steps)
        .into_iter()
        .map(|s| evolve(gate, s).apply(initial))
        .collect()
}

/// Orbit of |0⟩ under U(s), the fixed initial state of the visualizer
pub fn orbit(gate: &Gate, t: f64, steps: usize) -> Vec<QubitState> {
    orbit_from(gate, &QubitState::zero(), t, steps)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bloq_core::BlochVector;
    use bloq_gates::{resolve, Selector};

    #[test]
    fn test_linspace_endpoints() {
        let values = linspace(0.0, 1.0, 50);
        assert_eq!(values.len(), 50);
        assert_relative_eq!(values[0], 0.0, epsilon = 1e-15);
        assert_relative_eq!(values[49], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.25, 1.0, 1), vec![0.25]);
    }

    #[test]
    fn test_orbit_starts_at_initial_state() {
        let x = resolve(Selector::X, "").unwrap();
        let path = orbit(&x, 1.0, 50);
        assert_eq!(path.len(), 50);
        assert_relative_eq!(path[0].alpha().re, 1.0, epsilon = 1e-9);
        assert_relative_eq!(path[0].beta().norm(), 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_ends_at_full_gate_action() {
        // X|0⟩ = |1⟩ at t = 1
        let x = resolve(Selector::X, "").unwrap();
        let path = orbit(&x, 1.0, 50);
        let last = path.last().unwrap();
        assert_relative_eq!(last.alpha().norm(), 0.0, epsilon = 1e-9);
        assert_relative_eq!(last.beta().norm(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_orbit_states_stay_normalized() {
        let h = resolve(Selector::H, "").unwrap();
        for state in orbit(&h, 1.0, 50) {
            assert!(state.is_normalized(1e-9));
        }
    }

    #[test]
    fn test_orbit_stays_on_bloch_sphere() {
        let y = resolve(Selector::Y, "").unwrap();
        for state in orbit(&y, 0.8, 25) {
            let bloch = BlochVector::from_state(&state);
            assert!(bloch.is_pure(1e-9));
        }
    }

    #[test]
    fn test_orbit_at_zero_time_is_constant() {
        let h = resolve(Selector::H, "").unwrap();
        let path = orbit(&h, 0.0, 10);
        assert_eq!(path.len(), 10);
        for state in path {
            assert_relative_eq!(state.alpha().re, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_orbit_from_custom_initial_state() {
        // Z rotates |+⟩ around the equator but leaves |0⟩ fixed
        let z = resolve(Selector::Z, "").unwrap();
        let fixed = orbit(&z, 1.0, 10);
        for state in fixed {
            assert_relative_eq!(state.alpha().norm(), 1.0, epsilon = 1e-9);
        }

        let plus = bloq_core::BlochAngles {
            theta: std::f64::consts::FRAC_PI_2,
            phi: 0.0,
        }
        .to_state();
        let moving = orbit_from(&z, &plus, 1.0, 10);
        let end = BlochVector::from_state(moving.last().unwrap());
        // After the full Z action, |+⟩ has moved to |−⟩
        assert_relative_eq!(end.x, -1.0, epsilon = 1e-9);
    }
}
