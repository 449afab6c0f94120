//! Integration tests for the Bloch projection public API

use approx::assert_relative_eq;
use bloq_core::{project_orbit, BlochVector, Complex64, QubitState};

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

#[test]
fn cardinal_states_project_to_cardinal_points() {
    let cases = [
        (QubitState::zero(), (0.0, 0.0, 1.0)),
        (QubitState::one(), (0.0, 0.0, -1.0)),
        (
            QubitState::new(
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(INV_SQRT2, 0.0),
            ),
            (1.0, 0.0, 0.0),
        ),
        (
            QubitState::new(
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(-INV_SQRT2, 0.0),
            ),
            (-1.0, 0.0, 0.0),
        ),
        (
            QubitState::new(
                Complex64::new(INV_SQRT2, 0.0),
                Complex64::new(0.0, INV_SQRT2),
            ),
            (0.0, 1.0, 0.0),
        ),
    ];

    for (state, (x, y, z)) in cases {
        let bloch = BlochVector::from_state(&state);
        assert_relative_eq!(bloch.x, x, epsilon = 1e-9);
        assert_relative_eq!(bloch.y, y, epsilon = 1e-9);
        assert_relative_eq!(bloch.z, z, epsilon = 1e-9);
    }
}

#[test]
fn normalized_states_land_on_the_unit_sphere() {
    // Sweep a family of normalized states with nontrivial phases
    for k in 0..20 {
        let theta = std::f64::consts::PI * (k as f64) / 19.0;
        let phi = 0.7 * (k as f64);
        let state = QubitState::new(
            Complex64::new((theta / 2.0).cos(), 0.0),
            Complex64::from_polar((theta / 2.0).sin(), phi),
        );
        assert!(state.is_normalized(1e-12));

        let bloch = BlochVector::from_state(&state);
        let r2 = bloch.x * bloch.x + bloch.y * bloch.y + bloch.z * bloch.z;
        assert_relative_eq!(r2, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn orbit_projection_is_elementwise() {
    let states: Vec<QubitState> = (0..10)
        .map(|k| {
            let theta = std::f64::consts::PI * (k as f64) / 9.0;
            QubitState::new(
                Complex64::new((theta / 2.0).cos(), 0.0),
                Complex64::new((theta / 2.0).sin(), 0.0),
            )
        })
        .collect();

    let points = project_orbit(&states);
    assert_eq!(points.len(), states.len());
    for (i, state) in states.iter().enumerate() {
        let expected = BlochVector::from_state(state);
        assert_relative_eq!(points[i].x, expected.x, epsilon = 1e-15);
        assert_relative_eq!(points[i].z, expected.z, epsilon = 1e-15);
    }
}
