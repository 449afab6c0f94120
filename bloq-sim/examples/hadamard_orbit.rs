//! Print the Bloch-sphere orbit of |0⟩ under the Hadamard subgroup
//!
//! Run with: cargo run -p bloq-sim --example hadamard_orbit

use bloq_core::project_orbit;
use bloq_gates::{resolve, Selector};
use bloq_sim::{linspace, orbit};

fn main() {
    let gate = resolve(Selector::H, "").expect("table gates always resolve");
    let steps = 20;

    let states = orbit(&gate, 1.0, steps);
    let points = project_orbit(&states);

    println!("t        x        y        z");
    for (t, point) in linspace(0.0, 1.0, steps).into_iter().zip(&points) {
        println!("{:.3}  {:+.4}  {:+.4}  {:+.4}", t, point.x, point.y, point.z);
    }
}
