//! One visualization frame: resolve → evolve → project → render

use bloq_core::{
    project_orbit, BlochRenderConfig, BlochRenderer, BlochVector, QubitState, Result,
};
use bloq_gates::{resolve, Selector};
use bloq_sim::{evolve, orbit, DEFAULT_ORBIT_SAMPLES};

/// The values the UI surface edits between frames
///
/// Everything a frame depends on lives here explicitly; the render path is
/// a pure function of this struct, recomputed from scratch on every event.
pub struct Session {
    pub selector: Selector,
    pub custom_text: String,
    pub time: f64,
    pub steps: usize,
    pub config: BlochRenderConfig,
}

impl Session {
    pub fn new() -> Self {
        Self {
            selector: Selector::H,
            custom_text: String::new(),
            time: 1.0,
            steps: DEFAULT_ORBIT_SAMPLES,
            config: BlochRenderConfig::default(),
        }
    }

    /// Produce one rendered frame, or the resolution error to show instead
    ///
    /// This is the single fallible step of the cycle: once the gate has
    /// resolved, evolution, projection, and rendering are all total.
    pub fn render_frame(&self) -> Result<String> {
        let gate = resolve(self.selector, &self.custom_text)?;

        let states = orbit(&gate, self.time, self.steps);
        let points = project_orbit(&states);
        let current = BlochVector::from_state(&evolve(&gate, self.time).apply(&QubitState::zero()));

        let mut out = format!(
            "Gate: {}   t = {:.3}   samples = {}\n\n",
            gate.name(),
            self.time,
            self.steps
        );
        out.push_str(&BlochRenderer::with_config(self.config.clone()).render(&current, &points));
        out.push('\n');
        out.push_str(&current.describe());
        Ok(out)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bloq_core::InvalidGateError;

    #[test]
    fn test_default_session_renders() {
        let frame = Session::new().render_frame().unwrap();
        assert!(frame.contains("Gate: H"));
        assert!(frame.contains("Side view"));
    }

    #[test]
    fn test_identity_frame_sits_at_north_pole() {
        let session = Session {
            selector: Selector::I,
            ..Session::new()
        };
        let frame = session.render_frame().unwrap();
        assert!(frame.contains("|0⟩ (north pole)"));
    }

    #[test]
    fn test_custom_gate_error_is_returned_not_rendered() {
        let session = Session {
            selector: Selector::Custom,
            custom_text: "[[1,2],[3,4]]".into(),
            ..Session::new()
        };
        let err = session.render_frame().unwrap_err();
        assert!(matches!(err, InvalidGateError::NotUnitary { .. }));
    }

    #[test]
    fn test_session_survives_a_failed_frame() {
        let mut session = Session {
            selector: Selector::Custom,
            custom_text: "garbage".into(),
            ..Session::new()
        };
        assert!(session.render_frame().is_err());

        // The next event can still produce a frame
        session.selector = Selector::X;
        assert!(session.render_frame().is_ok());
    }
}
