// Input port: the host application supplies one control sample per tick.

use crate::state::InputSample;

/// Port for the controller's input source. `enable`/`disable` bracket the
/// controller's active lifetime so device-backed sources can acquire and
/// release their bindings; stateless sources can leave the defaults.
pub trait InputSampler {
    fn enable(&mut self) {}
    fn disable(&mut self) {}

    /// Poll the current control state. Called exactly once per tick.
    fn sample(&mut self) -> InputSample;
}

/// Deterministic input source for the demo harness: weaves the ship across
/// the play area and fires for the first half of every four second cycle.
pub struct ScriptedSampler {
    elapsed: f32,
    step: f32,
}

impl ScriptedSampler {
    pub fn new(step_secs: f32) -> Self {
        Self {
            elapsed: 0.0,
            step: step_secs,
        }
    }
}

impl InputSampler for ScriptedSampler {
    fn sample(&mut self) -> InputSample {
        let t = self.elapsed;
        self.elapsed += self.step;

        let fire = if t % 4.0 < 2.0 { 1.0 } else { 0.0 };
        InputSample {
            dir_x: (t * 0.6).sin(),
            dir_y: (t * 1.1).cos() * 0.7,
            fire_intensity: fire,
        }
    }
}
