// Player-ship controller: one lifecycle object driven by the host frame loop.

use tracing::debug;

use crate::emitter::{EmitterHandle, LaserBattery};
use crate::input::InputSampler;
use crate::state::{ShipSnapshot, ShipState};
use crate::systems::{firing, movement, orientation};
use crate::tuning::ShipTuning;

/// Owns the ship's state and per-frame update. The caller owns the loop:
/// `start()` once on activation, `tick(dt)` every frame, `stop()` on
/// deactivation.
pub struct ShipController<S: InputSampler, E: EmitterHandle> {
    tuning: ShipTuning,
    state: ShipState,
    sampler: S,
    battery: LaserBattery<E>,
    active: bool,
}

impl<S: InputSampler, E: EmitterHandle> ShipController<S, E> {
    pub fn new(tuning: ShipTuning, sampler: S, battery: LaserBattery<E>) -> Self {
        Self {
            tuning,
            state: ShipState::default(),
            sampler,
            battery,
            active: false,
        }
    }

    /// Activate the controller and acquire the input source.
    pub fn start(&mut self) {
        if self.active {
            return;
        }
        self.sampler.enable();
        self.active = true;
        debug!("ship controller started");
    }

    /// Deactivate the controller and release the input source.
    pub fn stop(&mut self) {
        if !self.active {
            return;
        }
        self.sampler.disable();
        self.active = false;
        debug!("ship controller stopped");
    }

    /// Run one frame: sample input, integrate motion, derive attitude,
    /// advance the fire machines. No-op while inactive.
    pub fn tick(&mut self, dt: f32) {
        if !self.active {
            return;
        }

        let input = self.sampler.sample().clamped();
        movement::tick_movement(&mut self.state, &input, dt, self.tuning.movement());
        orientation::tick_orientation(&mut self.state, &input, self.tuning.orientation());
        firing::tick_firing(&mut self.battery, input.fire_intensity);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn state(&self) -> &ShipState {
        &self.state
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }

    pub fn battery(&self) -> &LaserBattery<E> {
        &self.battery
    }

    pub fn snapshot(&self) -> ShipSnapshot {
        ShipSnapshot::from(&self.state)
    }
}
