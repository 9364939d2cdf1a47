// Shared doubles for the controller integration tests.

use ship_controller::{EmitterHandle, InputSample, InputSampler};

/// Sampler that replays a fixed sequence, then holds the last sample.
/// Records lifecycle and poll counts so tests can assert on them.
pub struct SequenceSampler {
    samples: Vec<InputSample>,
    next: usize,
    pub enable_calls: u32,
    pub disable_calls: u32,
    pub sample_calls: u32,
}

impl SequenceSampler {
    pub fn new(samples: Vec<InputSample>) -> Self {
        assert!(!samples.is_empty(), "sequence sampler needs at least one sample");
        Self {
            samples,
            next: 0,
            enable_calls: 0,
            disable_calls: 0,
            sample_calls: 0,
        }
    }

    /// Hold a single sample forever.
    pub fn hold(sample: InputSample) -> Self {
        Self::new(vec![sample])
    }
}

impl InputSampler for SequenceSampler {
    fn enable(&mut self) {
        self.enable_calls += 1;
    }

    fn disable(&mut self) {
        self.disable_calls += 1;
    }

    fn sample(&mut self) -> InputSample {
        self.sample_calls += 1;
        let sample = self.samples[self.next];
        if self.next + 1 < self.samples.len() {
            self.next += 1;
        }
        sample
    }
}

/// Emitter double that records every capability call.
#[derive(Debug, Default)]
pub struct RecordingEmitter {
    pub playing: bool,
    pub active: bool,
    pub emission_enabled: bool,
    pub play_calls: u32,
    pub stop_calls: u32,
    pub set_active_calls: u32,
    pub set_emission_calls: u32,
}

impl EmitterHandle for RecordingEmitter {
    fn set_emission_enabled(&mut self, enabled: bool) {
        self.set_emission_calls += 1;
        self.emission_enabled = enabled;
    }

    fn set_active(&mut self, active: bool) {
        self.set_active_calls += 1;
        self.active = active;
    }

    fn play(&mut self) {
        self.play_calls += 1;
        self.playing = true;
    }

    fn stop(&mut self) {
        self.stop_calls += 1;
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// A four-tube battery with the outer pair as the designated sides,
/// mirroring the harness layout.
pub fn recording_battery() -> ship_controller::LaserBattery<RecordingEmitter> {
    let emitters = (0..4).map(|_| RecordingEmitter::default()).collect();
    ship_controller::LaserBattery::new(emitters, 0, 3).expect("valid battery layout")
}

pub const LEFT: usize = 0;
pub const RIGHT: usize = 3;
