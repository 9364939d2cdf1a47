// Emitter capability surface and the ship's laser battery.

use tracing::debug;

/// Capability handle for one particle emitter owned by the host scene.
pub trait EmitterHandle {
    fn set_emission_enabled(&mut self, enabled: bool);
    fn set_active(&mut self, active: bool);
    fn play(&mut self);
    fn stop(&mut self);
    fn is_playing(&self) -> bool;
}

/// In-process emitter holding the flags the host scene object would carry.
/// Used by the harness; tests bring their own doubles.
#[derive(Debug)]
pub struct ParticleEmitter {
    name: String,
    active: bool,
    emission_enabled: bool,
    playing: bool,
}

impl ParticleEmitter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            active: false,
            emission_enabled: false,
            playing: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn emission_enabled(&self) -> bool {
        self.emission_enabled
    }
}

impl EmitterHandle for ParticleEmitter {
    fn set_emission_enabled(&mut self, enabled: bool) {
        self.emission_enabled = enabled;
    }

    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn play(&mut self) {
        if !self.playing {
            debug!(emitter = %self.name, "emitter play");
        }
        self.playing = true;
    }

    fn stop(&mut self) {
        if self.playing {
            debug!(emitter = %self.name, "emitter stop");
        }
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}

/// The two designated firing positions on the battery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn name(self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

#[derive(Debug)]
pub enum BatteryError {
    SideOutOfRange {
        side: &'static str,
        index: usize,
        len: usize,
    },
}

/// Fixed collection of laser emitters with designated left and right
/// members. The designated indices double as the fire machines' memory via
/// their play state.
pub struct LaserBattery<E: EmitterHandle> {
    emitters: Vec<E>,
    left: usize,
    right: usize,
}

impl<E: EmitterHandle> LaserBattery<E> {
    pub fn new(emitters: Vec<E>, left: usize, right: usize) -> Result<Self, BatteryError> {
        let len = emitters.len();
        if left >= len {
            return Err(BatteryError::SideOutOfRange {
                side: "left",
                index: left,
                len,
            });
        }
        if right >= len {
            return Err(BatteryError::SideOutOfRange {
                side: "right",
                index: right,
                len,
            });
        }
        Ok(Self {
            emitters,
            left,
            right,
        })
    }

    pub fn emitters(&self) -> &[E] {
        &self.emitters
    }

    fn side_index(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn side_playing(&self, side: Side) -> bool {
        self.emitters[self.side_index(side)].is_playing()
    }

    /// Restart one side's emitter (stop, then play).
    pub fn restart_side(&mut self, side: Side) {
        let idx = self.side_index(side);
        let e = &mut self.emitters[idx];
        e.stop();
        e.play();
    }

    pub fn stop_side(&mut self, side: Side) {
        let idx = self.side_index(side);
        self.emitters[idx].stop();
    }

    /// Enable emission and activate every member of the battery.
    pub fn activate_all(&mut self) {
        for e in &mut self.emitters {
            e.set_emission_enabled(true);
            e.set_active(true);
        }
    }

    /// Disable emission and deactivate every member of the battery.
    pub fn deactivate_all(&mut self) {
        for e in &mut self.emitters {
            e.set_emission_enabled(false);
            e.set_active(false);
        }
    }
}
