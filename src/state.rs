// Ship sim state and input/snapshot types.

use serde::Serialize;

/// One frame of control input. Recomputed every tick, never retained.
#[derive(Debug, Clone, Copy)]
pub struct InputSample {
    pub dir_x: f32,          // -1.0..=1.0
    pub dir_y: f32,          // -1.0..=1.0
    pub fire_intensity: f32, // 0.0..=1.0
}

impl InputSample {
    pub const IDLE: InputSample = InputSample {
        dir_x: 0.0,
        dir_y: 0.0,
        fire_intensity: 0.0,
    };

    pub fn new(dir_x: f32, dir_y: f32, fire_intensity: f32) -> Self {
        Self {
            dir_x,
            dir_y,
            fire_intensity,
        }
    }

    /// Clamp to the documented ranges so a misbehaving source cannot push
    /// the sim outside its envelope.
    pub fn clamped(self) -> Self {
        Self {
            dir_x: self.dir_x.clamp(-1.0, 1.0),
            dir_y: self.dir_y.clamp(-1.0, 1.0),
            fire_intensity: self.fire_intensity.clamp(0.0, 1.0),
        }
    }
}

/// Mutable ship state. Owned exclusively by the controller and updated once
/// per tick; only velocity carries meaning across frames, the rest are the
/// current frame's outputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShipState {
    pub x: f32,
    pub y: f32,
    // Depth within the scene. Carried through snapshots, never integrated.
    pub z: f32,

    pub vx: f32,
    pub vy: f32,

    // Visual attitude in degrees. Yaw is fixed at zero.
    pub pitch: f32,
    pub roll: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShipSnapshot {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub vx: f32,
    pub vy: f32,
    pub pitch: f32,
    pub roll: f32,
    pub yaw: f32,
}

impl From<&ShipState> for ShipSnapshot {
    fn from(s: &ShipState) -> Self {
        Self {
            x: s.x,
            y: s.y,
            z: s.z,
            vx: s.vx,
            vy: s.vy,
            pitch: s.pitch,
            roll: s.roll,
            yaw: 0.0,
        }
    }
}
