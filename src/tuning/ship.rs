use crate::systems::movement::MovementConfig;
use crate::systems::orientation::OrientationConfig;

/// Designer tuning for the player ship.
///
/// Keep this separate from runtime/harness configuration (tick rates, sim
/// duration, etc.).
#[derive(Debug, Clone, Copy)]
pub struct ShipTuning {
    /// Legacy speed knob from an earlier movement model. Not read by any
    /// system; kept because the shipped tuning sheet still carries it.
    pub move_speed: f32,

    /// How fast velocity ramps toward the stick target, units/s^2.
    pub acceleration: f32,

    /// Extra ramp toward zero on an idle axis, units/s^2.
    pub deceleration: f32,

    /// Per-axis speed cap, units/s.
    pub max_speed: f32,

    /// Horizontal half-extent of the play area.
    pub x_range: f32,

    /// Vertical half-extent of the play area.
    pub y_range: f32,

    /// Pitch degrees per unit of vertical stick throw.
    pub control_pitch_factor: f32,

    /// Pitch degrees per unit of screen height.
    pub position_pitch_factor: f32,

    /// Roll degrees per unit of horizontal stick throw.
    pub control_roll_factor: f32,
}

impl Default for ShipTuning {
    fn default() -> Self {
        Self {
            move_speed: 10.0,
            acceleration: 5.0,
            deceleration: 5.0,
            max_speed: 15.0,
            x_range: 5.0,
            y_range: 3.5,
            control_pitch_factor: -10.0,
            position_pitch_factor: -2.0,
            control_roll_factor: 30.0,
        }
    }
}

impl ShipTuning {
    pub fn movement(&self) -> MovementConfig {
        MovementConfig {
            acceleration: self.acceleration,
            deceleration: self.deceleration,
            max_speed: self.max_speed,
            x_range: self.x_range,
            y_range: self.y_range,
        }
    }

    pub fn orientation(&self) -> OrientationConfig {
        OrientationConfig {
            position_pitch_factor: self.position_pitch_factor,
            control_pitch_factor: self.control_pitch_factor,
            control_roll_factor: self.control_roll_factor,
        }
    }
}
