use crate::state::{InputSample, ShipState};

#[derive(Debug, Clone, Copy)]
pub struct OrientationConfig {
    pub position_pitch_factor: f32,
    pub control_pitch_factor: f32,
    pub control_roll_factor: f32,
}

/// Write this frame's visual attitude into the ship state. Runs after
/// movement so pitch tracks the clamped position.
pub fn tick_orientation(ship: &mut ShipState, input: &InputSample, cfg: OrientationConfig) {
    let (pitch, roll) = ship_attitude(ship.y, input, cfg);
    ship.pitch = pitch;
    ship.roll = roll;
}

/// Stateless attitude model: pitch mixes screen height and stick throw,
/// roll follows horizontal stick throw only. Yaw stays fixed at zero.
pub fn ship_attitude(pos_y: f32, input: &InputSample, cfg: OrientationConfig) -> (f32, f32) {
    let pitch = pos_y * cfg.position_pitch_factor + input.dir_y * cfg.control_pitch_factor;
    let roll = -input.dir_x * cfg.control_roll_factor;
    (pitch, roll)
}
