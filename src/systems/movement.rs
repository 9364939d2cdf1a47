use crate::state::{InputSample, ShipState};

#[derive(Debug, Clone, Copy)]
pub struct MovementConfig {
    pub acceleration: f32, // units/s^2 toward the stick target
    pub deceleration: f32, // units/s^2 toward zero on an idle axis
    pub max_speed: f32,    // per-axis speed cap, units/s

    pub x_range: f32, // |x| bound
    pub y_range: f32, // |y| bound
}

/// Advance velocity and position by one frame.
///
/// Each axis ramps linearly toward `input * max_speed`, never overshooting
/// within a step. An axis with exactly zero input additionally ramps toward
/// zero at the deceleration rate, after the target-seeking step, so idle
/// decay stacks on top of it within the same frame. The new velocity is then
/// integrated and position clamped to the play area.
pub fn tick_movement(ship: &mut ShipState, input: &InputSample, dt: f32, cfg: MovementConfig) {
    ship.vx = move_toward(ship.vx, input.dir_x * cfg.max_speed, cfg.acceleration * dt);
    ship.vy = move_toward(ship.vy, input.dir_y * cfg.max_speed, cfg.acceleration * dt);

    if input.dir_x == 0.0 {
        ship.vx = move_toward(ship.vx, 0.0, cfg.deceleration * dt);
    }
    if input.dir_y == 0.0 {
        ship.vy = move_toward(ship.vy, 0.0, cfg.deceleration * dt);
    }

    ship.x = (ship.x + ship.vx * dt).clamp(-cfg.x_range, cfg.x_range);
    ship.y = (ship.y + ship.vy * dt).clamp(-cfg.y_range, cfg.y_range);
}

/// Linear ramp toward `target`, moving at most `max_delta` and snapping to
/// the target once within reach. A zero `max_delta` (paused frame) moves
/// nothing unless already at the target.
pub fn move_toward(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + max_delta.copysign(delta)
    }
}
