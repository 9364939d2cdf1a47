use tracing::debug;

use crate::emitter::{EmitterHandle, LaserBattery, Side};

/// Fire intensity above this level counts as a pulled trigger. No
/// hysteresis: input oscillating around the threshold restarts the emitters
/// on every upward crossing, which is the shipped behavior.
pub const FIRE_THRESHOLD: f32 = 0.5;

/// Advance both per-side fire machines for this frame.
///
/// Each side keys its transition on its own emitter's play state, but every
/// transition toggles the whole battery, so a frame where both sides
/// transition applies the group toggle twice. The toggle is idempotent and
/// the duplication is kept as shipped.
pub fn tick_firing<E: EmitterHandle>(battery: &mut LaserBattery<E>, fire_intensity: f32) {
    let trigger = fire_intensity > FIRE_THRESHOLD;

    for side in [Side::Right, Side::Left] {
        if trigger {
            if !battery.side_playing(side) {
                battery.activate_all();
                battery.restart_side(side);
                debug!(side = side.name(), "laser firing");
            }
        } else if battery.side_playing(side) {
            battery.deactivate_all();
            battery.stop_side(side);
            debug!(side = side.name(), "laser idle");
        }
    }
}
