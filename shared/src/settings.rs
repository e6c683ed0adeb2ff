/*!
Character controller tunables.

`ControllerSettings::default()` reproduces the values in [`crate::constants`]. Levels with
different proportions can override individual fields at startup; the controller never reads
the constants directly.

Notes
- Distances are in world units, time in seconds.
- `capsule_radius` doubles as the offset between the character's feet and the lower capsule
  endpoint, `capsule_height` is the offset of the upper endpoint.
*/

use crate::constants::{
    CAPSULE_HEIGHT, CAPSULE_RADIUS, FALL_THRESHOLD, GRAVITY, JUMP_HEIGHT, MOVE_SPEED,
    ROTATION_DAMPING, SIMULATION_STEP,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerSettings {
    pub gravity: f32,
    pub capsule_radius: f32,
    pub capsule_height: f32,
    pub jump_height: f32,
    pub move_speed: f32,
    /// Integration step applied on every tick (seconds).
    pub step: f32,
    /// Heading smoothing factor in (0, 1].
    pub rotation_damping: f32,
    /// Feet height below which the character is respawned.
    pub fall_threshold: f32,
}

impl Default for ControllerSettings {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            capsule_radius: CAPSULE_RADIUS,
            capsule_height: CAPSULE_HEIGHT,
            jump_height: JUMP_HEIGHT,
            move_speed: MOVE_SPEED,
            step: SIMULATION_STEP,
            rotation_damping: ROTATION_DAMPING,
            fall_threshold: FALL_THRESHOLD,
        }
    }
}
