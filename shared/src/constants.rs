use std::f32::consts::{FRAC_PI_2, PI};

/// Downward acceleration applied while airborne, in world units per second squared.
pub const GRAVITY: f32 = 30.0;

/// Radius of the character capsule.
///
/// The lower capsule endpoint sits exactly one radius above the character's feet, so the
/// bottom of the swept sphere touches the ground when the character stands on it.
pub const CAPSULE_RADIUS: f32 = 0.35;

/// Height of the upper capsule endpoint above the character's feet.
pub const CAPSULE_HEIGHT: f32 = 1.0;

/// Vertical velocity given to the character by every directional hop.
pub const JUMP_HEIGHT: f32 = 10.0;

/// Planar velocity added by a directional hop.
pub const MOVE_SPEED: f32 = 10.0;

/// Simulation step in seconds.
///
/// Velocity and gravity are integrated with this constant step every fixed tick.
pub const SIMULATION_STEP: f32 = 0.035;

/// Fraction of the remaining (wrapped) heading difference closed per tick.
pub const ROTATION_DAMPING: f32 = 0.1;

/// Characters whose feet drop below this height are put back on their spawn point.
pub const FALL_THRESHOLD: f32 = -35.0;

/// Heading faced after moving "up" (-X).
pub const HEADING_UP: f32 = 0.0;
/// Heading faced after moving "down" (+X).
pub const HEADING_DOWN: f32 = PI;
/// Heading faced after moving "left" (+Z).
pub const HEADING_LEFT: f32 = -FRAC_PI_2;
/// Heading faced after moving "right" (-Z).
pub const HEADING_RIGHT: f32 = FRAC_PI_2;

/// Camera offset from the followed character (X/Z follow, Y is absolute).
pub const CAMERA_OFFSET: [f32; 3] = [30.0, 30.0, 30.0];

/// Half of the orthographic view height, in world units.
pub const CAMERA_VIEW_SIZE: f32 = 25.0;
