use std::f32::consts::{PI, TAU};

use crate::constants::{HEADING_DOWN, HEADING_LEFT, HEADING_RIGHT, HEADING_UP};

/// One of the four discrete hop directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Heading (yaw about +Y, radians) the character turns to after hopping this way.
    pub fn heading(self) -> f32 {
        match self {
            Direction::Up => HEADING_UP,
            Direction::Down => HEADING_DOWN,
            Direction::Left => HEADING_LEFT,
            Direction::Right => HEADING_RIGHT,
        }
    }

    /// Unit planar (X, Z) velocity direction for a hop.
    pub fn planar(self) -> (f32, f32) {
        match self {
            Direction::Up => (-1.0, 0.0),
            Direction::Down => (1.0, 0.0),
            Direction::Left => (0.0, 1.0),
            Direction::Right => (0.0, -1.0),
        }
    }
}

/// Wrap an angle into [-π, π).
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    // rem_euclid can round up to TAU for inputs just below a multiple of it.
    if wrapped >= PI { wrapped - TAU } else { wrapped }
}

/// Advance `current` toward `target` along the shorter arc by `damping` of the difference.
///
/// The difference is wrapped into [-π, π) before scaling, so a single step never covers more
/// than π·damping radians. The returned heading is wrapped as well.
#[inline]
pub fn step_heading(current: f32, target: f32, damping: f32) -> f32 {
    let diff = wrap_angle(target - current);
    wrap_angle(current + diff * damping.clamp(0.0, 1.0))
}
