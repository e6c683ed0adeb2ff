//! Hop-based character controller.
//!
//! All per-character simulation state lives in [`PlayerController`]; callers pass it by
//! reference into input handling and the fixed tick. The controller owns its capsule and keeps
//! it in lockstep with the character's feet position.
//!
//! Tick order
//! 1. Fall check: below the fall threshold the character is respawned and the tick ends.
//! 2. Gravity, unless the previous tick ended on the floor.
//! 3. Translate the capsule by `velocity * step`.
//! 4. One penetration query against the static world; push out along the contact normal.
//!    A floor contact ends the hop and cancels planar velocity.
//! 5. Feet position and smoothed heading are derived from the resolved capsule.

use log::{debug, warn};

use crate::{
    collision::{CapsuleCollider, StaticCollisionWorld, Vec3},
    heading::{Direction, step_heading, wrap_angle},
    settings::ControllerSettings,
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MovementState {
    #[default]
    Idle,
    /// A hop is in flight; directional input is ignored until it lands.
    Moving,
}

/// What a single [`PlayerController::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    /// The character fell out of the world and was put back on its spawn point.
    Respawned,
    Stepped { on_floor: bool },
}

#[derive(Clone, Debug)]
pub struct PlayerController {
    settings: ControllerSettings,
    spawn: Vec3,
    position: Vec3,
    velocity: Vec3,
    heading: f32,
    target_heading: f32,
    state: MovementState,
    on_floor: bool,
    collider: CapsuleCollider,
}

impl PlayerController {
    /// Create a controller for a character standing at `spawn` and facing `heading`.
    pub fn new(settings: ControllerSettings, spawn: Vec3, heading: f32) -> Self {
        let heading = wrap_angle(heading);
        Self {
            settings,
            spawn,
            position: spawn,
            velocity: Vec3::zeros(),
            heading,
            target_heading: heading,
            state: MovementState::Idle,
            on_floor: false,
            collider: CapsuleCollider::standing_at(
                spawn,
                settings.capsule_radius,
                settings.capsule_height,
            ),
        }
    }

    pub fn settings(&self) -> &ControllerSettings {
        &self.settings
    }

    /// Feet position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn spawn(&self) -> Vec3 {
        self.spawn
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Current (smoothed) heading in radians, wrapped into [-π, π).
    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn target_heading(&self) -> f32 {
        self.target_heading
    }

    pub fn state(&self) -> MovementState {
        self.state
    }

    pub fn is_moving(&self) -> bool {
        self.state == MovementState::Moving
    }

    /// Whether the last tick ended with a floor contact.
    pub fn on_floor(&self) -> bool {
        self.on_floor
    }

    pub fn collider(&self) -> &CapsuleCollider {
        &self.collider
    }

    /// Start a hop in `direction`.
    ///
    /// Ignored while a hop is in flight or a modal is open. Returns whether the hop started.
    pub fn handle_direction(&mut self, direction: Direction, modal_open: bool) -> bool {
        if modal_open || self.is_moving() {
            return false;
        }

        let (dx, dz) = direction.planar();
        self.velocity.x += dx * self.settings.move_speed;
        self.velocity.z += dz * self.settings.move_speed;
        self.velocity.y = self.settings.jump_height;
        self.target_heading = direction.heading();
        self.state = MovementState::Moving;

        debug!("hop {direction:?}, velocity {:?}", self.velocity);
        true
    }

    /// Put the character back on its spawn point at rest.
    pub fn respawn(&mut self) {
        self.position = self.spawn;
        self.collider = CapsuleCollider::standing_at(
            self.spawn,
            self.settings.capsule_radius,
            self.settings.capsule_height,
        );
        self.velocity = Vec3::zeros();
        self.state = MovementState::Idle;
    }

    /// Advance the simulation by one fixed step.
    pub fn tick(&mut self, world: &StaticCollisionWorld) -> TickOutcome {
        if self.position.y < self.settings.fall_threshold {
            warn!(
                "character fell to y = {:.2}, respawning at {:?}",
                self.position.y, self.spawn
            );
            self.respawn();
            return TickOutcome::Respawned;
        }

        let step = self.settings.step;
        if !self.on_floor {
            self.velocity.y -= self.settings.gravity * step;
        }

        let delta = self.velocity * step;
        self.collider.translate(&delta);
        self.resolve_collisions(world);

        self.position = self.collider.feet();
        self.heading = step_heading(
            self.heading,
            self.target_heading,
            self.settings.rotation_damping,
        );

        TickOutcome::Stepped {
            on_floor: self.on_floor,
        }
    }

    fn resolve_collisions(&mut self, world: &StaticCollisionWorld) {
        self.on_floor = false;

        let Some(hit) = world.capsule_intersect(&self.collider) else {
            return;
        };

        self.on_floor = hit.is_floor();
        self.collider.translate(&hit.push());

        if self.on_floor {
            self.state = MovementState::Idle;
            self.velocity.x = 0.0;
            self.velocity.z = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;
    use crate::collision::world::tests::{flat_floor, wall_at_x};
    use crate::constants::{CAPSULE_HEIGHT, CAPSULE_RADIUS, JUMP_HEIGHT, MOVE_SPEED};

    fn floor_world() -> StaticCollisionWorld {
        StaticCollisionWorld::build(&[flat_floor(40.0, 0.0)]).unwrap()
    }

    fn controller_at(spawn: Vec3) -> PlayerController {
        PlayerController::new(ControllerSettings::default(), spawn, 0.0)
    }

    fn assert_capsule_follows_feet(ctrl: &PlayerController) {
        let feet = ctrl.position();
        let capsule = ctrl.collider();
        assert!((capsule.start - (feet + Vec3::new(0.0, CAPSULE_RADIUS, 0.0))).norm() < 1.0e-4);
        assert!((capsule.end - (feet + Vec3::new(0.0, CAPSULE_HEIGHT, 0.0))).norm() < 1.0e-4);
    }

    #[test]
    fn pressing_right_at_spawn_starts_a_hop() {
        let mut ctrl = controller_at(Vec3::new(4.0, 0.0, -2.0));

        assert!(ctrl.handle_direction(Direction::Right, false));

        let v = ctrl.velocity();
        assert_eq!(v.x, 0.0);
        assert_eq!(v.z, -MOVE_SPEED);
        assert_eq!(v.y, JUMP_HEIGHT);
        assert!(ctrl.is_moving());
        assert_eq!(ctrl.target_heading(), FRAC_PI_2);
    }

    #[test]
    fn input_is_ignored_while_modal_is_open() {
        let mut ctrl = controller_at(Vec3::zeros());

        for direction in Direction::ALL {
            assert!(!ctrl.handle_direction(direction, true));
        }
        assert_eq!(ctrl.velocity(), Vec3::zeros());
        assert_eq!(ctrl.state(), MovementState::Idle);
        assert_eq!(ctrl.target_heading(), 0.0);
    }

    #[test]
    fn second_hop_is_locked_out_until_landing() {
        let mut ctrl = controller_at(Vec3::zeros());

        assert!(ctrl.handle_direction(Direction::Up, false));
        let v = ctrl.velocity();
        assert!(!ctrl.handle_direction(Direction::Left, false));
        assert_eq!(ctrl.velocity(), v);
        assert_eq!(ctrl.target_heading(), 0.0);
    }

    #[test]
    fn respawn_resets_any_state() {
        let spawn = Vec3::new(1.0, 2.0, 3.0);
        let mut ctrl = controller_at(spawn);
        let world = floor_world();

        ctrl.handle_direction(Direction::Down, false);
        for _ in 0..5 {
            ctrl.tick(&world);
        }
        assert!(ctrl.position() != spawn);

        ctrl.respawn();
        assert_eq!(ctrl.position(), spawn);
        assert_eq!(ctrl.velocity(), Vec3::zeros());
        assert!(!ctrl.is_moving());
        assert_capsule_follows_feet(&ctrl);
    }

    #[test]
    fn falling_out_of_the_world_respawns() {
        let spawn = Vec3::new(0.0, 0.0, 0.0);
        let mut ctrl = controller_at(spawn);
        // Floor far away from the spawn so the character drops forever.
        let world = StaticCollisionWorld::build(&[{
            let mut mesh = flat_floor(1.0, 0.0);
            for v in &mut mesh.vertices {
                v.x += 500.0;
            }
            mesh
        }])
        .unwrap();

        let mut respawned = false;
        for _ in 0..1_000 {
            if ctrl.tick(&world) == TickOutcome::Respawned {
                respawned = true;
                break;
            }
            assert!(ctrl.position().y >= ctrl.settings().fall_threshold - 10.0);
        }

        assert!(respawned);
        assert_eq!(ctrl.position(), spawn);
        assert_eq!(ctrl.velocity(), Vec3::zeros());
    }

    #[test]
    fn wall_contact_keeps_the_hop_going() {
        let mut ctrl = controller_at(Vec3::zeros());
        // Up moves towards -x, straight into the wall.
        let world = StaticCollisionWorld::build(&[flat_floor(40.0, 0.0), wall_at_x(-1.0)]).unwrap();

        assert!(ctrl.handle_direction(Direction::Up, false));
        for _ in 0..6 {
            let outcome = ctrl.tick(&world);
            assert_eq!(outcome, TickOutcome::Stepped { on_floor: false });
            assert_capsule_follows_feet(&ctrl);
        }

        // Unobstructed, six ticks would carry the feet to x = -2.1.
        assert!(
            ctrl.position().x > -1.0 + CAPSULE_RADIUS - 1.0e-3,
            "feet at {:?}",
            ctrl.position()
        );
        assert!(ctrl.is_moving());
        assert_eq!(ctrl.velocity().x, -MOVE_SPEED);
        assert_eq!(ctrl.velocity().z, 0.0);
    }

    #[test]
    fn hop_lands_and_returns_to_idle() {
        let mut ctrl = controller_at(Vec3::zeros());
        let world = floor_world();

        assert!(ctrl.handle_direction(Direction::Right, false));

        let mut landed = false;
        for _ in 0..200 {
            let outcome = ctrl.tick(&world);
            assert_capsule_follows_feet(&ctrl);
            if let TickOutcome::Stepped { on_floor: true } = outcome {
                assert_eq!(ctrl.velocity().x, 0.0);
                assert_eq!(ctrl.velocity().z, 0.0);
                if !ctrl.is_moving() && ctrl.position().z < -1.0 {
                    landed = true;
                    break;
                }
            }
        }

        assert!(landed);
        assert!(ctrl.on_floor());
        assert!(ctrl.position().y.abs() < 0.05, "feet at {:?}", ctrl.position());
        assert!(ctrl.heading() > 0.0 && ctrl.heading() <= FRAC_PI_2);

        // A new hop is accepted once landed.
        assert!(ctrl.handle_direction(Direction::Up, false));
    }

    #[test]
    fn resting_character_stays_on_the_floor() {
        let mut ctrl = controller_at(Vec3::new(3.0, 0.0, -2.0));
        let world = floor_world();

        for _ in 0..120 {
            ctrl.tick(&world);
        }

        assert!(ctrl.on_floor());
        assert!(ctrl.position().y.abs() < 0.05);
        assert!((ctrl.position().x - 3.0).abs() < 1.0e-3);
        assert!((ctrl.position().z + 2.0).abs() < 1.0e-3);
    }
}
