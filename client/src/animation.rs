//! Scripted squash-and-stretch timelines for the character and the clickable creatures.
//!
//! A script is a list of phases played back to back. Each phase eases the node's scale
//! (relative to its rest scale) and, for scripts that move, its height above the rest
//! position. The component removes itself when the last phase ends.

use bevy::{
    math::curve::{Curve, EaseFunction},
    prelude::*,
};

#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub duration: f32,
    /// Scale at the end of the phase, as a multiple of the rest scale.
    pub scale: Vec3,
    pub scale_ease: EaseFunction,
    /// Height above the rest position at the end of the phase.
    pub lift: f32,
    pub lift_ease: EaseFunction,
}

#[derive(Debug)]
pub struct Script {
    pub phases: &'static [Phase],
    /// Whether the script drives the node's height. The character's height belongs to the
    /// controller, so its squash only touches scale.
    pub moves_translation: bool,
}

/// Clicked creature: squash, stretch upwards, pop, then bounce back down.
pub static CREATURE_HOP: Script = Script {
    phases: &[
        Phase {
            duration: 0.1,
            scale: Vec3::new(1.2, 0.8, 1.2),
            scale_ease: EaseFunction::QuadraticOut,
            lift: 0.0,
            lift_ease: EaseFunction::Linear,
        },
        Phase {
            duration: 0.25,
            scale: Vec3::new(0.8, 1.2, 0.8),
            scale_ease: EaseFunction::QuadraticOut,
            lift: 2.0,
            lift_ease: EaseFunction::CubicOut,
        },
        Phase {
            duration: 0.15,
            scale: Vec3::splat(1.5),
            scale_ease: EaseFunction::QuadraticOut,
            lift: 2.0,
            lift_ease: EaseFunction::Linear,
        },
        Phase {
            duration: 0.25,
            scale: Vec3::ONE,
            scale_ease: EaseFunction::QuadraticOut,
            lift: 0.0,
            lift_ease: EaseFunction::BounceOut,
        },
    ],
    moves_translation: true,
};

/// Character take-off: squash, stretch, recover, hold.
pub static CHARACTER_SQUASH: Script = Script {
    phases: &[
        Phase {
            duration: 0.1,
            scale: Vec3::new(1.08, 0.9, 1.08),
            scale_ease: EaseFunction::CubicOut,
            lift: 0.0,
            lift_ease: EaseFunction::Linear,
        },
        Phase {
            duration: 0.15,
            scale: Vec3::new(0.92, 1.1, 0.92),
            scale_ease: EaseFunction::CubicOut,
            lift: 0.0,
            lift_ease: EaseFunction::Linear,
        },
        Phase {
            duration: 0.15,
            scale: Vec3::ONE,
            scale_ease: EaseFunction::QuadraticInOut,
            lift: 0.0,
            lift_ease: EaseFunction::Linear,
        },
        Phase {
            duration: 0.1,
            scale: Vec3::ONE,
            scale_ease: EaseFunction::QuadraticOut,
            lift: 0.0,
            lift_ease: EaseFunction::Linear,
        },
    ],
    moves_translation: false,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub scale: Vec3,
    pub lift: f32,
}

impl Pose {
    const REST: Pose = Pose {
        scale: Vec3::ONE,
        lift: 0.0,
    };
}

/// Playback of a [`Script`] on one node.
#[derive(Component, Debug)]
pub struct ScriptedAnimation {
    script: &'static Script,
    index: usize,
    elapsed: f32,
    from: Pose,
    rest_scale: Vec3,
    rest_y: f32,
}

impl ScriptedAnimation {
    pub fn new(script: &'static Script, rest: &Transform) -> Self {
        Self {
            script,
            index: 0,
            elapsed: 0.0,
            from: Pose::REST,
            rest_scale: rest.scale,
            rest_y: rest.translation.y,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.index >= self.script.phases.len()
    }

    /// Advance playback by `dt` seconds and return the pose to display.
    ///
    /// Large steps roll over into later phases; once finished the end pose is held.
    pub fn advance(&mut self, dt: f32) -> Pose {
        let mut remaining = dt.max(0.0);
        while let Some(phase) = self.script.phases.get(self.index) {
            if self.elapsed + remaining < phase.duration {
                self.elapsed += remaining;
                return self.sample(phase);
            }
            remaining -= phase.duration - self.elapsed;
            self.from = Pose {
                scale: phase.scale,
                lift: phase.lift,
            };
            self.index += 1;
            self.elapsed = 0.0;
        }
        self.from
    }

    fn sample(&self, phase: &Phase) -> Pose {
        let t = if phase.duration > 0.0 {
            self.elapsed / phase.duration
        } else {
            1.0
        };
        let scale_t = phase.scale_ease.sample_clamped(t);
        let lift_t = phase.lift_ease.sample_clamped(t);
        Pose {
            scale: self.from.scale.lerp(phase.scale, scale_t),
            lift: self.from.lift + (phase.lift - self.from.lift) * lift_t,
        }
    }

    fn apply(&self, pose: Pose, transform: &mut Transform) {
        transform.scale = self.rest_scale * pose.scale;
        if self.script.moves_translation {
            transform.translation.y = self.rest_y + pose.lift;
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, advance_animations);
}

/// Start `script` on `entity` unless it is already animating.
pub fn start(
    commands: &mut Commands,
    entity: Entity,
    transform: &Transform,
    animating: bool,
    script: &'static Script,
) -> bool {
    if animating {
        return false;
    }
    commands
        .entity(entity)
        .insert(ScriptedAnimation::new(script, transform));
    true
}

fn advance_animations(
    mut commands: Commands,
    time: Res<Time>,
    mut animated: Query<(Entity, &mut Transform, &mut ScriptedAnimation)>,
) {
    for (entity, mut transform, mut animation) in &mut animated {
        let pose = animation.advance(time.delta_secs());
        animation.apply(pose, &mut transform);
        if animation.is_finished() {
            commands.entity(entity).remove::<ScriptedAnimation>();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    fn total(script: &Script) -> f32 {
        script.phases.iter().map(|p| p.duration).sum()
    }

    fn resting_at(y: f32) -> Transform {
        Transform::from_xyz(4.0, y, -1.0)
    }

    #[test]
    fn creature_hop_peaks_then_lands() {
        let mut animation = ScriptedAnimation::new(&CREATURE_HOP, &resting_at(0.5));

        let squashed = animation.advance(0.1);
        assert!(squashed.scale.abs_diff_eq(Vec3::new(1.2, 0.8, 1.2), EPS));
        assert!(squashed.lift.abs() < EPS);

        let risen = animation.advance(0.25);
        assert!((risen.lift - 2.0).abs() < EPS);
        assert!(risen.scale.abs_diff_eq(Vec3::new(0.8, 1.2, 0.8), EPS));

        let popped = animation.advance(0.15);
        assert!(popped.scale.abs_diff_eq(Vec3::splat(1.5), EPS));

        let landed = animation.advance(0.25);
        assert!(animation.is_finished());
        assert_eq!(landed, Pose::REST);
    }

    #[test]
    fn lift_is_applied_relative_to_rest_height() {
        let rest = resting_at(0.5);
        let mut animation = ScriptedAnimation::new(&CREATURE_HOP, &rest);
        let mut transform = rest;

        let pose = animation.advance(0.35);
        animation.apply(pose, &mut transform);

        assert!((transform.translation.y - 2.5).abs() < EPS);
        assert_eq!(transform.translation.x, rest.translation.x);
    }

    #[test]
    fn squash_leaves_translation_alone() {
        let rest = resting_at(3.0).with_scale(Vec3::splat(2.0));
        let mut animation = ScriptedAnimation::new(&CHARACTER_SQUASH, &rest);
        let mut transform = rest;
        transform.translation.y = 7.0;

        let pose = animation.advance(0.1);
        animation.apply(pose, &mut transform);

        assert_eq!(transform.translation.y, 7.0);
        assert!(transform.scale.abs_diff_eq(Vec3::new(2.16, 1.8, 2.16), EPS));
    }

    #[test]
    fn oversized_step_finishes_at_rest() {
        let mut animation = ScriptedAnimation::new(&CHARACTER_SQUASH, &Transform::IDENTITY);
        let pose = animation.advance(total(&CHARACTER_SQUASH) + 1.0);
        assert!(animation.is_finished());
        assert_eq!(pose, Pose::REST);
    }

    #[test]
    fn playback_is_monotonic_in_phase() {
        let mut animation = ScriptedAnimation::new(&CREATURE_HOP, &Transform::IDENTITY);
        let mut steps = 0;
        while !animation.is_finished() {
            animation.advance(1.0 / 60.0);
            steps += 1;
            assert!(steps < 1000);
        }
        let expected = (total(&CREATURE_HOP) * 60.0).ceil() as i32;
        assert!((steps - expected).abs() <= 1);
    }
}
