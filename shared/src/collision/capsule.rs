use rapier3d::{na, parry::shape::Capsule};

use super::{Point3, Vec3};

/// Swept-sphere collider that follows the character.
///
/// `start` is the lower endpoint, `end` the upper one. Both are world-space and always move
/// together; only [`CapsuleCollider::standing_at`] re-derives them from a feet position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CapsuleCollider {
    pub start: Vec3,
    pub end: Vec3,
    pub radius: f32,
}

impl CapsuleCollider {
    /// Place a capsule for a character whose feet are at `feet`.
    ///
    /// `start = feet + radius·Y`, `end = feet + height·Y`.
    pub fn standing_at(feet: Vec3, radius: f32, height: f32) -> Self {
        Self {
            start: feet + Vec3::new(0.0, radius, 0.0),
            end: feet + Vec3::new(0.0, height, 0.0),
            radius,
        }
    }

    #[inline]
    pub fn translate(&mut self, delta: &Vec3) {
        self.start += delta;
        self.end += delta;
    }

    /// Feet position implied by the lower endpoint.
    #[inline]
    pub fn feet(&self) -> Vec3 {
        self.start - Vec3::new(0.0, self.radius, 0.0)
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.start + self.end) * 0.5
    }

    /// parry3d shape with its segment expressed directly in world space.
    pub(crate) fn shape(&self) -> (na::Isometry3<f32>, Capsule) {
        (
            na::Isometry3::identity(),
            Capsule::new(
                Point3::from(self.start),
                Point3::from(self.end),
                self.radius,
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standing_capsule_keeps_fixed_offsets_from_feet() {
        let feet = Vec3::new(3.0, -2.0, 7.5);
        let capsule = CapsuleCollider::standing_at(feet, 0.35, 1.0);

        assert!((capsule.start - Vec3::new(3.0, -1.65, 7.5)).norm() < 1.0e-6);
        assert!((capsule.end - Vec3::new(3.0, -1.0, 7.5)).norm() < 1.0e-6);
        assert!((capsule.feet() - feet).norm() < 1.0e-6);
    }

    #[test]
    fn translate_moves_both_endpoints() {
        let mut capsule = CapsuleCollider::standing_at(Vec3::zeros(), 0.35, 1.0);
        let before = capsule;
        capsule.translate(&Vec3::new(1.0, 2.0, -3.0));

        let delta = Vec3::new(1.0, 2.0, -3.0);
        assert!((capsule.start - before.start - delta).norm() < 1.0e-6);
        assert!((capsule.end - before.end - delta).norm() < 1.0e-6);
        assert_eq!(capsule.radius, before.radius);
    }
}
