/*!
Collision root module.

The character is approximated by a [`CapsuleCollider`] (two endpoints + radius) and tested
against a [`StaticCollisionWorld`]: an immutable set of world-space triangles indexed by
Rapier's BVH broad-phase, with parry3d doing the narrow-phase capsule/triangle contacts.

- capsule: the character capsule and its placement relative to the character's feet
- world:   static world construction and the capsule penetration query
*/

pub mod capsule;
pub mod world;

use nalgebra as na;

pub use capsule::CapsuleCollider;
pub use world::{CollisionBuildError, Penetration, StaticCollisionWorld, TriangleMesh};

/// Common math aliases for clarity and consistency.
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;
