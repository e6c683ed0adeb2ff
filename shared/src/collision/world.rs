//! Static collision world built once from the level's collision meshes.
//!
//! Every triangle becomes its own parentless Rapier collider, so the broad-phase BVH plays the
//! role of a triangle octree: a capsule query first collects the triangles whose bounds overlap
//! the capsule, then resolves each penetrating triangle in turn.
//!
//! The world is immutable after [`StaticCollisionWorld::build`].

use log::debug;
use rapier3d::{
    parry::query,
    prelude::{
        BroadPhaseBvh, ColliderBuilder, ColliderHandle, ColliderSet, IntegrationParameters,
        NarrowPhase, QueryFilter, QueryPipeline, RigidBodySet,
    },
};
use thiserror::Error;

use super::{CapsuleCollider, Point3, Vec3};
use crate::constants::SIMULATION_STEP;

/// Minimum upward normal component for a contact to count as floor.
const FLOOR_NORMAL_MIN_Y: f32 = 1.0e-4;

/// Triangles below this doubled area are dropped; they have no usable normal.
const DEGENERATE_AREA_EPS: f32 = 1.0e-10;

/// Penetrations shallower than this are treated as touching.
const PENETRATION_EPS: f32 = 1.0e-6;

/// World-space triangle soup for one collision mesh.
#[derive(Clone, Debug, Default)]
pub struct TriangleMesh {
    pub vertices: Vec<Point3>,
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    pub fn new(vertices: Vec<Point3>, indices: Vec<[u32; 3]>) -> Self {
        Self { vertices, indices }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CollisionBuildError {
    #[error("collision geometry contains no usable triangles")]
    Empty,
    #[error("mesh {mesh} references vertex {index} but only has {len} vertices")]
    IndexOutOfRange { mesh: usize, index: u32, len: usize },
    #[error("mesh {mesh} has a non-finite vertex at {index}")]
    NonFiniteVertex { mesh: usize, index: usize },
}

/// Result of a capsule query: push the capsule by `normal * depth` to separate it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Penetration {
    /// Unit push-out direction.
    pub normal: Vec3,
    pub depth: f32,
}

impl Penetration {
    #[inline]
    pub fn push(&self) -> Vec3 {
        self.normal * self.depth
    }

    /// Contact supports the character from below.
    ///
    /// Vertical walls can report a normal with a few ulps of upward `y`; those stay walls.
    #[inline]
    pub fn is_floor(&self) -> bool {
        self.normal.y > FLOOR_NORMAL_MIN_Y
    }
}

pub struct StaticCollisionWorld {
    bodies: RigidBodySet,
    colliders: ColliderSet,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
}

impl StaticCollisionWorld {
    /// Build the world from world-space meshes.
    ///
    /// Degenerate triangles are skipped. Fails when a mesh references a missing vertex, holds a
    /// non-finite vertex, or when nothing usable remains.
    pub fn build(meshes: &[TriangleMesh]) -> Result<Self, CollisionBuildError> {
        let bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();
        let mut modified_colliders = Vec::new();
        let mut skipped = 0usize;

        for (mesh_idx, mesh) in meshes.iter().enumerate() {
            if let Some(index) = mesh
                .vertices
                .iter()
                .position(|v| !v.coords.iter().all(|c| c.is_finite()))
            {
                return Err(CollisionBuildError::NonFiniteVertex {
                    mesh: mesh_idx,
                    index,
                });
            }

            for tri in &mesh.indices {
                let mut corners = [Point3::origin(); 3];
                for (corner, &index) in corners.iter_mut().zip(tri) {
                    *corner = *mesh.vertices.get(index as usize).ok_or(
                        CollisionBuildError::IndexOutOfRange {
                            mesh: mesh_idx,
                            index,
                            len: mesh.vertices.len(),
                        },
                    )?;
                }

                let [a, b, c] = corners;
                if (b - a).cross(&(c - a)).norm_squared() <= DEGENERATE_AREA_EPS {
                    skipped += 1;
                    continue;
                }

                let handle = colliders.insert(ColliderBuilder::triangle(a, b, c).build());
                modified_colliders.push(handle);
            }
        }

        if modified_colliders.is_empty() {
            return Err(CollisionBuildError::Empty);
        }
        if skipped > 0 {
            debug!("skipped {skipped} degenerate collision triangles");
        }

        let mut broad_phase = BroadPhaseBvh::new();
        let mut events = Vec::new();
        broad_phase.update(
            &IntegrationParameters {
                dt: SIMULATION_STEP,
                ..IntegrationParameters::default()
            },
            &colliders,
            &bodies,
            &modified_colliders,
            &[],
            &mut events,
        );

        Ok(Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase: NarrowPhase::default(),
        })
    }

    /// Number of triangles indexed by the world.
    pub fn triangle_count(&self) -> usize {
        self.colliders.len()
    }

    fn query_pipeline(&self) -> QueryPipeline<'_> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            QueryFilter::default(),
        )
    }

    /// Capsule-vs-world penetration test.
    ///
    /// Candidates come from the BVH. Each penetrating triangle pushes a working copy of the
    /// capsule out along its contact normal before the next one is tested; the returned
    /// penetration is the sum of those pushes. `None` when nothing penetrates.
    pub fn capsule_intersect(&self, capsule: &CapsuleCollider) -> Option<Penetration> {
        let (iso, shape) = capsule.shape();
        let pipeline = self.query_pipeline();
        let candidates: Vec<ColliderHandle> = pipeline
            .intersect_shape(iso, &shape)
            .map(|(handle, _)| handle)
            .collect();

        let mut working = *capsule;
        let mut total = Vec3::zeros();

        for handle in candidates {
            let Some(collider) = self.colliders.get(handle) else {
                continue;
            };
            let (iso, shape) = working.shape();

            match query::contact(collider.position(), collider.shape(), &iso, &shape, 0.0) {
                Ok(Some(contact)) if contact.dist < -PENETRATION_EPS => {
                    let push = contact.normal1.into_inner() * -contact.dist;
                    working.translate(&push);
                    total += push;
                }
                Ok(_) => {}
                Err(err) => debug!("capsule contact skipped for {handle:?}: {err:?}"),
            }
        }

        let depth = total.norm();
        if depth <= PENETRATION_EPS {
            return None;
        }

        Some(Penetration {
            normal: total / depth,
            depth,
        })
    }
}
