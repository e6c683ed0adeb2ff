//! Loads the garden scene and wires its named nodes into gameplay.
//!
//! Authoring contract with `models/garden.glb` (names compared after `sanitize_node_name`,
//! so `board.001` matches `board001`; export without Draco compression):
//! - `character` is the node moved by the player controller.
//! - `ground_collider` holds the (hidden) collision geometry.
//! - Interactive nodes are matched by name, see [`garden_shared::interaction`].

use bevy::{mesh::VertexAttributeValues, prelude::*, transform::TransformSystems};
use garden_shared::{
    PlayerController, StaticCollisionWorld, TriangleMesh, interactive_name, sanitize_node_name,
};

use crate::{
    convert::{to_na, to_na_point},
    player::Player,
    settings::GardenSettings,
};

pub const SCENE_PATH: &str = "models/garden.glb";

pub const CHARACTER_NODE: &str = "character";
pub const GROUND_COLLIDER_NODE: &str = "ground_collider";

/// Node controlled by the player.
#[derive(Component, Debug)]
pub struct Character;

/// Root of the collision-only geometry.
#[derive(Component, Debug)]
pub struct GroundCollider;

/// Node the pointer can target, with its canonical name.
#[derive(Component, Debug, Clone, Copy)]
pub struct Interactive(pub &'static str);

#[derive(Resource)]
pub struct CollisionWorld(pub StaticCollisionWorld);

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_scene);
    app.add_systems(Update, tag_scene_nodes);
    app.add_systems(
        PostUpdate,
        (
            build_collision_world.run_if(not(resource_exists::<CollisionWorld>)),
            init_player.run_if(not(resource_exists::<Player>)),
        )
            .after(TransformSystems::Propagate),
    );
}

fn spawn_scene(mut commands: Commands, asset_server: Res<AssetServer>) {
    info!("loading scene {SCENE_PATH}");
    commands.spawn((
        Name::new("Garden"),
        SceneRoot(asset_server.load(GltfAssetLabel::Scene(0).from_asset(SCENE_PATH))),
    ));
}

fn tag_scene_nodes(mut commands: Commands, nodes: Query<(Entity, &Name), Added<Name>>) {
    for (entity, name) in &nodes {
        let name = sanitize_node_name(name.as_str());
        match name.as_ref() {
            CHARACTER_NODE => {
                commands.entity(entity).insert(Character);
            }
            GROUND_COLLIDER_NODE => {
                commands
                    .entity(entity)
                    .insert((GroundCollider, Visibility::Hidden));
            }
            _ => {}
        }

        if let Some(name) = interactive_name(&name) {
            debug!("interactive node {name} -> {entity}");
            commands.entity(entity).insert(Interactive(name));
        }
    }
}

/// Bake the collider subtree into world-space triangles once every mesh under it is loaded.
fn build_collision_world(
    mut commands: Commands,
    roots: Query<Entity, With<GroundCollider>>,
    children: Query<&Children>,
    mesh_nodes: Query<(&Mesh3d, &GlobalTransform)>,
    meshes: Res<Assets<Mesh>>,
    mut failed: Local<bool>,
) {
    if *failed || roots.is_empty() {
        return;
    }

    let mut triangles = Vec::new();
    for root in &roots {
        for entity in std::iter::once(root).chain(children.iter_descendants(root)) {
            let Ok((mesh3d, global)) = mesh_nodes.get(entity) else {
                continue;
            };
            let Some(mesh) = meshes.get(&mesh3d.0) else {
                // Still loading, retry next frame.
                return;
            };
            if let Some(triangle_mesh) = world_triangles(mesh, global) {
                triangles.push(triangle_mesh);
            }
        }
    }

    match StaticCollisionWorld::build(&triangles) {
        Ok(world) => {
            info!(
                "collision world ready: {} triangles from {} meshes",
                world.triangle_count(),
                triangles.len()
            );
            commands.insert_resource(CollisionWorld(world));
        }
        Err(err) => {
            error!("failed to build collision world: {err}");
            *failed = true;
        }
    }
}

fn world_triangles(mesh: &Mesh, global: &GlobalTransform) -> Option<TriangleMesh> {
    let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute(Mesh::ATTRIBUTE_POSITION)
    else {
        warn!("collider mesh without float3 positions, skipping");
        return None;
    };

    let affine = global.affine();
    let vertices = positions
        .iter()
        .map(|p| to_na_point(affine.transform_point3(Vec3::from_array(*p))))
        .collect();

    let flat: Vec<u32> = match mesh.indices() {
        Some(indices) => indices.iter().map(|i| i as u32).collect(),
        None => (0..positions.len() as u32).collect(),
    };
    let indices = flat.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect();

    Some(TriangleMesh { vertices, indices })
}

/// Seed the controller from the character's authored world pose.
fn init_player(
    mut commands: Commands,
    character: Single<&GlobalTransform, With<Character>>,
    settings: Res<GardenSettings>,
) {
    let (_, rotation, translation) = character.to_scale_rotation_translation();
    let (yaw, _, _) = rotation.to_euler(EulerRot::YXZ);

    info!("character spawn at {translation}, heading {yaw:.2}");
    commands.insert_resource(Player(PlayerController::new(
        settings.controller,
        to_na(translation),
        yaw,
    )));
}
