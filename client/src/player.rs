use bevy::prelude::*;
use garden_shared::{Direction, PlayerController, TickOutcome};
use leafwing_input_manager::prelude::ActionState;

use crate::{
    animation::{self, CHARACTER_SQUASH, ScriptedAnimation},
    audio::SoundEffect,
    convert::from_na,
    input::InputAction,
    modal::Modal,
    scene::{Character, CollisionWorld},
};

/// The character controller driving the `character` scene node.
#[derive(Resource, Deref, DerefMut)]
pub struct Player(pub PlayerController);

/// A hop request from the keyboard or the on-screen buttons.
#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectionInput(pub Direction);

pub(super) fn plugin(app: &mut App) {
    app.add_message::<DirectionInput>();

    app.add_systems(
        Update,
        (
            (handle_respawn, handle_direction_input).run_if(controller_ready),
            sync_character_transform.run_if(resource_exists::<Player>),
        )
            .chain(),
    );
    app.add_systems(FixedUpdate, step_player.run_if(controller_ready));
}

/// The controller only accepts input and ticks once it has a world to land on.
pub fn controller_ready(player: Option<Res<Player>>, world: Option<Res<CollisionWorld>>) -> bool {
    player.is_some() && world.is_some()
}

fn handle_respawn(actions: Res<ActionState<InputAction>>, mut player: ResMut<Player>) {
    if actions.just_pressed(&InputAction::Respawn) {
        info!("respawn requested");
        player.respawn();
    }
}

fn handle_direction_input(
    mut commands: Commands,
    mut directions: MessageReader<DirectionInput>,
    mut player: ResMut<Player>,
    modal: Res<Modal>,
    character: Single<(Entity, &Transform, Has<ScriptedAnimation>), With<Character>>,
    mut sounds: MessageWriter<SoundEffect>,
) {
    let (entity, transform, animating) = *character;
    for DirectionInput(direction) in directions.read() {
        if !player.handle_direction(*direction, modal.is_open()) {
            continue;
        }
        sounds.write(SoundEffect::Hop);
        animation::start(&mut commands, entity, transform, animating, &CHARACTER_SQUASH);
    }
}

fn step_player(mut player: ResMut<Player>, world: Res<CollisionWorld>) {
    if let TickOutcome::Respawned = player.tick(&world.0) {
        debug!("character respawned after falling");
    }
}

/// Write the controller pose onto the character node, in its parent's space.
fn sync_character_transform(
    player: Res<Player>,
    character: Single<(&mut Transform, Option<&ChildOf>), With<Character>>,
    parents: Query<&GlobalTransform>,
) {
    let (mut transform, child_of) = character.into_inner();

    let world_position = from_na(&player.position());
    let world_rotation = Quat::from_rotation_y(player.heading());

    match child_of.and_then(|child_of| parents.get(child_of.parent()).ok()) {
        Some(parent) => {
            let (_, parent_rotation, _) = parent.to_scale_rotation_translation();
            transform.translation = parent.affine().inverse().transform_point3(world_position);
            transform.rotation = parent_rotation.inverse() * world_rotation;
        }
        None => {
            transform.translation = world_position;
            transform.rotation = world_rotation;
        }
    }
}

#[cfg(test)]
mod tests {
    use bevy::ecs::system::RunSystemOnce;
    use garden_shared::{ControllerSettings, Point3, StaticCollisionWorld, TriangleMesh, Vec3};

    use super::*;

    fn ready(world: &mut World) -> bool {
        world.run_system_once(controller_ready).unwrap()
    }

    #[test]
    fn controller_waits_for_collision_world() {
        let mut world = World::new();
        assert!(!ready(&mut world));

        world.insert_resource(Player(PlayerController::new(
            ControllerSettings::default(),
            Vec3::zeros(),
            0.0,
        )));
        assert!(!ready(&mut world));

        let floor = TriangleMesh::new(
            vec![
                Point3::new(-1.0, 0.0, -1.0),
                Point3::new(1.0, 0.0, -1.0),
                Point3::new(0.0, 0.0, 1.0),
            ],
            vec![[0, 2, 1]],
        );
        let collision = StaticCollisionWorld::build(&[floor]).unwrap();
        world.insert_resource(CollisionWorld(collision));
        assert!(ready(&mut world));
    }
}
