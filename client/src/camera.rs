use bevy::{
    camera::ScalingMode, core_pipeline::tonemapping::Tonemapping, prelude::*,
    transform::TransformSystems,
};
use garden_shared::CameraPose;

use crate::{
    convert::{from_na, to_na},
    player::Player,
    settings::GardenSettings,
};

const AMBIENT_BRIGHTNESS: f32 = 400.0;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, add_camera);
    app.add_systems(
        PostUpdate,
        follow_player
            .run_if(resource_exists::<Player>)
            .before(TransformSystems::Propagate),
    );
}

fn pose_transform(pose: &CameraPose) -> Transform {
    Transform::from_translation(from_na(&pose.eye)).looking_at(from_na(&pose.target), Vec3::Y)
}

fn add_camera(mut commands: Commands, settings: Res<GardenSettings>) {
    let rig = settings.camera;
    let pose = rig.follow(&to_na(Vec3::ZERO));

    commands.spawn((
        Camera3d::default(),
        Tonemapping::AcesFitted,
        Projection::from(OrthographicProjection {
            // `view_size` is half the visible height.
            scaling_mode: ScalingMode::FixedVertical {
                viewport_height: rig.view_size * 2.0,
            },
            near: 0.1,
            far: 1000.0,
            ..OrthographicProjection::default_3d()
        }),
        AmbientLight {
            color: Color::WHITE,
            brightness: AMBIENT_BRIGHTNESS,
            ..default()
        },
        pose_transform(&pose),
    ));
}

fn follow_player(
    mut camera: Single<&mut Transform, With<Camera3d>>,
    player: Res<Player>,
    settings: Res<GardenSettings>,
) {
    let pose = settings.camera.follow(&player.position());
    **camera = pose_transform(&pose);
}
