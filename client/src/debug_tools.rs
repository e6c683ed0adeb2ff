//! Debug/performance tooling for native dev builds.
//!
//! Compiled only with `dev_native`. Besides the perf overlay it draws the character's
//! collision capsule and marks the hovered interactive node.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, SystemInformationDiagnosticsPlugin,
};
use bevy::prelude::*;
use bevy::render::diagnostic::RenderDiagnosticsPlugin;
use iyes_perf_ui::prelude::*;

use crate::{convert::from_na, interaction::Hovered, player::Player};

const CAPSULE_COLOR: Color = Color::srgb(1.0, 1.0, 0.2);
const HOVER_COLOR: Color = Color::srgb(1.0, 0.3, 0.8);

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        SystemInformationDiagnosticsPlugin::default(),
        RenderDiagnosticsPlugin,
        PerfUiPlugin,
    ));

    app.add_systems(Startup, spawn_perf_ui);
    app.add_systems(
        Update,
        (
            draw_player_capsule.run_if(resource_exists::<Player>),
            draw_hover_marker,
        ),
    );
}

fn spawn_perf_ui(mut commands: Commands) {
    commands.spawn(PerfUiAllEntries::default());
}

fn draw_player_capsule(mut gizmos: Gizmos, player: Res<Player>) {
    let capsule = player.collider();
    let start = from_na(&capsule.start);
    let end = from_na(&capsule.end);

    gizmos.sphere(Isometry3d::from_translation(start), capsule.radius, CAPSULE_COLOR);
    gizmos.sphere(Isometry3d::from_translation(end), capsule.radius, CAPSULE_COLOR);
    gizmos.line(start, end, CAPSULE_COLOR);

    // Facing
    let forward = Quat::from_rotation_y(player.heading()) * Vec3::NEG_Z;
    gizmos.arrow(start, start + forward * 1.5, CAPSULE_COLOR);
}

fn draw_hover_marker(mut gizmos: Gizmos, hovered: Res<Hovered>, targets: Query<&GlobalTransform>) {
    let Some((entity, _)) = hovered.0 else {
        return;
    };
    let Ok(global) = targets.get(entity) else {
        return;
    };
    let tip = global.translation();
    gizmos.arrow(tip + Vec3::Y * 3.0, tip + Vec3::Y * 0.5, HOVER_COLOR);
}
