use bevy::prelude::*;

/// Warm key light matching the scene's painted look.
const SUN_ILLUMINANCE: f32 = 9_000.0;
const SUN_POSITION: Vec3 = Vec3::new(-5.0, 20.0, 5.0);

pub const CLEAR_COLOR: Color = Color::srgb_u8(0x97, 0xe4, 0x60);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(ClearColor(CLEAR_COLOR));
    app.add_systems(Startup, setup);
}

fn setup(mut commands: Commands) {
    info!("world setup");

    commands.spawn((
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
