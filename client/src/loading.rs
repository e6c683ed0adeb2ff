use bevy::prelude::*;

use crate::player::controller_ready;

#[derive(Component)]
struct LoadingScreen;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, spawn_loading_screen);
    app.add_systems(Update, dismiss_loading_screen.run_if(controller_ready));
}

fn spawn_loading_screen(mut commands: Commands) {
    commands.spawn((
        Name::new("LoadingScreen"),
        LoadingScreen,
        GlobalZIndex(20),
        Node {
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(crate::world::CLEAR_COLOR),
        children![(
            Text::new("Loading garden..."),
            TextFont::from_font_size(32.0),
            TextColor(Color::WHITE),
        )],
    ));
}

fn dismiss_loading_screen(mut commands: Commands, screen: Single<Entity, With<LoadingScreen>>) {
    info!("scene ready");
    commands.entity(*screen).despawn();
}
