// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod animation;
mod audio;
mod camera;
mod controls;
mod convert;
mod cursor;
mod input;
mod interaction;
mod loading;
mod modal;
mod player;
mod scene;
mod settings;
mod world;

use bevy::picking::prelude::*;
use bevy::prelude::*;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Window {
                    title: "Shree's Garden".to_string(),
                    fit_canvas_to_parent: true,
                    ..default()
                }
                .into(),
                ..default()
            }),
            MeshPickingPlugin,
        ));

        app.add_plugins((
            settings::plugin,
            world::plugin,
            scene::plugin,
            loading::plugin,
            input::plugin,
            player::plugin,
            camera::plugin,
            animation::plugin,
            interaction::plugin,
            cursor::plugin,
            modal::plugin,
            controls::plugin,
            audio::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}
