use bevy::{audio::AudioSinkPlayback, prelude::*};
use leafwing_input_manager::prelude::ActionState;

use crate::{controls::AudioToggleButton, input::InputAction};

const MUSIC_PATH: &str = "audio/music.ogg";

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AudioSettings {
    pub muted: bool,
}

impl AudioSettings {
    /// Flip the mute flag, returning the new value.
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SoundEffect {
    Hop,
    Click,
    ModalOpen,
    ModalClose,
}

impl SoundEffect {
    pub fn path(self) -> &'static str {
        match self {
            SoundEffect::Hop => "audio/hop.ogg",
            SoundEffect::Click => "audio/click.ogg",
            SoundEffect::ModalOpen => "audio/modal_open.ogg",
            SoundEffect::ModalClose => "audio/modal_close.ogg",
        }
    }
}

/// The clip to play for `effect`, or `None` while muted.
fn audible(effect: SoundEffect, settings: &AudioSettings) -> Option<&'static str> {
    (!settings.muted).then(|| effect.path())
}

#[derive(Component)]
struct BackgroundMusic;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<AudioSettings>();
    app.add_message::<SoundEffect>();

    app.add_systems(Startup, start_music);
    app.add_systems(
        Update,
        (
            toggle_mute,
            play_sound_effects,
            sync_music,
            update_toggle_label.run_if(resource_changed::<AudioSettings>),
        )
            .chain(),
    );
}

fn start_music(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.spawn((
        Name::new("BackgroundMusic"),
        BackgroundMusic,
        AudioPlayer::new(asset_server.load(MUSIC_PATH)),
        PlaybackSettings::LOOP,
    ));
}

fn toggle_mute(
    actions: Res<ActionState<InputAction>>,
    buttons: Query<&Interaction, (Changed<Interaction>, With<AudioToggleButton>)>,
    mut settings: ResMut<AudioSettings>,
) {
    let pressed = buttons.iter().any(|i| *i == Interaction::Pressed);
    if pressed || actions.just_pressed(&InputAction::ToggleMute) {
        let muted = settings.toggle();
        info!("audio {}", if muted { "muted" } else { "unmuted" });
    }
}

fn play_sound_effects(
    mut commands: Commands,
    mut effects: MessageReader<SoundEffect>,
    settings: Res<AudioSettings>,
    asset_server: Res<AssetServer>,
) {
    for effect in effects.read() {
        if let Some(path) = audible(*effect, &settings) {
            commands.spawn((
                AudioPlayer::new(asset_server.load(path)),
                PlaybackSettings::DESPAWN,
            ));
        }
    }
}

/// The sink appears a few frames after the music entity, so this runs every frame.
fn sync_music(settings: Res<AudioSettings>, sinks: Query<&AudioSink, With<BackgroundMusic>>) {
    for sink in &sinks {
        if settings.muted && !sink.is_paused() {
            sink.pause();
        } else if !settings.muted && sink.is_paused() {
            sink.play();
        }
    }
}

fn update_toggle_label(
    settings: Res<AudioSettings>,
    buttons: Query<&Children, With<AudioToggleButton>>,
    mut texts: Query<&mut Text>,
) {
    for children in &buttons {
        for child in children.iter() {
            if let Ok(mut text) = texts.get_mut(child) {
                text.0 = toggle_label(&settings).to_string();
            }
        }
    }
}

pub fn toggle_label(settings: &AudioSettings) -> &'static str {
    if settings.muted {
        "Sound: off"
    } else {
        "Sound: on"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn muting_silences_effects() {
        let mut settings = AudioSettings::default();
        assert_eq!(audible(SoundEffect::Hop, &settings), Some("audio/hop.ogg"));

        assert!(settings.toggle());
        assert_eq!(audible(SoundEffect::Hop, &settings), None);
        assert_eq!(toggle_label(&settings), "Sound: off");

        assert!(!settings.toggle());
        assert!(audible(SoundEffect::ModalOpen, &settings).is_some());
    }
}
