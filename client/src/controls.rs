//! On-screen buttons for touch and mouse players.

use bevy::prelude::*;
use garden_shared::Direction;

use crate::{
    audio::{AudioSettings, toggle_label},
    player::DirectionInput,
};

const BUTTON_SIZE: f32 = 56.0;
const BUTTON_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.75);
const BUTTON_PRESSED_COLOR: Color = Color::srgba(0.85, 0.85, 0.85, 0.9);
const LABEL_COLOR: Color = Color::srgb(0.15, 0.2, 0.1);

#[derive(Component, Clone, Copy, Debug)]
pub struct DirectionButton(pub Direction);

#[derive(Component, Debug)]
pub struct AudioToggleButton;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Startup, (spawn_direction_pad, spawn_audio_toggle));
    app.add_systems(Update, (press_direction_buttons, tint_buttons));
}

fn arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => "▲",
        Direction::Down => "▼",
        Direction::Left => "◀",
        Direction::Right => "▶",
    }
}

fn direction_button(direction: Direction) -> impl Bundle {
    (
        Name::new(format!("{direction:?}Button")),
        Button,
        DirectionButton(direction),
        Node {
            width: Val::Px(BUTTON_SIZE),
            height: Val::Px(BUTTON_SIZE),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(BUTTON_COLOR),
        children![(
            Text::new(arrow(direction)),
            TextFont::from_font_size(24.0),
            TextColor(LABEL_COLOR),
        )],
    )
}

fn spawn_direction_pad(mut commands: Commands) {
    commands.spawn((
        Name::new("DirectionPad"),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(24.0),
            bottom: Val::Px(24.0),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::Center,
            row_gap: Val::Px(8.0),
            ..default()
        },
        children![
            direction_button(Direction::Up),
            (
                Node {
                    column_gap: Val::Px(8.0),
                    ..default()
                },
                children![
                    direction_button(Direction::Left),
                    direction_button(Direction::Down),
                    direction_button(Direction::Right),
                ],
            ),
        ],
    ));
}

fn spawn_audio_toggle(mut commands: Commands, settings: Res<AudioSettings>) {
    commands.spawn((
        Name::new("AudioToggle"),
        Button,
        AudioToggleButton,
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(24.0),
            top: Val::Px(24.0),
            padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(BUTTON_COLOR),
        children![(
            Text::new(toggle_label(&settings)),
            TextFont::from_font_size(18.0),
            TextColor(LABEL_COLOR),
        )],
    ));
}

fn press_direction_buttons(
    buttons: Query<(&Interaction, &DirectionButton), Changed<Interaction>>,
    mut directions: MessageWriter<DirectionInput>,
) {
    for (interaction, button) in &buttons {
        if *interaction == Interaction::Pressed {
            directions.write(DirectionInput(button.0));
        }
    }
}

fn tint_buttons(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut background) in &mut buttons {
        background.0 = match interaction {
            Interaction::Pressed => BUTTON_PRESSED_COLOR,
            _ => BUTTON_COLOR,
        };
    }
}
