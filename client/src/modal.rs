use bevy::prelude::*;
use garden_shared::{ModalContent, ModalState, modal_content};
use leafwing_input_manager::prelude::ActionState;

use crate::{audio::SoundEffect, input::InputAction};

const PANEL_COLOR: Color = Color::srgb(0.98, 0.97, 0.92);
const BACKDROP_COLOR: Color = Color::srgba(0.0, 0.0, 0.0, 0.45);
const TEXT_COLOR: Color = Color::srgb(0.12, 0.14, 0.1);
const BUTTON_COLOR: Color = Color::srgba(1.0, 1.0, 1.0, 0.75);

/// Which project modal is showing. Gameplay input is ignored while one is open.
#[derive(Resource, Default, Debug, Deref, DerefMut)]
pub struct Modal(pub ModalState);

#[derive(Message, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalRequest {
    Open(&'static str),
    Close,
}

#[derive(Component)]
struct ModalRoot;

#[derive(Component)]
struct ModalTitle;

#[derive(Component)]
struct ModalDescription;

#[derive(Component)]
struct ModalImage;

#[derive(Component)]
struct ModalExitButton;

#[derive(Component)]
struct ModalVisitButton;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Modal>();
    app.add_message::<ModalRequest>();

    app.add_systems(Startup, spawn_modal);
    app.add_systems(
        Update,
        (
            (close_on_escape, press_exit_button, press_visit_button),
            apply_modal_requests,
        )
            .chain(),
    );
}

fn spawn_modal(mut commands: Commands) {
    let text = |size: f32| (TextFont::from_font_size(size), TextColor(TEXT_COLOR));
    let button = |label: &'static str| {
        (
            Button,
            Node {
                padding: UiRect::axes(Val::Px(18.0), Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(BUTTON_COLOR),
            children![(Text::new(label), text(18.0))],
        )
    };

    commands.spawn((
        Name::new("Modal"),
        ModalRoot,
        GlobalZIndex(10),
        Node {
            display: Display::None,
            position_type: PositionType::Absolute,
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            justify_content: JustifyContent::Center,
            align_items: AlignItems::Center,
            ..default()
        },
        BackgroundColor(BACKDROP_COLOR),
        children![(
            Node {
                width: Val::Px(480.0),
                max_width: Val::Percent(90.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(24.0)),
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(PANEL_COLOR),
            children![
                (
                    ModalImage,
                    ImageNode::default(),
                    Node {
                        width: Val::Percent(100.0),
                        height: Val::Px(220.0),
                        ..default()
                    },
                ),
                (ModalTitle, Text::default(), text(28.0)),
                (ModalDescription, Text::default(), text(16.0)),
                (
                    Node {
                        justify_content: JustifyContent::FlexEnd,
                        column_gap: Val::Px(12.0),
                        ..default()
                    },
                    children![
                        (ModalVisitButton, button("Visit")),
                        (ModalExitButton, button("Close")),
                    ],
                ),
            ],
        )],
    ));
}

fn close_on_escape(
    actions: Res<ActionState<InputAction>>,
    mut requests: MessageWriter<ModalRequest>,
) {
    if actions.just_pressed(&InputAction::CloseModal) {
        requests.write(ModalRequest::Close);
    }
}

fn press_exit_button(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ModalExitButton>)>,
    mut requests: MessageWriter<ModalRequest>,
) {
    if buttons.iter().any(|i| *i == Interaction::Pressed) {
        requests.write(ModalRequest::Close);
    }
}

fn press_visit_button(
    buttons: Query<&Interaction, (Changed<Interaction>, With<ModalVisitButton>)>,
    modal: Res<Modal>,
) {
    if !buttons.iter().any(|i| *i == Interaction::Pressed) {
        return;
    }
    let Some(link) = modal.current().and_then(modal_content).and_then(|c| c.link) else {
        return;
    };
    info!("opening {link}");
    if let Err(err) = webbrowser::open(link) {
        warn!("failed to open {link}: {err}");
    }
}

fn apply_modal_requests(
    mut requests: MessageReader<ModalRequest>,
    mut modal: ResMut<Modal>,
    mut sounds: MessageWriter<SoundEffect>,
    asset_server: Res<AssetServer>,
    mut root: Single<&mut Node, (With<ModalRoot>, Without<ModalVisitButton>)>,
    mut visit: Single<&mut Node, (With<ModalVisitButton>, Without<ModalRoot>)>,
    mut title: Single<&mut Text, (With<ModalTitle>, Without<ModalDescription>)>,
    mut description: Single<&mut Text, (With<ModalDescription>, Without<ModalTitle>)>,
    mut image: Single<&mut ImageNode, With<ModalImage>>,
) {
    for request in requests.read() {
        match *request {
            ModalRequest::Open(name) => {
                let opened = modal.open(name);
                for effect in open_sounds(opened) {
                    sounds.write(*effect);
                }
                let Some(content) = opened else {
                    continue;
                };
                info!("showing modal {name}");
                present(content, &mut title, &mut description, &mut visit);
                image.image = asset_server.load(content.image_or_default());
                root.display = Display::Flex;
            }
            ModalRequest::Close => {
                if modal.close() {
                    root.display = Display::None;
                    sounds.write(SoundEffect::ModalClose);
                }
            }
        }
    }
}

/// Feedback for an open request; silent when nothing opened.
fn open_sounds(opened: Option<&ModalContent>) -> &'static [SoundEffect] {
    match opened {
        Some(_) => &[SoundEffect::Click, SoundEffect::ModalOpen],
        None => &[],
    }
}

fn present(content: &ModalContent, title: &mut Text, description: &mut Text, visit: &mut Node) {
    title.0 = content.title.to_string();
    description.0 = content.description.to_string();
    visit.display = visit_display(content);
}

fn visit_display(content: &ModalContent) -> Display {
    if content.link.is_some() {
        Display::Flex
    } else {
        Display::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visit_button_follows_link() {
        let board = modal_content("board").unwrap();
        let name = modal_content("name").unwrap();
        assert_eq!(visit_display(board), Display::Flex);
        assert_eq!(visit_display(name), Display::None);
    }

    #[test]
    fn opening_without_content_is_silent() {
        let mut state = ModalState::default();

        assert_eq!(open_sounds(state.open("character")), &[] as &[SoundEffect]);
        assert!(!state.is_open());

        assert_eq!(
            open_sounds(state.open("board")),
            &[SoundEffect::Click, SoundEffect::ModalOpen]
        );
    }

    #[test]
    fn present_fills_text_and_hides_visit_without_link() {
        let content = modal_content("board002").unwrap();
        let mut title = Text::default();
        let mut description = Text::new("stale");
        let mut visit = Node::default();

        present(content, &mut title, &mut description, &mut visit);

        assert_eq!(title.0, "threejs");
        assert!(description.0.is_empty());
        assert_eq!(visit.display, Display::None);
    }
}
