use bevy::{picking::pointer::PointerInteraction, prelude::*};
use garden_shared::{ClickAction, dispatch_click, first_interactive};
use leafwing_input_manager::prelude::ActionState;

use crate::{
    animation::{self, CREATURE_HOP, ScriptedAnimation},
    audio::SoundEffect,
    input::InputAction,
    modal::{Modal, ModalRequest},
    scene::Interactive,
};

/// Interactive node under the pointer, with its canonical name.
#[derive(Resource, Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hovered(pub Option<(Entity, &'static str)>);

impl Hovered {
    pub fn name(&self) -> Option<&'static str> {
        self.0.map(|(_, name)| name)
    }
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Hovered>();
    app.add_systems(Update, (update_hover, handle_left_click).chain());
}

fn update_hover(
    modal: Res<Modal>,
    interactions: Query<&PointerInteraction>,
    interactives: Query<&Interactive>,
    parents: Query<&ChildOf>,
    overlays: Query<(), With<Node>>,
    mut hovered: ResMut<Hovered>,
) {
    let next = if modal.is_open() {
        None
    } else {
        interactions.iter().find_map(|interaction| {
            first_interactive(
                interaction.iter().map(|(entity, _hit)| *entity),
                |e| overlays.contains(e),
                |e| interactives.get(e).ok().map(|i| i.0),
                |e| parents.get(e).ok().map(ChildOf::parent),
            )
        })
    };

    if hovered.set_if_neq(Hovered(next)) {
        trace!("hovering {:?}", hovered.name());
    }
}

fn handle_left_click(
    mut commands: Commands,
    actions: Res<ActionState<InputAction>>,
    hovered: Res<Hovered>,
    modal: Res<Modal>,
    targets: Query<(&Transform, Has<ScriptedAnimation>)>,
    mut requests: MessageWriter<ModalRequest>,
    mut sounds: MessageWriter<SoundEffect>,
) {
    if !actions.just_pressed(&InputAction::LeftClick) {
        return;
    }
    let Some((entity, name)) = hovered.0 else {
        return;
    };

    match dispatch_click(Some(name), modal.is_open()) {
        Some(ClickAction::Hop) => {
            let Ok((transform, animating)) = targets.get(entity) else {
                return;
            };
            if animation::start(&mut commands, entity, transform, animating, &CREATURE_HOP) {
                debug!("{name} hops");
                sounds.write(SoundEffect::Hop);
            }
        }
        Some(ClickAction::OpenModal) => {
            requests.write(ModalRequest::Open(name));
        }
        None => {}
    }
}
