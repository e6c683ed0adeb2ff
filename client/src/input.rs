use bevy::prelude::*;
use garden_shared::Direction;
use leafwing_input_manager::prelude::*;

use crate::player::DirectionInput;

#[derive(Reflect, Actionlike, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    Respawn,
    ToggleMute,
    CloseModal,
    LeftClick,
}

impl InputAction {
    /// Hop direction bound to this action, if it is a movement action.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputAction::MoveUp => Some(Direction::Up),
            InputAction::MoveDown => Some(Direction::Down),
            InputAction::MoveLeft => Some(Direction::Left),
            InputAction::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

const MOVEMENT_ACTIONS: [InputAction; 4] = [
    InputAction::MoveUp,
    InputAction::MoveDown,
    InputAction::MoveLeft,
    InputAction::MoveRight,
];

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(InputManagerPlugin::<InputAction>::default());

    app.register_type::<InputAction>();

    app.insert_resource(default_input_map());
    app.insert_resource(ActionState::<InputAction>::default());

    app.add_systems(Update, emit_direction_input);
}

fn default_input_map() -> InputMap<InputAction> {
    let mut input_map = InputMap::<InputAction>::default();
    input_map
        .insert(InputAction::MoveUp, KeyCode::KeyW)
        .insert(InputAction::MoveUp, KeyCode::ArrowUp)
        .insert(InputAction::MoveDown, KeyCode::KeyS)
        .insert(InputAction::MoveDown, KeyCode::ArrowDown)
        .insert(InputAction::MoveLeft, KeyCode::KeyA)
        .insert(InputAction::MoveLeft, KeyCode::ArrowLeft)
        .insert(InputAction::MoveRight, KeyCode::KeyD)
        .insert(InputAction::MoveRight, KeyCode::ArrowRight)
        .insert(InputAction::Respawn, KeyCode::KeyR)
        .insert(InputAction::ToggleMute, KeyCode::KeyM)
        .insert(InputAction::CloseModal, KeyCode::Escape)
        .insert(InputAction::LeftClick, MouseButton::Left);
    input_map
}

/// Keyboard hops go through the same message as the on-screen buttons.
fn emit_direction_input(
    actions: Res<ActionState<InputAction>>,
    mut directions: MessageWriter<DirectionInput>,
) {
    for action in MOVEMENT_ACTIONS {
        if actions.just_pressed(&action) {
            if let Some(direction) = action.direction() {
                directions.write(DirectionInput(direction));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn movement_actions_cover_every_direction() {
        let directions: Vec<_> = MOVEMENT_ACTIONS
            .iter()
            .filter_map(|action| action.direction())
            .collect();
        assert_eq!(directions, Direction::ALL.to_vec());
        assert_eq!(InputAction::Respawn.direction(), None);
    }
}
