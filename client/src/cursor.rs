use bevy::{
    prelude::*,
    window::{CursorEntered, CursorIcon, PrimaryWindow, SystemCursorIcon, WindowFocused},
};

use crate::interaction::Hovered;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CursorKind {
    Default,
    Pointer,
}

impl CursorKind {
    fn icon(self) -> CursorIcon {
        match self {
            CursorKind::Default => SystemCursorIcon::Default.into(),
            CursorKind::Pointer => SystemCursorIcon::Pointer.into(),
        }
    }
}

#[derive(Resource, PartialEq, Eq)]
struct CurrentCursor(CursorKind);

pub(super) fn plugin(app: &mut App) {
    app.insert_resource(CurrentCursor(CursorKind::Default));

    app.add_systems(
        Update,
        (
            track_hover.run_if(resource_changed::<Hovered>),
            // Apply when our desired cursor changes
            apply_cursor.run_if(resource_changed::<CurrentCursor>),
        )
            .chain(),
    );

    // Re-apply on focus/enter to avoid OS/browser resets
    app.add_systems(Update, (reapply_on_focus, reapply_on_enter));
}

fn track_hover(hovered: Res<Hovered>, mut current: ResMut<CurrentCursor>) {
    let kind = if hovered.0.is_some() {
        CursorKind::Pointer
    } else {
        CursorKind::Default
    };
    current.set_if_neq(CurrentCursor(kind));
}

fn apply_cursor(
    mut commands: Commands,
    window: Single<(Entity, Option<&CursorIcon>), With<PrimaryWindow>>,
    current: Res<CurrentCursor>,
) {
    let (window, existing) = *window;
    let desired = current.0.icon();
    // Only insert if missing or different
    if existing != Some(&desired) {
        commands.entity(window).insert(desired);
    }
}

fn reapply_on_focus(
    mut commands: Commands,
    mut messages: MessageReader<WindowFocused>,
    window: Single<Entity, With<PrimaryWindow>>,
    current: Res<CurrentCursor>,
) {
    for message in messages.read() {
        if message.focused {
            commands.entity(*window).insert(current.0.icon());
        }
    }
}

fn reapply_on_enter(
    mut commands: Commands,
    mut messages: MessageReader<CursorEntered>,
    window: Single<Entity, With<PrimaryWindow>>,
    current: Res<CurrentCursor>,
) {
    for _ in messages.read() {
        commands.entity(*window).insert(current.0.icon());
    }
}
