use bevy::prelude::*;
use garden_shared::{CameraRig, ControllerSettings};

/// Rate of the fixed schedule that steps the character controller.
pub const FIXED_TICK_HZ: f64 = 60.0;

/// Tunables read by the gameplay plugins. Insert a different value before `AppPlugin` to
/// override them.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct GardenSettings {
    pub controller: ControllerSettings,
    pub camera: CameraRig,
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<GardenSettings>();
    app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ));
}
