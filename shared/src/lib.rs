pub mod camera_rig;
pub mod collision;
pub mod constants;
pub mod controller;
pub mod heading;
pub mod interaction;
pub mod modal;
pub mod settings;

// Re-export Rapier so the client can reach parry/nalgebra types without its own dependency.
pub use rapier3d;

pub use camera_rig::{CameraPose, CameraRig};
pub use collision::{
    CapsuleCollider, CollisionBuildError, Penetration, Point3, StaticCollisionWorld, TriangleMesh,
    Vec3,
};
pub use controller::{MovementState, PlayerController, TickOutcome};
pub use heading::{Direction, step_heading, wrap_angle};
pub use interaction::{
    ClickAction, dispatch_click, first_interactive, interactive_name, is_creature, is_interactive,
    resolve_interactive, sanitize_node_name,
};
pub use modal::{DEFAULT_MODAL_IMAGE, ModalContent, ModalState, modal_content};
pub use settings::ControllerSettings;
