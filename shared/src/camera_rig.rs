use crate::{
    collision::Vec3,
    constants::{CAMERA_OFFSET, CAMERA_VIEW_SIZE},
};

/// Fixed-offset follow camera.
///
/// The eye tracks the subject in X/Z only; its height is `offset.y` regardless of how high the
/// character hops, and it looks down at the subject's footprint on the `y = 0` plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraRig {
    pub offset: Vec3,
    /// Half of the orthographic view height.
    pub view_size: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            offset: Vec3::from(CAMERA_OFFSET),
            view_size: CAMERA_VIEW_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraRig {
    pub fn follow(&self, subject: &Vec3) -> CameraPose {
        let eye = Vec3::new(
            subject.x + self.offset.x,
            self.offset.y,
            subject.z + self.offset.z,
        );
        CameraPose {
            eye,
            target: Vec3::new(subject.x, eye.y - self.offset.y, subject.z),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eye_keeps_offset_in_plane_and_fixed_height() {
        let rig = CameraRig::default();

        let low = rig.follow(&Vec3::new(10.0, 0.0, -5.0));
        let high = rig.follow(&Vec3::new(10.0, 4.0, -5.0));

        assert_eq!(low.eye, Vec3::new(40.0, 30.0, 25.0));
        assert_eq!(low, high);
        assert_eq!(low.target, Vec3::new(10.0, 0.0, -5.0));
    }
}
