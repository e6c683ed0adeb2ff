//! Conversions between Bevy's glam types and the nalgebra types used by `garden_shared`.

use bevy::math::Vec3;
use nalgebra::{Point3, Vector3};

#[inline]
pub fn to_na(v: Vec3) -> Vector3<f32> {
    Vector3::new(v.x, v.y, v.z)
}

#[inline]
pub fn to_na_point(v: Vec3) -> Point3<f32> {
    Point3::new(v.x, v.y, v.z)
}

#[inline]
pub fn from_na(v: &Vector3<f32>) -> Vec3 {
    Vec3::new(v.x, v.y, v.z)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axes_are_preserved() {
        let v = Vec3::new(1.5, -2.0, 32.25);
        assert_eq!(from_na(&to_na(v)), v);
        assert_eq!(to_na_point(v).coords, to_na(v));
    }
}
