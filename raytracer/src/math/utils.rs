use std::f32::consts::{PI, TAU};

use glam::Vec3;

use crate::shape::Uv;

/// Spherical parameterization of a unit `direction`.
///
/// `u` wraps around the Y axis, `v` goes from 0 at the north pole to 1 at the
/// south pole.
pub fn sphere_uv_from_direction(direction: Vec3) -> Uv {
    let h = direction.dot(Vec3::Y).clamp(-1.0, 1.0);
    let u = 0.5 + f32::atan2(direction.x, direction.z) / TAU;
    let v = f32::acos(h) / PI;

    [u, v]
}
