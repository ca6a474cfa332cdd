use image::Rgb;

use crate::math::vec::{RgbAsVec3Ext, Vec3, Vec3AsRgbExt};

/// Linear RGB, one `f32` per channel, nominally in `[0, 1]`.
pub type Color = Rgb<f32>;

pub const WHITE: Color = Rgb([1.0, 1.0, 1.0]);
pub const BLACK: Color = Rgb([0.0, 0.0, 0.0]);
pub const RED: Color = Rgb([1.0, 0.0, 0.0]);
pub const GREEN: Color = Rgb([0.0, 1.0, 0.0]);
pub const BLUE: Color = Rgb([0.0, 0.0, 1.0]);

pub fn lerp(t: f32, from: Color, to: Color) -> Color {
    from.vec().lerp(to.vec(), t).rgb()
}

pub fn clamp(color: Color) -> Color {
    color.vec().clamp(Vec3::ZERO, Vec3::ONE).rgb()
}

pub fn gray(c: f32) -> Color {
    Rgb([c, c, c])
}
