use glam::Vec3;

use crate::{math::point::Point, ray::Ray};

/// On-screen pixel position, `(0, 0)` is the top left corner.
#[derive(Debug, Clone, Copy)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

/// Position on the viewport, both coordinates in `[-1, 1]`, y pointing up.
#[derive(Debug, Clone, Copy)]
pub struct ViewportCoord {
    pub vx: f32,
    pub vy: f32,
}

impl ViewportCoord {
    pub fn from_pixel_coord(camera: &Camera, coords: PixelCoord) -> Self {
        Self {
            vx: 2. * coords.x as f32 / (camera.width as f32 - 1.) - 1.,
            vy: 1. - 2. * coords.y as f32 / (camera.height as f32 - 1.),
        }
    }
}

/// An axis-aligned pinhole camera looking toward -Z.
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub viewport_width: f32,
    pub viewport_height: f32,
    pub focal_length: f32,
    pub origin: Point,
}

impl Camera {
    pub fn new(width: u32, height: u32, vfov: f32, focal_length: f32, origin: Point) -> Self {
        let h = f32::tan(vfov / 2.);
        let aspect_ratio = width as f32 / height as f32;

        Self {
            width,
            height,
            viewport_height: focal_length * h, // From center to top
            viewport_width: focal_length * h * aspect_ratio, // From center to the side
            focal_length,
            origin,
        }
    }

    pub fn ray(&self, vx: f32, vy: f32) -> Ray {
        let direction = -self.focal_length * Vec3::Z
            + vx * self.viewport_width * Vec3::X
            + vy * self.viewport_height * Vec3::Y;
        Ray::new(self.origin, direction)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::math::point::Point;

    use super::{Camera, PixelCoord, ViewportCoord};

    const EPS: f32 = 1e-4;

    #[test]
    fn center_of_the_viewport_looks_forward() {
        let camera = Camera::new(100, 100, f32::to_radians(90.), 1., Point::ORIGIN);
        let ray = camera.ray(0., 0.);
        assert!(ray.direction.distance(Vec3::NEG_Z) < EPS);
    }

    #[test]
    fn pixel_to_viewport_mapping() {
        let camera = Camera::new(101, 101, f32::to_radians(90.), 1., Point::ORIGIN);

        let center = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 50, y: 50 });
        assert!(center.vx.abs() < EPS);
        assert!(center.vy.abs() < EPS);

        let top_left = ViewportCoord::from_pixel_coord(&camera, PixelCoord { x: 0, y: 0 });
        assert!((top_left.vx + 1.).abs() < EPS);
        assert!((top_left.vy - 1.).abs() < EPS);
    }
}
