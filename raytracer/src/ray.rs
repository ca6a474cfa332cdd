use std::ops::{Range, RangeInclusive};

use glam::Vec3;

use crate::math::point::Point;

/// Parameters below this are considered behind the ray origin, so that a ray
/// starting on a surface does not immediately intersect it again.
pub const T_MIN: f32 = 1e-3;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Point,
    pub direction: Vec3,
    pub bounds: (f32, f32),
}

impl Ray {
    /// `direction` must be non-zero, it is normalized here.
    pub fn new(origin: Point, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (T_MIN, f32::INFINITY),
        }
    }

    pub fn new_with_range(origin: Point, direction: Vec3, range: Range<f32>) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
            bounds: (range.start, range.end),
        }
    }

    pub fn range(&self) -> RangeInclusive<f32> {
        self.bounds.0..=self.bounds.1
    }

    pub fn at(&self, t: f32) -> Point {
        if !self.range().contains(&t) {
            crate::utils::log_once::error_once!("a ray has been accessed out of bounds");
        }

        self.at_unchecked(t)
    }

    pub fn at_unchecked(&self, t: f32) -> Point {
        self.origin + t * self.direction
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::math::point::Point;

    use super::Ray;

    #[test]
    fn evaluation_walks_along_the_direction() {
        let eps = 0.01;
        let ray = Ray::new(Point::new(1., 0., 0.), Vec3::new(-1., 1., 0.));

        assert!(
            ray.at_unchecked(0.0)
                .vec()
                .distance_squared(ray.origin.vec())
                < eps
        );
        assert!(
            ray.at(1.0)
                .vec()
                .distance_squared((ray.origin + ray.direction).vec())
                < eps
        );
    }

    #[test]
    fn default_range_excludes_the_origin() {
        let ray = Ray::new(Point::ORIGIN, Vec3::X);
        assert!(!ray.range().contains(&0.0));
        assert!(ray.range().contains(&1e-2));
        assert!(ray.range().contains(&f32::INFINITY));
    }
}
