use glam::Vec3;

use crate::{
    math::{float::FloatAsExt, point::Point},
    ray::Ray,
};

/// Direction components closer to zero than this are treated as parallel to
/// the slab planes of their axis.
const DIR_EPSILON: f32 = 1e-8;

/// Axis Aligned Bounding Box
///
/// Corners are normalized at construction so that `min` is component-wise
/// smaller than `max`, whatever order the corners were given in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Build a box from two opposite corners, given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            min: Point(a.vec().min(b.vec())),
            max: Point(a.vec().max(b.vec())),
        }
    }

    pub fn min(&self) -> Point {
        self.min
    }

    pub fn max(&self) -> Point {
        self.max
    }

    /// Diagonal from the min corner to the max corner.
    pub fn diag(&self) -> Vec3 {
        self.max - self.min
    }

    /// Geometric center of the box.
    pub fn centroid(&self) -> Point {
        self.min + 0.5 * self.diag()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.vec().cmpge(self.min.vec()).all() && p.vec().cmple(self.max.vec()).all()
    }

    /// Clip `ray` against the box with the slab method.
    ///
    /// Returns the entering and exiting parameters, or `None` if the ray
    /// misses. The interval is not checked against the ray's own range; a ray
    /// whose origin is inside the box gets a negative entering parameter.
    pub fn ray_intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        let origin = ray.origin.vec().to_array();
        let direction = ray.direction.to_array();
        let min = self.min.vec().to_array();
        let max = self.max.vec().to_array();

        let mut t_enter = f32::NEG_INFINITY;
        let mut t_exit = f32::INFINITY;
        for axis in 0..3 {
            let Some(d) = direction[axis].into_non_zero(DIR_EPSILON) else {
                // Parallel to this axis's slab: either the origin lies inside
                // it and the axis imposes no constraint, or the ray misses
                // outright
                if origin[axis] < min[axis] || origin[axis] > max[axis] {
                    return None;
                }
                continue;
            };

            let t_low = (min[axis] - origin[axis]) / d;
            let t_high = (max[axis] - origin[axis]) / d;
            // A negative direction component crosses the max plane first
            let (t_low, t_high) = if t_low <= t_high {
                (t_low, t_high)
            } else {
                (t_high, t_low)
            };

            t_enter = f32::max(t_enter, t_low);
            t_exit = f32::min(t_exit, t_high);
            if t_enter > t_exit {
                return None;
            }
        }

        Some((t_enter, t_exit))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{math::point::Point, ray::Ray};

    use super::Bounds;

    const EPS: f32 = 1e-5;

    fn unit_bounds() -> Bounds {
        Bounds::from_corners(Point::new(-1., -1., -1.), Point::new(1., 1., 1.))
    }

    #[test]
    fn corners_are_normalized() {
        let reference = unit_bounds();
        let swapped = Bounds::from_corners(Point::new(1., 1., 1.), Point::new(-1., -1., -1.));
        let mixed = Bounds::from_corners(Point::new(1., -1., 1.), Point::new(-1., 1., -1.));
        assert_eq!(reference, swapped);
        assert_eq!(reference, mixed);
    }

    #[test]
    fn centroid_is_the_midpoint() {
        let bounds = Bounds::from_corners(Point::new(0., 0., 0.), Point::new(2., 4., 6.));
        assert_eq!(bounds.centroid(), Point::new(1., 2., 3.));
    }

    #[test]
    fn contains_is_inclusive() {
        let bounds = unit_bounds();
        assert!(bounds.contains(Point::ORIGIN));
        assert!(bounds.contains(Point::new(1., 1., 1.)));
        assert!(!bounds.contains(Point::new(1.1, 0., 0.)));
    }

    #[test]
    fn frontal_ray_interval() {
        let bounds = unit_bounds();
        let ray = Ray::new(Point::new(0., 0., -5.), Vec3::Z);
        let (t_enter, t_exit) = bounds.ray_intersect(&ray).unwrap();
        assert!((t_enter - 4.).abs() < EPS);
        assert!((t_exit - 6.).abs() < EPS);
    }

    #[test]
    fn origin_inside_gives_negative_entering_parameter() {
        let bounds = unit_bounds();
        let ray = Ray::new(Point::ORIGIN, Vec3::X);
        let (t_enter, t_exit) = bounds.ray_intersect(&ray).unwrap();
        assert!((t_enter + 1.).abs() < EPS);
        assert!((t_exit - 1.).abs() < EPS);
    }

    #[test]
    fn parallel_axis_constrains_by_origin_only() {
        let bounds = unit_bounds();
        // Origin inside the y and z slabs, direction parallel to both
        let inside = Ray::new(Point::new(-5., 0.5, -0.5), Vec3::X);
        assert!(bounds.ray_intersect(&inside).is_some());
        // Origin above the y slab, no other axis can save the ray
        let outside = Ray::new(Point::new(-5., 2., 0.), Vec3::X);
        assert!(bounds.ray_intersect(&outside).is_none());
    }

    #[test]
    fn sideways_miss() {
        let bounds = unit_bounds();
        let ray = Ray::new(Point::new(0., 5., -5.), Vec3::Z);
        assert!(bounds.ray_intersect(&ray).is_none());
    }
}
