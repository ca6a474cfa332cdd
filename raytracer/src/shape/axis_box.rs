use glam::Vec3;

use crate::{
    color::Color,
    math::{bounds::Bounds, point::Point},
    ray::Ray,
};

use super::{
    local_info, IntersectionResult, MinIntersectionResult, RayIntersection, Shape, SurfaceData,
};

/// Tolerance used to decide which face a surface point lies on. Points coming
/// out of the intersection arithmetic are never exactly on a bound plane.
const FACE_EPSILON: f32 = 1e-4;

/// An axis-aligned box.
///
/// Corners may be given in any order, they are normalized per axis at
/// construction.
pub struct AxisBox {
    pub bounds: Bounds,
    pub color: Color,
}

impl AxisBox {
    pub fn new(a: Point, b: Point, color: Color) -> Self {
        Self {
            bounds: Bounds::from_corners(a, b),
            color,
        }
    }

    /// Face of the box `p` lies on, as `(axis, side)` where side is -1.0 for
    /// the min face and 1.0 for the max face.
    ///
    /// Faces are checked in x-min, x-max, y-min, ... order and the first
    /// match wins, so a point near an edge or a corner resolves the same way
    /// every time. A point that is not within tolerance of any face (a
    /// violated precondition) falls back to the nearest face.
    fn face_of(&self, p: Point) -> (usize, f32) {
        let min = self.bounds.min().vec().to_array();
        let max = self.bounds.max().vec().to_array();
        let p = p.vec().to_array();

        let mut nearest = (0, 1.0, f32::INFINITY);
        for axis in 0..3 {
            let d_min = (p[axis] - min[axis]).abs();
            let d_max = (p[axis] - max[axis]).abs();
            if d_min <= FACE_EPSILON {
                return (axis, -1.0);
            }
            if d_max <= FACE_EPSILON {
                return (axis, 1.0);
            }
            if d_min < nearest.2 {
                nearest = (axis, -1.0, d_min);
            }
            if d_max < nearest.2 {
                nearest = (axis, 1.0, d_max);
            }
        }

        crate::utils::log_once::warn_once!(
            "surface data requested for a point away from the box surface"
        );
        (nearest.0, nearest.1)
    }
}

impl Shape for AxisBox {
    fn intersect(&self, ray: Ray) -> MinIntersectionResult {
        crate::counter!("AxisBox intersection tests");

        let Some((t_enter, t_exit)) = self.bounds.ray_intersect(&ray) else {
            return IntersectionResult::NoIntersection;
        };

        let range = ray.range();
        let t = if range.contains(&t_enter) {
            t_enter
        } else if range.contains(&t_exit) {
            // The origin is inside the box, report the exiting face
            t_exit
        } else {
            return IntersectionResult::NoIntersection;
        };
        crate::counter!("AxisBox intersections");

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos: ray.at(t) },
        })
    }

    fn surface_data(&self, p: Point) -> SurfaceData {
        let (axis, side) = self.face_of(p);

        let mut normal = [0.0; 3];
        normal[axis] = side;

        // The two axes spanning the matched face parameterize it, remapped to
        // [0, 1] by the box extents
        let min = self.bounds.min().vec().to_array();
        let diag = self.bounds.diag().to_array();
        let p = p.vec().to_array();
        let u_axis = (axis + 1) % 3;
        let v_axis = (axis + 2) % 3;

        SurfaceData {
            normal: Vec3::from_array(normal),
            uv: [
                (p[u_axis] - min[u_axis]) / diag[u_axis],
                (p[v_axis] - min[v_axis]) / diag[v_axis],
            ],
        }
    }

    fn color(&self) -> Color {
        self.color
    }
}
