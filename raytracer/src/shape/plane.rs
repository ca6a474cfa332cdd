use glam::Vec3;

use crate::{
    color::Color,
    math::{float::FloatAsExt, point::Point},
    ray::Ray,
};

use super::{
    local_info, IntersectionResult, MinIntersectionResult, RayIntersection, Shape, SurfaceData,
};

/// A ray grazing along the plane is treated as a miss.
const PARALLEL_EPSILON: f32 = 1e-8;

/// An infinite plane through `origin` with unit `normal`.
pub struct Plane {
    pub origin: Point,
    pub normal: Vec3,
    pub color: Color,
}

impl Shape for Plane {
    fn intersect(&self, ray: Ray) -> MinIntersectionResult {
        let Some(denom) = ray.direction.dot(self.normal).into_non_zero(PARALLEL_EPSILON) else {
            return IntersectionResult::NoIntersection;
        };

        let t = (self.origin - ray.origin).dot(self.normal) / denom;
        if !ray.range().contains(&t) {
            return IntersectionResult::NoIntersection;
        }

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos: ray.at(t) },
        })
    }

    fn surface_data(&self, p: Point) -> SurfaceData {
        // An infinite plane has no extents to remap against, so uv is the
        // unbounded position in an arbitrary but fixed tangent frame
        let (tangent, bitangent) = self.normal.any_orthonormal_pair();
        let rel = p - self.origin;

        SurfaceData {
            normal: self.normal,
            uv: [rel.dot(tangent), rel.dot(bitangent)],
        }
    }

    fn color(&self) -> Color {
        self.color
    }
}
