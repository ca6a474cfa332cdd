use crate::{
    color::Color,
    math::{point::Point, utils::sphere_uv_from_direction},
    ray::Ray,
};

use super::{
    local_info, IntersectionResult, MinIntersectionResult, RayIntersection, Shape, SurfaceData,
};

/// A simple sphere shape.
///
/// Normals point outwards for a positive `radius` and are reversed if
/// `radius` is negative
pub struct Sphere {
    pub center: Point,
    pub radius: f32,
    pub color: Color,
}

impl Shape for Sphere {
    fn intersect(&self, ray: Ray) -> MinIntersectionResult {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let b_half = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant_quarter = b_half * b_half - a * c;
        if discriminant_quarter <= 0.0 {
            return IntersectionResult::NoIntersection;
        }

        // Nearest root first, the far one only matters when the origin is
        // inside the sphere
        let sqrt_d = f32::sqrt(discriminant_quarter);
        let t_near = (-b_half - sqrt_d) / a;
        let t_far = (-b_half + sqrt_d) / a;

        let range = ray.range();
        let t = if range.contains(&t_near) {
            t_near
        } else if range.contains(&t_far) {
            t_far
        } else {
            return IntersectionResult::NoIntersection;
        };

        IntersectionResult::Intersection(RayIntersection {
            t,
            local_info: local_info::Minimum { pos: ray.at(t) },
        })
    }

    fn surface_data(&self, p: Point) -> SurfaceData {
        let normal = self.radius.signum() * (p - self.center).normalize();
        SurfaceData {
            normal,
            uv: sphere_uv_from_direction(normal),
        }
    }

    fn color(&self) -> Color {
        self.color
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color,
        math::point::Point,
        ray::Ray,
        shape::{Shape, SurfaceData},
    };

    use super::Sphere;

    const EPS: f32 = 1e-4;

    fn sphere() -> Sphere {
        Sphere {
            center: Point::new(0., 0., -5.),
            radius: 1.,
            color: color::GREEN,
        }
    }

    #[test]
    fn frontal_hit() {
        let s = sphere();
        let ray = Ray::new(Point::ORIGIN, Vec3::NEG_Z);

        let record = s.intersect(ray).unwrap();
        assert!((record.t - 4.).abs() < EPS);

        let SurfaceData { normal, uv } = s.surface_data(record.local_info.pos);
        assert!(normal.distance(Vec3::Z) < EPS);
        assert!((uv[0] - 0.5).abs() < EPS);
        assert!((uv[1] - 0.5).abs() < EPS);
    }

    #[test]
    fn pointing_away_misses() {
        let s = sphere();
        let ray = Ray::new(Point::ORIGIN, Vec3::Z);
        assert!(!s.intersect(ray).is_intersection());
    }

    #[test]
    fn origin_inside_reports_the_far_root() {
        let s = Sphere {
            center: Point::ORIGIN,
            radius: 1.,
            color: color::GREEN,
        };
        let record = s.intersect(Ray::new(Point::ORIGIN, Vec3::X)).unwrap();
        assert!((record.t - 1.).abs() < EPS);

        let SurfaceData { normal, .. } = s.surface_data(record.local_info.pos);
        assert!(normal.distance(Vec3::X) < EPS);
    }

    #[test]
    fn negative_radius_reverses_the_normal() {
        let s = Sphere {
            center: Point::ORIGIN,
            radius: -1.,
            color: color::GREEN,
        };
        let SurfaceData { normal, .. } = s.surface_data(Point::new(1., 0., 0.));
        assert!(normal.distance(Vec3::NEG_X) < EPS);
    }
}
