use crate::{
    ray::Ray,
    shape::{FullIntersectionResult, IntersectionResult, Shape},
};

use super::Aggregate;

/// A flat list of shapes, intersected one by one. Fine for small scenes, an
/// acceleration structure would slot in here for big ones.
#[derive(Default)]
pub struct ShapeList(pub Vec<Box<dyn Shape>>);

impl Aggregate for ShapeList {
    fn first_hit(&self, ray: Ray) -> FullIntersectionResult {
        crate::timed_scope_accumulate!("ShapeList::first_hit", || {
            crate::counter!("Rays cast");

            let mut ray = ray;
            let mut res = IntersectionResult::NoIntersection;
            for shape in self.0.iter() {
                if ray.range().is_empty() {
                    break;
                }

                if let IntersectionResult::Intersection(record) = shape.intersection_full(ray) {
                    // Later shapes only compete for a closer hit
                    ray.bounds.1 = record.t;
                    res = IntersectionResult::Intersection(record);
                }
            }
            res
        })
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use crate::{
        color,
        math::point::Point,
        ray::Ray,
        shape::{AxisBox, Sphere},
    };

    use super::{Aggregate, ShapeList};

    #[test]
    fn empty_list_misses() {
        let list = ShapeList::default();
        let ray = Ray::new(Point::ORIGIN, Vec3::Z);
        assert!(!list.first_hit(ray).is_intersection());
    }

    #[test]
    fn nearest_shape_wins() {
        let mut list = ShapeList::default();
        list.0.push(Box::new(AxisBox::new(
            Point::new(-1., -1., 9.),
            Point::new(1., 1., 11.),
            color::RED,
        )));
        list.0.push(Box::new(Sphere {
            center: Point::new(0., 0., 5.),
            radius: 1.,
            color: color::GREEN,
        }));

        let record = list.first_hit(Ray::new(Point::ORIGIN, Vec3::Z)).unwrap();
        assert_eq!(record.local_info.color, color::GREEN);
        assert!((record.t - 4.).abs() < 1e-4);
    }

    #[test]
    fn occluded_shape_still_found_when_in_front() {
        let mut list = ShapeList::default();
        list.0.push(Box::new(Sphere {
            center: Point::new(0., 0., 5.),
            radius: 1.,
            color: color::GREEN,
        }));
        list.0.push(Box::new(AxisBox::new(
            Point::new(-1., -1., 1.),
            Point::new(1., 1., 2.),
            color::RED,
        )));

        let record = list.first_hit(Ray::new(Point::ORIGIN, Vec3::Z)).unwrap();
        assert_eq!(record.local_info.color, color::RED);
        assert!((record.t - 1.).abs() < 1e-4);
    }
}
