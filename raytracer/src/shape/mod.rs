//! The objects that are meant to be rendered.
//!
//! Every shape answers the same two questions: where does a ray strike me,
//! and what does my surface look like at that point. The renderer never needs
//! to know which concrete shape it is tracing against, so new variants only
//! have to implement [Shape].
//!
//! All shape variants are reexported below.

pub mod axis_box;
pub mod plane;
pub mod sphere;

pub use axis_box::AxisBox;
pub use plane::Plane;
pub use sphere::Sphere;

use glam::Vec3;

use crate::{color::Color, math::point::Point, ray::Ray};

/// Texture-space coordinates of a point on a surface.
pub type Uv = [f32; 2];

/// Outward unit normal and texture coordinates at a point on a shape.
#[derive(Debug, Clone, Copy)]
pub struct SurfaceData {
    pub normal: Vec3,
    pub uv: Uv,
}

/// An abstracted shape to be rendered by raytracing.
pub trait Shape: Send + Sync {
    /// Check whether `ray` strikes the shape. Reports the smallest parameter
    /// within the ray's range, so a shape entirely behind the origin is a
    /// miss. A miss is a normal outcome, not an error.
    ///
    /// Must not mutate the shape; queries may run concurrently.
    fn intersect(&self, ray: Ray) -> MinIntersectionResult;

    /// Local surface data at `p`.
    ///
    /// `p` must be a point obtained from a successful [Shape::intersect] on
    /// the same shape; for any other point the result is meaningless.
    fn surface_data(&self, p: Point) -> SurfaceData;

    /// The intrinsic color of the shape.
    fn color(&self) -> Color;

    /// [Shape::intersect] and [Shape::surface_data] in one query.
    fn intersection_full(&self, ray: Ray) -> FullIntersectionResult {
        match self.intersect(ray) {
            IntersectionResult::Intersection(RayIntersection {
                t,
                local_info: local_info::Minimum { pos },
            }) => {
                let SurfaceData { normal, uv } = self.surface_data(pos);
                IntersectionResult::Intersection(RayIntersection {
                    t,
                    local_info: local_info::Full {
                        pos,
                        normal,
                        uv,
                        color: self.color(),
                    },
                })
            }
            IntersectionResult::NoIntersection => IntersectionResult::NoIntersection,
        }
    }
}

pub mod local_info {
    use glam::Vec3;

    use crate::{color::Color, math::point::Point};

    use super::Uv;

    /// Everything the renderer needs to shade an intersection.
    #[derive(Debug)]
    pub struct Full {
        pub pos: Point,
        pub normal: Vec3,
        pub uv: Uv,
        pub color: Color,
    }

    /// Only the geometrical information needed to locate the point.
    #[derive(Debug)]
    pub struct Minimum {
        pub pos: Point,
    }
}

/// Holds local information and the parameter of a collision between a ray and
/// a shape.
#[derive(Debug)]
pub struct RayIntersection<LocalInfo> {
    pub t: f32,
    pub local_info: LocalInfo,
}

/// A `Result`-like type that takes care of intersection data.
#[derive(Debug)]
pub enum IntersectionResult<LocalInfo> {
    Intersection(RayIntersection<LocalInfo>),
    NoIntersection,
}

impl<T> IntersectionResult<T> {
    pub fn is_intersection(&self) -> bool {
        matches!(self, Self::Intersection(_))
    }

    pub fn unwrap(self) -> RayIntersection<T> {
        match self {
            Self::Intersection(record) => record,
            _ => panic!("unwrapped a NoIntersection"),
        }
    }

    /// Nearest of two results. Associative and commutative, so reducing a
    /// whole scene with it is order-independent.
    pub fn min(self, other: Self) -> Self {
        let Self::Intersection(RayIntersection { t: t1, .. }) = self else {
            return other;
        };
        let Self::Intersection(RayIntersection { t: t2, .. }) = other else {
            return self;
        };

        if t1 < t2 {
            self
        } else {
            other
        }
    }
}

pub type MinIntersectionResult = IntersectionResult<local_info::Minimum>;
pub type FullIntersectionResult = IntersectionResult<local_info::Full>;
