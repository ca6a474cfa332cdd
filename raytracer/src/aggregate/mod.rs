pub mod shapelist;

pub use shapelist::ShapeList;

use crate::{ray::Ray, shape::FullIntersectionResult};

/// A collection of shapes that can be intersected as a whole.
pub trait Aggregate {
    /// Nearest intersection among all contained shapes. Reducing by minimum
    /// `t` is the aggregate's job, never the shapes'.
    fn first_hit(&self, ray: Ray) -> FullIntersectionResult;
}
