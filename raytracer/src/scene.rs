use crate::{aggregate::ShapeList, shape::Shape};

/// Everything to be rendered. Caller-owned and immutable during a trace
/// pass, there is no ambient global object list.
#[derive(Default)]
pub struct Scene {
    pub objects: ShapeList,
}

impl Scene {
    /// Insert an object in the scene
    pub fn insert_object<T: Shape + 'static>(&mut self, object: T) {
        self.objects.0.push(Box::new(object))
    }
}
