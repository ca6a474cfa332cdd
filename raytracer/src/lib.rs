//! Ray-primitive intersection kernel.
//!
//! Shapes report where a ray strikes them and what the surface looks like at
//! that point; assembling rays and turning hits into pixels is the renderer's
//! job (see the `simple-runner` crate).

pub mod aggregate;
pub mod camera;
pub mod color;
pub mod math;
pub mod ray;
pub mod scene;
pub mod shape;
pub mod utils;
