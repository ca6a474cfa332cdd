pub mod bounds;
pub mod float;
pub mod point;
pub mod utils;
pub mod vec;
