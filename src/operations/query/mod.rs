mod bounding_box;
mod classify;

pub use bounding_box::{Aabb, BoundingBox};
pub use classify::Classify;
