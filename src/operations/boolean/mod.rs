mod classify;
mod intersect_op;
mod select;
mod subtract;
mod union;

pub use classify::{classify_point_in_solid, PointClassification};
pub use intersect_op::Intersect;
pub use select::BooleanOp;
pub use subtract::Subtract;
pub use union::Union;
