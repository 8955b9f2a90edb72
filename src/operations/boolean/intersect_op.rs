use crate::tree::{CsgNode, CsgSolid};

use super::select::BooleanOp;

/// Computes the boolean intersection of two solids.
pub struct Intersect<'a> {
    solid_a: &'a CsgSolid,
    solid_b: &'a CsgSolid,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation.
    #[must_use]
    pub fn new(solid_a: &'a CsgSolid, solid_b: &'a CsgSolid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the operation, returning the solid `a ∩ b`.
    ///
    /// Both operands are shared, not copied.
    #[must_use]
    pub fn execute(&self) -> CsgSolid {
        tracing::trace!(op = "intersect", "boolean");
        CsgSolid::from_node(CsgNode::Boolean {
            op: BooleanOp::Intersect,
            left: self.solid_a.clone(),
            right: self.solid_b.clone(),
        })
    }
}
