use crate::tree::{CsgNode, CsgSolid};

use super::select::BooleanOp;

/// Computes the boolean union of two solids.
pub struct Union<'a> {
    solid_a: &'a CsgSolid,
    solid_b: &'a CsgSolid,
}

impl<'a> Union<'a> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(solid_a: &'a CsgSolid, solid_b: &'a CsgSolid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the operation, returning the solid `a ∪ b`.
    ///
    /// Both operands are shared, not copied.
    #[must_use]
    pub fn execute(&self) -> CsgSolid {
        tracing::trace!(op = "union", "boolean");
        CsgSolid::from_node(CsgNode::Boolean {
            op: BooleanOp::Union,
            left: self.solid_a.clone(),
            right: self.solid_b.clone(),
        })
    }
}
