use crate::tree::{CsgNode, CsgSolid};

use super::select::BooleanOp;

/// Subtracts one solid from another.
pub struct Subtract<'a> {
    solid_a: &'a CsgSolid,
    solid_b: &'a CsgSolid,
}

impl<'a> Subtract<'a> {
    /// Creates a new `Subtract` operation.
    #[must_use]
    pub fn new(solid_a: &'a CsgSolid, solid_b: &'a CsgSolid) -> Self {
        Self { solid_a, solid_b }
    }

    /// Executes the operation, returning the solid `a − b`.
    ///
    /// Both operands are shared, not copied.
    #[must_use]
    pub fn execute(&self) -> CsgSolid {
        tracing::trace!(op = "subtract", "boolean");
        CsgSolid::from_node(CsgNode::Boolean {
            op: BooleanOp::Subtract,
            left: self.solid_a.clone(),
            right: self.solid_b.clone(),
        })
    }
}
