use crate::error::{GeometryError, Result};
use crate::math::Matrix4;
use crate::tree::{CsgNode, CsgSolid};

/// Applies an arbitrary 4x4 transformation matrix to a solid.
pub struct GeneralTransform<'a> {
    solid: &'a CsgSolid,
    matrix: Matrix4,
}

impl<'a> GeneralTransform<'a> {
    /// Creates a new `GeneralTransform` operation.
    #[must_use]
    pub fn new(solid: &'a CsgSolid, matrix: Matrix4) -> Self {
        Self { solid, matrix }
    }

    /// Executes the transformation, returning a new solid.
    ///
    /// If the input is itself a transform node, the two matrices are
    /// composed into a single node so chained transforms keep the tree flat.
    /// The matrix is not required to be invertible.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix contains NaN or infinite entries.
    pub fn execute(&self) -> Result<CsgSolid> {
        if self.matrix.iter().any(|v| !v.is_finite()) {
            return Err(GeometryError::NonFinite("matrix").into());
        }

        let node = match self.solid.node() {
            CsgNode::Transform { matrix, child } => CsgNode::Transform {
                matrix: self.matrix * matrix,
                child: child.clone(),
            },
            _ => CsgNode::Transform {
                matrix: self.matrix,
                child: self.solid.clone(),
            },
        };
        Ok(CsgSolid::from_node(node))
    }
}
