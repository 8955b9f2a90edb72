use crate::config::EngineConfig;
use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::tree::{CsgNode, CsgSolid, Primitive};

/// Creates a box solid from two corner points.
pub struct MakeBox {
    min_corner: Point3,
    max_corner: Point3,
    config: EngineConfig,
}

impl MakeBox {
    /// Creates a new `MakeBox` operation.
    #[must_use]
    pub fn new(min_corner: Point3, max_corner: Point3) -> Self {
        Self {
            min_corner,
            max_corner,
            config: EngineConfig::default(),
        }
    }

    /// Creates a box of the given size with one corner at the origin.
    #[must_use]
    pub fn with_size(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::origin(), Point3::new(x, y, z))
    }

    /// Uses the tolerance of `config` as the smallest accepted extent.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// Executes the operation, creating the box.
    ///
    /// # Errors
    ///
    /// Returns an error if any extent is not finite or not larger than the
    /// tolerance.
    pub fn execute(&self) -> Result<CsgSolid> {
        let extent = self.max_corner - self.min_corner;
        if extent.iter().any(|e| !e.is_finite() || *e <= self.config.tolerance) {
            return Err(OperationError::InvalidInput(format!(
                "box extents must be positive, got {extent:?}"
            ))
            .into());
        }

        Ok(CsgSolid::from_node(CsgNode::Primitive(Primitive::Box {
            min: self.min_corner,
            max: self.max_corner,
        })))
    }
}
