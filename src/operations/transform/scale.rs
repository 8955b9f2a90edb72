use crate::error::{GeometryError, Result};
use crate::math::{non_finite_axis, Matrix4, Point3, Vector3};
use crate::tree::CsgSolid;

use super::GeneralTransform;

/// Scales a solid per axis from a center point.
pub struct Scale<'a> {
    solid: &'a CsgSolid,
    center: Point3,
    factors: Vector3,
}

impl<'a> Scale<'a> {
    /// Creates a new `Scale` operation about the world origin.
    #[must_use]
    pub fn new(solid: &'a CsgSolid, factors: Vector3) -> Self {
        Self {
            solid,
            center: Point3::origin(),
            factors,
        }
    }

    /// Sets the fixed point of the scaling.
    #[must_use]
    pub fn about(mut self, center: Point3) -> Self {
        self.center = center;
        self
    }

    /// Executes the scaling, returning a new solid.
    ///
    /// Zero and negative factors are passed through; a zero factor yields a
    /// flattened solid whose point classification fails later.
    ///
    /// # Errors
    ///
    /// Returns an error if a factor is non-finite.
    pub fn execute(&self) -> Result<CsgSolid> {
        if let Some(axis) = non_finite_axis(&self.factors) {
            return Err(GeometryError::NonFinite(axis).into());
        }
        tracing::trace!(factors = ?self.factors, "scale");

        let t_neg = Matrix4::new_translation(&(-self.center.coords));
        let scale = Matrix4::new_nonuniform_scaling(&self.factors);
        let t_pos = Matrix4::new_translation(&self.center.coords);
        GeneralTransform::new(self.solid, t_pos * scale * t_neg).execute()
    }
}
