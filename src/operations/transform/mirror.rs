use crate::constants::EPSILON;
use crate::error::{GeometryError, Result};
use crate::math::{non_finite_axis, Matrix4, Point3, Vector3};
use crate::tree::CsgSolid;

use super::GeneralTransform;

/// Mirrors a solid across a plane defined by a point and normal.
pub struct Mirror<'a> {
    solid: &'a CsgSolid,
    plane_origin: Point3,
    plane_normal: Vector3,
}

impl<'a> Mirror<'a> {
    /// Creates a new `Mirror` operation.
    #[must_use]
    pub fn new(solid: &'a CsgSolid, plane_origin: Point3, plane_normal: Vector3) -> Self {
        Self {
            solid,
            plane_origin,
            plane_normal,
        }
    }

    /// Executes the mirror, returning a new solid.
    ///
    /// The normal does not need to be unit length.
    ///
    /// # Errors
    ///
    /// Returns an error if the normal is zero-length or has a non-finite
    /// component.
    pub fn execute(&self) -> Result<CsgSolid> {
        if let Some(axis) = non_finite_axis(&self.plane_normal) {
            return Err(GeometryError::NonFinite(axis).into());
        }
        let len = self.plane_normal.norm();
        if len < EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        let n = self.plane_normal / len;
        tracing::trace!(normal = ?n, "mirror");

        // Householder reflection: I - 2 n n^T
        let reflect = (nalgebra::Matrix3::identity() - 2.0 * n * n.transpose()).to_homogeneous();

        let t_neg = Matrix4::new_translation(&(-self.plane_origin.coords));
        let t_pos = Matrix4::new_translation(&self.plane_origin.coords);
        GeneralTransform::new(self.solid, t_pos * reflect * t_neg).execute()
    }
}
