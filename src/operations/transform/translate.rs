use crate::error::{GeometryError, Result};
use crate::math::{non_finite_axis, Matrix4, Vector3};
use crate::tree::CsgSolid;

use super::GeneralTransform;

/// Translates a solid by a displacement vector.
pub struct Translate<'a> {
    solid: &'a CsgSolid,
    displacement: Vector3,
}

impl<'a> Translate<'a> {
    /// Creates a new `Translate` operation.
    #[must_use]
    pub fn new(solid: &'a CsgSolid, displacement: Vector3) -> Self {
        Self {
            solid,
            displacement,
        }
    }

    /// Executes the translation, returning a new solid.
    ///
    /// # Errors
    ///
    /// Returns an error if the displacement has a non-finite component.
    pub fn execute(&self) -> Result<CsgSolid> {
        if let Some(axis) = non_finite_axis(&self.displacement) {
            return Err(GeometryError::NonFinite(axis).into());
        }
        tracing::trace!(displacement = ?self.displacement, "translate");
        GeneralTransform::new(self.solid, Matrix4::new_translation(&self.displacement)).execute()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::BoundingBox;

    #[test]
    fn translation_shifts_bounds() {
        let cube = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute()
            .unwrap();
        let moved = Translate::new(&cube, Vector3::new(5.0, 3.0, 2.0))
            .execute()
            .unwrap();

        let aabb = BoundingBox::new(&moved).execute().unwrap();
        assert!((aabb.min - Point3::new(5.0, 3.0, 2.0)).norm() < 1e-10);
        assert!((aabb.max - Point3::new(6.0, 4.0, 3.0)).norm() < 1e-10);
    }

    #[test]
    fn infinite_displacement_is_rejected() {
        let cube = MakeBox::new(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
            .execute()
            .unwrap();
        let result = Translate::new(&cube, Vector3::new(0.0, 0.0, f64::INFINITY)).execute();
        assert!(matches!(
            result,
            Err(crate::Error::Geometry(GeometryError::NonFinite("z")))
        ));
    }
}
