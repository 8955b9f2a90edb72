use crate::error::{GeometryError, Result};
use crate::math::{non_finite_axis, Matrix4, Point3, Vector3};
use crate::tree::CsgSolid;

use super::GeneralTransform;

enum Rotation {
    /// Angles in radians about X, Y and Z, applied in that order.
    Euler(Vector3),
    /// Angle in radians about an arbitrary axis.
    Axis {
        origin: Point3,
        direction: Vector3,
        angle: f64,
    },
}

/// Rotates a solid.
pub struct Rotate<'a> {
    solid: &'a CsgSolid,
    rotation: Rotation,
}

impl<'a> Rotate<'a> {
    /// Rotation by per-axis angles in radians.
    ///
    /// The X rotation is applied first, then Y, then Z.
    #[must_use]
    pub fn euler(solid: &'a CsgSolid, radians: Vector3) -> Self {
        Self {
            solid,
            rotation: Rotation::Euler(radians),
        }
    }

    /// Rotation by `angle` radians around the axis through `origin`.
    #[must_use]
    pub fn about_axis(
        solid: &'a CsgSolid,
        origin: Point3,
        direction: Vector3,
        angle: f64,
    ) -> Self {
        Self {
            solid,
            rotation: Rotation::Axis {
                origin,
                direction,
                angle,
            },
        }
    }

    /// Executes the rotation, returning a new solid.
    ///
    /// # Errors
    ///
    /// Returns an error if an angle is non-finite or the axis direction is
    /// zero-length.
    pub fn execute(&self) -> Result<CsgSolid> {
        let matrix = match &self.rotation {
            Rotation::Euler(radians) => {
                if let Some(axis) = non_finite_axis(radians) {
                    return Err(GeometryError::NonFinite(axis).into());
                }
                tracing::trace!(radians = ?radians, "rotate");
                rotation_matrix(&Vector3::z(), radians.z)
                    * rotation_matrix(&Vector3::y(), radians.y)
                    * rotation_matrix(&Vector3::x(), radians.x)
            }
            Rotation::Axis {
                origin,
                direction,
                angle,
            } => {
                if !angle.is_finite() {
                    return Err(GeometryError::NonFinite("angle").into());
                }
                let len = direction.norm();
                if len < crate::constants::EPSILON {
                    return Err(GeometryError::ZeroVector.into());
                }
                let axis = direction / len;
                tracing::trace!(axis = ?axis, angle, "rotate about axis");

                // Translate to origin, rotate, translate back
                let t_neg = Matrix4::new_translation(&(-origin.coords));
                let rot = rotation_matrix(&axis, *angle);
                let t_pos = Matrix4::new_translation(&origin.coords);
                t_pos * rot * t_neg
            }
        };

        GeneralTransform::new(self.solid, matrix).execute()
    }
}

/// Builds a 4x4 rotation matrix around a unit axis by an angle (Rodrigues).
#[allow(clippy::many_single_char_names)]
fn rotation_matrix(axis: &Vector3, angle: f64) -> Matrix4 {
    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;
    let (x, y, z) = (axis.x, axis.y, axis.z);

    #[allow(clippy::suspicious_operation_groupings)]
    Matrix4::new(
        t * x * x + c,     t * x * y - s * z, t * x * z + s * y, 0.0,
        t * x * y + s * z, t * y * y + c,     t * y * z - s * x, 0.0,
        t * x * z - s * y, t * y * z + s * x, t * z * z + c,     0.0,
        0.0,               0.0,               0.0,               1.0,
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::transform_point;
    use crate::operations::creation::MakeBox;
    use crate::operations::query::BoundingBox;
    use crate::tree::CsgNode;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn block() -> CsgSolid {
        MakeBox::new(p(1.0, 0.0, 0.0), p(2.0, 1.0, 1.0))
            .execute()
            .unwrap()
    }

    fn matrix_of(solid: &CsgSolid) -> Matrix4 {
        match solid.node() {
            CsgNode::Transform { matrix, .. } => *matrix,
            other => panic!("expected transform node, got {other:?}"),
        }
    }

    #[test]
    fn rotate_90_around_z() {
        let solid = Rotate::euler(&block(), Vector3::new(0.0, 0.0, FRAC_PI_2))
            .execute()
            .unwrap();

        // After 90° Z rotation: x ∈ [-1, 0], y ∈ [1, 2], z ∈ [0, 1]
        let aabb = BoundingBox::new(&solid).execute().unwrap();
        assert_relative_eq!(aabb.min, p(-1.0, 1.0, 0.0), epsilon = 1e-9);
        assert_relative_eq!(aabb.max, p(0.0, 2.0, 1.0), epsilon = 1e-9);
    }

    #[test]
    fn euler_applies_x_before_z() {
        let solid = Rotate::euler(&block(), Vector3::new(FRAC_PI_2, 0.0, FRAC_PI_2))
            .execute()
            .unwrap();
        // +Y -> (X turn) +Z -> (Z turn) +Z
        let moved = transform_point(&matrix_of(&solid), &p(0.0, 1.0, 0.0));
        assert_relative_eq!(moved, p(0.0, 0.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn about_axis_through_offset_origin() {
        let solid = Rotate::about_axis(&block(), p(1.0, 0.0, 0.0), Vector3::z(), FRAC_PI_2)
            .execute()
            .unwrap();
        let moved = transform_point(&matrix_of(&solid), &p(2.0, 0.0, 0.0));
        assert_relative_eq!(moved, p(1.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn zero_axis_returns_error() {
        let result = Rotate::about_axis(&block(), Point3::origin(), Vector3::zeros(), 1.0).execute();
        assert!(matches!(
            result,
            Err(crate::Error::Geometry(GeometryError::ZeroVector))
        ));
    }

    #[test]
    fn nan_angle_returns_error() {
        let result = Rotate::euler(&block(), Vector3::new(f64::NAN, 0.0, 0.0)).execute();
        assert!(result.is_err());
    }
}
