use crate::config::EngineConfig;
use crate::error::{OperationError, Result};
use crate::math::Point3;
use crate::tree::{CsgNode, CsgSolid, Primitive};

/// Creates a sphere solid from center and radius.
///
/// The sphere is kept analytic; it has no facets to configure.
pub struct MakeSphere {
    center: Point3,
    radius: f64,
    config: EngineConfig,
}

impl MakeSphere {
    /// Creates a new `MakeSphere` operation.
    #[must_use]
    pub fn new(center: Point3, radius: f64) -> Self {
        Self {
            center,
            radius,
            config: EngineConfig::default(),
        }
    }

    /// Uses the tolerance of `config` as the smallest accepted radius.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// Executes the operation, creating the sphere.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not finite or not larger than the
    /// tolerance.
    pub fn execute(&self) -> Result<CsgSolid> {
        if !self.radius.is_finite() || self.radius <= self.config.tolerance {
            return Err(
                OperationError::InvalidInput("sphere radius must be positive".into()).into(),
            );
        }

        Ok(CsgSolid::from_node(CsgNode::Primitive(Primitive::Sphere {
            center: self.center,
            radius: self.radius,
        })))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::query::BoundingBox;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn sphere_bounding_box() {
        let solid = MakeSphere::new(p(0.0, 0.0, 0.0), 3.0).execute().unwrap();

        let aabb = BoundingBox::new(&solid).execute().unwrap();
        assert!((aabb.min.z - (-3.0)).abs() < 1e-6);
        assert!((aabb.max.z - 3.0).abs() < 1e-6);
    }

    #[test]
    fn zero_radius_fails() {
        let result = MakeSphere::new(p(0.0, 0.0, 0.0), 0.0).execute();
        assert!(result.is_err());
    }

    #[test]
    fn radius_at_tolerance_fails() {
        let config = EngineConfig::new(0.5, 32).unwrap();
        let ball = |r| MakeSphere::new(p(0.0, 0.0, 0.0), r).with_config(&config).execute();
        assert!(ball(0.5).is_err());
        assert!(ball(0.75).is_ok());
        assert!(MakeSphere::new(p(0.0, 0.0, 0.0), crate::constants::EPSILON).execute().is_err());
    }

    #[test]
    fn nan_radius_fails() {
        assert!(MakeSphere::new(p(0.0, 0.0, 0.0), f64::NAN).execute().is_err());
    }
}
