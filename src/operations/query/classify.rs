use crate::config::EngineConfig;
use crate::error::Result;
use crate::math::Point3;
use crate::operations::boolean::{classify_point_in_solid, PointClassification};
use crate::tree::CsgSolid;

/// Classifies a point against a solid.
pub struct Classify<'a> {
    solid: &'a CsgSolid,
    point: Point3,
    config: EngineConfig,
}

impl<'a> Classify<'a> {
    /// Creates a new `Classify` query with the default configuration.
    #[must_use]
    pub fn new(solid: &'a CsgSolid, point: Point3) -> Self {
        Self {
            solid,
            point,
            config: EngineConfig::default(),
        }
    }

    /// Uses the tolerance of `config`.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// Executes the query.
    ///
    /// # Errors
    ///
    /// Returns an error if a transform in the solid is not invertible.
    pub fn execute(&self) -> Result<PointClassification> {
        classify_point_in_solid(&self.point, self.solid, self.config.tolerance)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::operations::creation::MakeBox;

    #[test]
    fn tolerance_widens_boundary() {
        let cube = MakeBox::with_size(1.0, 1.0, 1.0).execute().unwrap();
        let near = Point3::new(1.0 + 1e-4, 0.5, 0.5);

        assert_eq!(
            Classify::new(&cube, near).execute().unwrap(),
            PointClassification::Outside
        );

        let loose = EngineConfig::new(1e-3, 32).unwrap();
        assert_eq!(
            Classify::new(&cube, near).with_config(&loose).execute().unwrap(),
            PointClassification::OnBoundary
        );
    }
}
