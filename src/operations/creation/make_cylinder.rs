use crate::config::EngineConfig;
use crate::error::{OperationError, Result};
use crate::tree::{CsgNode, CsgSolid, Primitive};

/// Creates a cylinder standing on the XY plane around +Z.
///
/// The cross-section is a regular polygon whose vertices lie on the circle,
/// the first one on +X.
pub struct MakeCylinder {
    radius: f64,
    height: f64,
    segments: Option<u32>,
    config: EngineConfig,
}

impl MakeCylinder {
    /// Creates a new `MakeCylinder` operation.
    #[must_use]
    pub fn new(radius: f64, height: f64) -> Self {
        Self {
            radius,
            height,
            segments: None,
            config: EngineConfig::default(),
        }
    }

    /// Overrides the facet count of the cross-section.
    #[must_use]
    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Uses `config` for the tolerance and the default facet count.
    #[must_use]
    pub fn with_config(mut self, config: &EngineConfig) -> Self {
        self.config = *config;
        self
    }

    /// Executes the operation, creating the cylinder.
    ///
    /// # Errors
    ///
    /// Returns an error if radius or height is not larger than the
    /// tolerance, or fewer than 3 segments are requested.
    pub fn execute(&self) -> Result<CsgSolid> {
        let segments = self.segments.unwrap_or(self.config.default_segments);
        if segments < 3 {
            return Err(OperationError::InvalidInput(format!(
                "cylinder needs at least 3 segments, got {segments}"
            ))
            .into());
        }
        for (name, value) in [("radius", self.radius), ("height", self.height)] {
            if !value.is_finite() || value <= self.config.tolerance {
                return Err(OperationError::InvalidInput(format!(
                    "cylinder {name} must be positive, got {value}"
                ))
                .into());
            }
        }

        Ok(CsgSolid::from_node(CsgNode::Primitive(Primitive::Cylinder {
            radius: self.radius,
            height: self.height,
            segments,
        })))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_RESOLUTION;

    fn segments_of(solid: &CsgSolid) -> u32 {
        match solid.node() {
            CsgNode::Primitive(Primitive::Cylinder { segments, .. }) => *segments,
            other => panic!("expected cylinder primitive, got {other:?}"),
        }
    }

    #[test]
    fn default_resolution_applies() {
        let solid = MakeCylinder::new(1.0, 2.0).execute().unwrap();
        assert_eq!(segments_of(&solid), DEFAULT_RESOLUTION);
    }

    #[test]
    fn config_resolution_applies() {
        let cfg = EngineConfig::new(1e-9, 12).unwrap();
        let solid = MakeCylinder::new(1.0, 2.0).with_config(&cfg).execute().unwrap();
        assert_eq!(segments_of(&solid), 12);
    }

    #[test]
    fn explicit_segments_win_over_config() {
        let cfg = EngineConfig::new(1e-9, 12).unwrap();
        let solid = MakeCylinder::new(1.0, 2.0)
            .with_config(&cfg)
            .with_segments(6)
            .execute()
            .unwrap();
        assert_eq!(segments_of(&solid), 6);
    }

    #[test]
    fn too_few_segments_fail() {
        assert!(MakeCylinder::new(1.0, 2.0).with_segments(2).execute().is_err());
    }

    #[test]
    fn zero_height_fails() {
        assert!(MakeCylinder::new(1.0, 0.0).execute().is_err());
    }
}
