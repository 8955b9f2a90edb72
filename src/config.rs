//! Engine configuration.
//!
//! Collects the tunables of the CSG tree engine so queries and primitive
//! builders stay decoupled from literal constants.

use crate::constants::{DEFAULT_RESOLUTION, EPSILON};
use crate::error::ConfigError;

/// Tolerance and resolution settings for the CSG tree engine.
///
/// # Examples
/// ```
/// use solidkit::config::EngineConfig;
/// let cfg = EngineConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// assert_eq!(cfg.default_segments, 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    /// Distance under which a point counts as lying on a boundary.
    pub tolerance: f64,
    /// Facet count for primitives approximating a circle.
    pub default_segments: u32,
}

impl EngineConfig {
    /// Creates a configuration from explicit values.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is not finite and positive, or if
    /// fewer than 3 segments are requested.
    ///
    /// # Examples
    /// ```
    /// use solidkit::config::EngineConfig;
    /// let cfg = EngineConfig::new(1.0e-6, 64).unwrap();
    /// assert_eq!(cfg.default_segments, 64);
    /// assert!(EngineConfig::new(0.0, 64).is_err());
    /// ```
    pub fn new(tolerance: f64, default_segments: u32) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            tracing::debug!(tolerance, "rejected engine tolerance");
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_segments < 3 {
            tracing::debug!(default_segments, "rejected segment count");
            return Err(ConfigError::InvalidSegments(default_segments));
        }
        Ok(Self {
            tolerance,
            default_segments,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON,
            default_segments: DEFAULT_RESOLUTION,
        }
    }
}
