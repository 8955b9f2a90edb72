//! Shared numeric constants: angles, resolution defaults and tolerances.

/// Archimedes' constant.
pub const PI: f64 = std::f64::consts::PI;

/// A full turn in radians (`2 * PI`).
pub const TAU: f64 = std::f64::consts::TAU;

/// The golden ratio, `(1 + sqrt(5)) / 2`.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Quarter turn in radians.
pub const ANG90: f64 = PI / 2.0;

/// Half turn in radians.
pub const ANG180: f64 = PI;

/// Three-quarter turn in radians.
pub const ANG270: f64 = PI * 1.5;

/// Full turn in radians.
pub const ANG360: f64 = TAU;

/// Number of facets used to approximate a full circle.
pub const DEFAULT_RESOLUTION: u32 = 32;

/// Tolerance for boolean operations, small enough to avoid coincident-surface
/// artifacts without swallowing real features.
pub const EPSILON: f64 = 1e-9;

/// Millimeters per inch.
pub const INCH: f64 = 25.4;
