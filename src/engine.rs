//! The seam between the [`Object3d`](crate::object::Object3d) facade and a
//! geometry engine.

use crate::math::Vector3;

/// A constructive-solid-geometry engine.
///
/// Engines are marker types: every operation is an associated function
/// taking solids by reference and producing a new solid. The facade never
/// looks inside [`Self::Solid`] and never translates [`Self::Error`].
pub trait GeometryEngine {
    /// The engine's opaque solid representation.
    type Solid;

    /// Failure raised by the engine, e.g. on degenerate input.
    type Error: std::error::Error;

    /// Translates `solid` by `offset`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn translate(offset: &Vector3, solid: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Rotates `solid` by per-axis angles in radians.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn rotate(radians: &Vector3, solid: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Scales `solid` by per-axis factors.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn scale(factors: &Vector3, solid: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Mirrors `solid` across the plane through the origin with `normal`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn mirror(normal: &Vector3, solid: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Boolean union `a ∪ b`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn union(a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Boolean difference `a − b`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn subtract(a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, Self::Error>;

    /// Boolean intersection `a ∩ b`.
    ///
    /// # Errors
    ///
    /// Engine-defined.
    fn intersect(a: &Self::Solid, b: &Self::Solid) -> Result<Self::Solid, Self::Error>;
}
