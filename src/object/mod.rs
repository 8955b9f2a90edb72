//! The chainable solid facade.
//!
//! [`Object3d`] pairs a solid of some [`GeometryEngine`] with a
//! [`Metadata`] mapping. It is immutable: every transform, boolean and
//! metadata update returns a new wrapper, and the solid itself is shared
//! between wrappers through an [`Arc`].
//!
//! ```
//! use solidkit::object::Object3d;
//! use solidkit::operations::creation::MakeBox;
//! use solidkit::tree::CsgTree;
//!
//! # fn main() -> solidkit::Result<()> {
//! let plate = Object3d::<CsgTree>::from_geometry(MakeBox::with_size(10.0, 10.0, 2.0).execute()?)
//!     .with_metadata("name", "plate");
//! let hole = Object3d::<CsgTree>::from_geometry(MakeBox::with_size(2.0, 2.0, 4.0).execute()?)
//!     .translate((4.0, 4.0, -1.0))?;
//!
//! let part = plate.subtract(&hole)?.rotate(90.0)?;
//! assert_eq!(part.get_metadata("name").and_then(|v| v.as_str()), Some("plate"));
//! # Ok(())
//! # }
//! ```

mod args;
mod metadata;

pub use args::Vec3Arg;
pub use metadata::{Metadata, MetadataValue};

use std::fmt;
use std::sync::Arc;

use crate::engine::GeometryEngine;
use crate::math::{degrees_to_radians, Vector3};

/// A solid of engine `E` with attached metadata.
pub struct Object3d<E: GeometryEngine> {
    geometry: Arc<E::Solid>,
    metadata: Metadata,
}

impl<E: GeometryEngine> Object3d<E> {
    /// Wraps `geometry` with the given metadata.
    #[must_use]
    pub fn new(geometry: E::Solid, metadata: Metadata) -> Self {
        Self {
            geometry: Arc::new(geometry),
            metadata,
        }
    }

    /// Wraps `geometry` with empty metadata.
    #[must_use]
    pub fn from_geometry(geometry: E::Solid) -> Self {
        Self::new(geometry, Metadata::new())
    }

    /// The wrapped solid.
    #[must_use]
    pub fn geometry(&self) -> &E::Solid {
        &self.geometry
    }

    /// The wrapped solid as a shared handle.
    #[must_use]
    pub fn shared_geometry(&self) -> &Arc<E::Solid> {
        &self.geometry
    }

    /// The attached metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Looks up a metadata value.
    #[must_use]
    pub fn get_metadata(&self, key: &str) -> Option<&MetadataValue> {
        self.metadata.get(key)
    }

    /// Looks up a metadata value, falling back to `default` when `key` is
    /// absent.
    #[must_use]
    pub fn get_metadata_or(&self, key: &str, default: impl Into<MetadataValue>) -> MetadataValue {
        self.metadata
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.into())
    }

    /// Returns a copy with `key` set to `value`. The solid is shared.
    #[must_use]
    pub fn with_metadata(&self, key: impl Into<String>, value: impl Into<MetadataValue>) -> Self {
        Self {
            geometry: Arc::clone(&self.geometry),
            metadata: self.metadata.with(key, value),
        }
    }

    /// Translates by an offset. A scalar moves along X; `(x, y)` leaves Z at 0.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn translate(&self, offset: impl Into<Vec3Arg>) -> Result<Self, E::Error> {
        let offset = offset.into().as_offset();
        Ok(self.derive(E::translate(&offset, &self.geometry)?))
    }

    /// Rotates by angles in degrees. A scalar rotates about Z.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn rotate(&self, degrees: impl Into<Vec3Arg>) -> Result<Self, E::Error> {
        let radians = degrees.into().as_angles().map(degrees_to_radians);
        Ok(self.derive(E::rotate(&radians, &self.geometry)?))
    }

    /// Scales per axis. A scalar scales uniformly.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn scale(&self, factors: impl Into<Vec3Arg>) -> Result<Self, E::Error> {
        let factors = factors.into().as_factors();
        Ok(self.derive(E::scale(&factors, &self.geometry)?))
    }

    /// Mirrors across the plane through the origin with the given normal.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn mirror(&self, normal: impl Into<Vector3>) -> Result<Self, E::Error> {
        Ok(self.derive(E::mirror(&normal.into(), &self.geometry)?))
    }

    /// Union with `other`. Only the receiver's metadata is kept.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn union(&self, other: &Self) -> Result<Self, E::Error> {
        Ok(self.derive(E::union(&self.geometry, &other.geometry)?))
    }

    /// Removes `other` from this solid. Only the receiver's metadata is kept.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn subtract(&self, other: &Self) -> Result<Self, E::Error> {
        Ok(self.derive(E::subtract(&self.geometry, &other.geometry)?))
    }

    /// Intersection with `other`. Only the receiver's metadata is kept.
    ///
    /// # Errors
    ///
    /// Propagates the engine's error.
    pub fn intersect(&self, other: &Self) -> Result<Self, E::Error> {
        Ok(self.derive(E::intersect(&self.geometry, &other.geometry)?))
    }

    fn derive(&self, geometry: E::Solid) -> Self {
        Self::new(geometry, self.metadata.clone())
    }
}

impl<E: GeometryEngine> Clone for Object3d<E> {
    fn clone(&self) -> Self {
        Self {
            geometry: Arc::clone(&self.geometry),
            metadata: self.metadata.clone(),
        }
    }
}

impl<E> fmt::Debug for Object3d<E>
where
    E: GeometryEngine,
    E::Solid: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object3d")
            .field("geometry", &self.geometry)
            .field("metadata", &self.metadata)
            .finish()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::constants::PI;

    /// Engine whose solids are the log of operations applied to them.
    struct Recorder;

    impl GeometryEngine for Recorder {
        type Solid = Vec<String>;
        type Error = Infallible;

        fn translate(offset: &Vector3, solid: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(solid, format!("translate {offset:?}")))
        }

        fn rotate(radians: &Vector3, solid: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(solid, format!("rotate {radians:?}")))
        }

        fn scale(factors: &Vector3, solid: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(solid, format!("scale {factors:?}")))
        }

        fn mirror(normal: &Vector3, solid: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(solid, format!("mirror {normal:?}")))
        }

        fn union(a: &Vec<String>, b: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(a, format!("union {b:?}")))
        }

        fn subtract(a: &Vec<String>, b: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(a, format!("subtract {b:?}")))
        }

        fn intersect(a: &Vec<String>, b: &Vec<String>) -> Result<Vec<String>, Infallible> {
            Ok(push(a, format!("intersect {b:?}")))
        }
    }

    fn push(solid: &[String], entry: String) -> Vec<String> {
        let mut log = solid.to_vec();
        log.push(entry);
        log
    }

    fn leaf(name: &str) -> Object3d<Recorder> {
        Object3d::from_geometry(vec![name.to_owned()])
    }

    #[test]
    fn translate_delegates_to_engine() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let obj = leaf("s").translate(v).unwrap();
        let expected = Recorder::translate(&v, &vec!["s".to_owned()]).unwrap();
        assert_eq!(obj.geometry(), &expected);
    }

    #[test]
    fn translate_defaults_missing_components() {
        let a = leaf("s").translate(4.0).unwrap();
        let b = leaf("s").translate([4.0, 0.0, 0.0]).unwrap();
        let c = leaf("s").translate((4.0, 0.0)).unwrap();
        assert_eq!(a.geometry(), b.geometry());
        assert_eq!(a.geometry(), c.geometry());
    }

    #[test]
    fn scalar_rotate_is_about_z() {
        for angle in [0.0, 45.0, 360.0, -90.0] {
            let a = leaf("s").rotate(angle).unwrap();
            let b = leaf("s").rotate([0.0, 0.0, angle]).unwrap();
            assert_eq!(a.geometry(), b.geometry());
        }
    }

    #[test]
    fn rotate_converts_degrees() {
        let obj = leaf("s").rotate([180.0, 90.0, 0.0]).unwrap();
        let radians = Vector3::new(180.0 * PI / 180.0, 90.0 * PI / 180.0, 0.0);
        assert_eq!(obj.geometry()[1], format!("rotate {radians:?}"));
    }

    #[test]
    fn scalar_scale_is_uniform() {
        for k in [2.0, 0.0, -1.5] {
            let a = leaf("s").scale(k).unwrap();
            let b = leaf("s").scale([k, k, k]).unwrap();
            assert_eq!(a.geometry(), b.geometry());
        }
    }

    #[test]
    fn mirror_passes_normal_through() {
        let obj = leaf("s").mirror([0.0, 0.0, 0.0]).unwrap();
        assert_eq!(obj.geometry()[1], format!("mirror {:?}", Vector3::zeros()));
    }

    #[test]
    fn booleans_keep_receiver_metadata() {
        let a = leaf("a").with_metadata("name", "a").with_metadata("only_a", true);
        let b = leaf("b").with_metadata("name", "b").with_metadata("only_b", true);

        for result in [
            a.union(&b).unwrap(),
            a.subtract(&b).unwrap(),
            a.intersect(&b).unwrap(),
        ] {
            assert_eq!(result.metadata(), a.metadata());
            assert!(result.get_metadata("only_b").is_none());
        }
        assert_eq!(a.subtract(&b).unwrap().geometry()[1], r#"subtract ["b"]"#);
    }

    #[test]
    fn clone_shares_geometry_and_isolates_metadata() {
        let nested = Arc::new(Metadata::from_iter([("depth", 1)]));
        let original = leaf("s").with_metadata("nested", Arc::clone(&nested));
        let copy = original.clone();

        assert!(Arc::ptr_eq(original.shared_geometry(), copy.shared_geometry()));

        let changed = copy.with_metadata("name", "copy");
        assert!(original.get_metadata("name").is_none());
        assert!(copy.get_metadata("name").is_none());
        assert_eq!(changed.get_metadata("name").unwrap().as_str(), Some("copy"));

        // Nested maps sit on the shallow-copy boundary.
        let shared = copy.get_metadata("nested").unwrap().as_map().unwrap();
        assert!(std::ptr::eq(shared, nested.as_ref()));
    }

    #[test]
    fn metadata_defaults() {
        let obj = leaf("s");
        assert_eq!(obj.get_metadata_or("missing", "fallback").as_str(), Some("fallback"));
        assert!(obj.get_metadata("missing").is_none());

        let obj = obj.with_metadata("key", 5);
        assert_eq!(obj.get_metadata("key"), Some(&MetadataValue::Number(5.0)));
        assert_eq!(obj.get_metadata_or("key", 99), MetadataValue::Number(5.0));
    }

    #[test]
    fn operations_copy_metadata() {
        let obj = Object3d::<Recorder>::new(
            vec!["s".to_owned()],
            Metadata::from_iter([("name", "part")]),
        );
        let moved = obj.translate(1.0).unwrap().scale(2.0).unwrap();
        assert_eq!(moved.metadata(), obj.metadata());
        assert_eq!(obj.geometry().len(), 1);
        assert_eq!(moved.geometry().len(), 3);
    }
}
