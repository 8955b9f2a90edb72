//! CSG tree engine.
//!
//! Solids are kept as the unevaluated expression of primitives, affine
//! transforms and booleans. Nothing is tessellated; queries such as
//! [`Classify`](crate::operations::query::Classify) and
//! [`BoundingBox`](crate::operations::query::BoundingBox) walk the tree.

mod node;

pub use node::{CsgNode, CsgSolid, Primitive};

use crate::engine::GeometryEngine;
use crate::error::{Error, Result};
use crate::math::{Point3, Vector3};
use crate::operations::boolean::{Intersect, Subtract, Union};
use crate::operations::transform::{Mirror, Rotate, Scale, Translate};

/// The bundled [`GeometryEngine`] over [`CsgSolid`] trees.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsgTree;

impl GeometryEngine for CsgTree {
    type Solid = CsgSolid;
    type Error = Error;

    fn translate(offset: &Vector3, solid: &CsgSolid) -> Result<CsgSolid> {
        Translate::new(solid, *offset).execute()
    }

    fn rotate(radians: &Vector3, solid: &CsgSolid) -> Result<CsgSolid> {
        Rotate::euler(solid, *radians).execute()
    }

    fn scale(factors: &Vector3, solid: &CsgSolid) -> Result<CsgSolid> {
        Scale::new(solid, *factors).execute()
    }

    fn mirror(normal: &Vector3, solid: &CsgSolid) -> Result<CsgSolid> {
        Mirror::new(solid, Point3::origin(), *normal).execute()
    }

    fn union(a: &CsgSolid, b: &CsgSolid) -> Result<CsgSolid> {
        Ok(Union::new(a, b).execute())
    }

    fn subtract(a: &CsgSolid, b: &CsgSolid) -> Result<CsgSolid> {
        Ok(Subtract::new(a, b).execute())
    }

    fn intersect(a: &CsgSolid, b: &CsgSolid) -> Result<CsgSolid> {
        Ok(Intersect::new(a, b).execute())
    }
}
