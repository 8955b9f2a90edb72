pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod math;
pub mod object;
pub mod operations;
pub mod tree;

pub use engine::GeometryEngine;
pub use error::{Error, Result};
pub use object::{Metadata, MetadataValue, Object3d, Vec3Arg};
pub use tree::{CsgSolid, CsgTree};

/// An [`Object3d`] backed by the bundled [`CsgTree`] engine.
pub type Solid = Object3d<CsgTree>;
