use std::collections::HashMap;

use crate::constants::TAU;
use crate::math::{transform_point, Matrix4, Point3};
use crate::operations::boolean::BooleanOp;
use crate::tree::{CsgNode, CsgSolid, Primitive};

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box.
    pub min: Point3,
    /// Maximum corner of the bounding box.
    pub max: Point3,
}

impl Aabb {
    /// Smallest box containing all `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points(points: impl IntoIterator<Item = Point3>) -> Option<Self> {
        points.into_iter().fold(None, |acc, p| match acc {
            None => Some(Self { min: p, max: p }),
            Some(b) => Some(Self {
                min: b.min.inf(&p),
                max: b.max.sup(&p),
            }),
        })
    }

    /// Smallest box containing both boxes.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: self.min.inf(&other.min),
            max: self.max.sup(&other.max),
        }
    }

    /// Overlap of both boxes, or `None` if they are disjoint.
    #[must_use]
    pub fn overlap(&self, other: &Self) -> Option<Self> {
        let min = self.min.sup(&other.min);
        let max = self.max.inf(&other.max);
        (0..3).all(|i| min[i] <= max[i]).then_some(Self { min, max })
    }

    /// The eight corners of the box.
    #[must_use]
    pub fn corners(&self) -> [Point3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Point3::new(a.x, a.y, a.z),
            Point3::new(b.x, a.y, a.z),
            Point3::new(a.x, b.y, a.z),
            Point3::new(b.x, b.y, a.z),
            Point3::new(a.x, a.y, b.z),
            Point3::new(b.x, a.y, b.z),
            Point3::new(a.x, b.y, b.z),
            Point3::new(b.x, b.y, b.z),
        ]
    }

    /// Bounding box of this box after an affine transform.
    #[must_use]
    pub fn transformed(&self, matrix: &Matrix4) -> Self {
        let corners = self.corners().map(|c| transform_point(matrix, &c));
        let mut result = Self {
            min: corners[0],
            max: corners[0],
        };
        for c in &corners[1..] {
            result.min = result.min.inf(c);
            result.max = result.max.sup(c);
        }
        result
    }
}

/// Computes the axis-aligned bounding box of a solid.
///
/// The box is conservative: subtractions report the box of their left
/// operand, and intersections the overlap of both operand boxes.
pub struct BoundingBox<'a> {
    solid: &'a CsgSolid,
}

impl<'a> BoundingBox<'a> {
    /// Creates a new `BoundingBox` query.
    #[must_use]
    pub fn new(solid: &'a CsgSolid) -> Self {
        Self { solid }
    }

    /// Executes the query, returning the AABB, or `None` if the solid is
    /// provably empty.
    #[must_use]
    pub fn execute(&self) -> Option<Aabb> {
        solid_aabb(self.solid)
    }
}

/// Walks the tree with its own stack, computing each shared node once.
fn solid_aabb(solid: &CsgSolid) -> Option<Aabb> {
    let mut memo: HashMap<*const CsgNode, Option<Aabb>> = HashMap::new();
    let mut values = Vec::new();
    let mut steps = vec![Step::Enter(solid)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(solid) => {
                if let Some(&known) = memo.get(&solid.node_ptr()) {
                    values.push(known);
                    continue;
                }
                match solid.node() {
                    CsgNode::Primitive(primitive) => {
                        let aabb = primitive_aabb(primitive);
                        memo.insert(solid.node_ptr(), aabb);
                        values.push(aabb);
                    }
                    CsgNode::Transform { child, .. } => {
                        steps.push(Step::Exit(solid));
                        steps.push(Step::Enter(child));
                    }
                    // Only the left box bounds a difference.
                    CsgNode::Boolean {
                        op: BooleanOp::Subtract,
                        left,
                        ..
                    } => {
                        steps.push(Step::Exit(solid));
                        steps.push(Step::Enter(left));
                    }
                    CsgNode::Boolean { left, right, .. } => {
                        steps.push(Step::Exit(solid));
                        steps.push(Step::Enter(right));
                        steps.push(Step::Enter(left));
                    }
                }
            }
            Step::Exit(solid) => {
                let aabb = match solid.node() {
                    CsgNode::Primitive(primitive) => primitive_aabb(primitive),
                    CsgNode::Transform { matrix, .. } => {
                        pop_result(&mut values).map(|aabb| aabb.transformed(matrix))
                    }
                    CsgNode::Boolean { op, .. } => match op {
                        BooleanOp::Subtract => pop_result(&mut values),
                        BooleanOp::Union => {
                            let r = pop_result(&mut values);
                            match (pop_result(&mut values), r) {
                                (Some(a), Some(b)) => Some(a.merge(&b)),
                                (a, b) => a.or(b),
                            }
                        }
                        BooleanOp::Intersect => {
                            let r = pop_result(&mut values);
                            let l = pop_result(&mut values);
                            l.zip(r).and_then(|(l, r)| l.overlap(&r))
                        }
                    },
                };
                memo.insert(solid.node_ptr(), aabb);
                values.push(aabb);
            }
        }
    }

    values.pop().flatten()
}

enum Step<'a> {
    Enter(&'a CsgSolid),
    Exit(&'a CsgSolid),
}

fn pop_result(values: &mut Vec<Option<Aabb>>) -> Option<Aabb> {
    let Some(aabb) = values.pop() else {
        unreachable!("exit step without its operand results");
    };
    aabb
}

fn primitive_aabb(primitive: &Primitive) -> Option<Aabb> {
    match primitive {
        Primitive::Box { min, max } => Some(Aabb {
            min: *min,
            max: *max,
        }),
        Primitive::Sphere { center, radius } => {
            let r = nalgebra::Vector3::repeat(*radius);
            Some(Aabb {
                min: center - r,
                max: center + r,
            })
        }
        Primitive::Cylinder {
            radius,
            height,
            segments,
        } => {
            let n = f64::from(*segments);
            Aabb::from_points((0..*segments).flat_map(|k| {
                let angle = f64::from(k) * TAU / n;
                let (x, y) = (radius * angle.cos(), radius * angle.sin());
                [Point3::new(x, y, 0.0), Point3::new(x, y, *height)]
            }))
        }
    }
}
