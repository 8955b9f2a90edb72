use std::collections::HashMap;

use super::BooleanOp;
use crate::constants::TAU;
use crate::error::{GeometryError, Result};
use crate::math::{transform_point, Point3};
use crate::tree::{CsgNode, CsgSolid, Primitive};

/// Classification of a point relative to a solid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    Inside,
    Outside,
    OnBoundary,
}

impl PointClassification {
    fn from_signed_distance(distance: f64, tolerance: f64) -> Self {
        if distance < -tolerance {
            Self::Inside
        } else if distance > tolerance {
            Self::Outside
        } else {
            Self::OnBoundary
        }
    }
}

/// Classifies a point as inside, outside, or on the boundary of a solid.
///
/// Walks the tree: transform nodes map the point into their child's frame,
/// boolean nodes classify against both operands and combine the results
/// with [`BooleanOp::combine`](super::BooleanOp::combine), and primitives
/// are tested directly. `tolerance` is measured in each primitive's local
/// frame.
///
/// The walk keeps its own stack, so tree depth is not bounded by the
/// thread's stack, and a subtree shared by several parents is classified
/// once per distinct point.
///
/// # Errors
///
/// Returns an error if a transform on the path is not invertible.
pub fn classify_point_in_solid(
    point: &Point3,
    solid: &CsgSolid,
    tolerance: f64,
) -> Result<PointClassification> {
    let mut memo: HashMap<VisitKey, PointClassification> = HashMap::new();
    let mut values = Vec::new();
    let mut steps = vec![Step::Enter(solid, *point)];

    while let Some(step) = steps.pop() {
        match step {
            Step::Enter(solid, point) => {
                let key = visit_key(solid, &point);
                if let Some(&known) = memo.get(&key) {
                    values.push(known);
                    continue;
                }
                match solid.node() {
                    CsgNode::Primitive(primitive) => {
                        let class = PointClassification::from_signed_distance(
                            primitive_distance(primitive, &point),
                            tolerance,
                        );
                        memo.insert(key, class);
                        values.push(class);
                    }
                    CsgNode::Transform { matrix, child } => {
                        let inverse = matrix.try_inverse().ok_or_else(|| {
                            GeometryError::Degenerate("transform is not invertible".into())
                        })?;
                        steps.push(Step::Forward(key));
                        steps.push(Step::Enter(child, transform_point(&inverse, &point)));
                    }
                    CsgNode::Boolean { op, left, right } => {
                        steps.push(Step::Combine(key, *op));
                        steps.push(Step::Enter(right, point));
                        steps.push(Step::Enter(left, point));
                    }
                }
            }
            Step::Forward(key) => {
                let Some(&class) = values.last() else {
                    unreachable!("transform step without a child result");
                };
                memo.insert(key, class);
            }
            Step::Combine(key, op) => {
                let (Some(r), Some(l)) = (values.pop(), values.pop()) else {
                    unreachable!("boolean step without both operand results");
                };
                let class = op.combine(l, r);
                memo.insert(key, class);
                values.push(class);
            }
        }
    }

    values
        .pop()
        .ok_or_else(|| GeometryError::Degenerate("empty classification walk".into()).into())
}

/// A node together with the point it is queried at, in that node's frame.
type VisitKey = (*const CsgNode, [u64; 3]);

fn visit_key(solid: &CsgSolid, point: &Point3) -> VisitKey {
    (
        solid.node_ptr(),
        [point.x.to_bits(), point.y.to_bits(), point.z.to_bits()],
    )
}

enum Step<'a> {
    Enter(&'a CsgSolid, Point3),
    Forward(VisitKey),
    Combine(VisitKey, BooleanOp),
}

/// Signed distance-like measure: negative inside, positive outside, zero on
/// the surface. Exact on faces; only the sign matters away from them.
fn primitive_distance(primitive: &Primitive, p: &Point3) -> f64 {
    match primitive {
        Primitive::Box { min, max } => (0..3)
            .map(|i| (min[i] - p[i]).max(p[i] - max[i]))
            .fold(f64::NEG_INFINITY, f64::max),
        Primitive::Sphere { center, radius } => (p - center).norm() - radius,
        Primitive::Cylinder {
            radius,
            height,
            segments,
        } => {
            let n = f64::from(*segments);
            let apothem = radius * (TAU / (2.0 * n)).cos();
            let radial = (0..*segments)
                .map(|k| {
                    let phi = (f64::from(k) + 0.5) * TAU / n;
                    p.x * phi.cos() + p.y * phi.sin() - apothem
                })
                .fold(f64::NEG_INFINITY, f64::max);
            let axial = (-p.z).max(p.z - height);
            radial.max(axial)
        }
    }
}
