use std::collections::HashSet;
use std::sync::{Arc, OnceLock};

use crate::math::{Matrix4, Point3};
use crate::operations::boolean::BooleanOp;

/// Handle to an immutable CSG tree.
///
/// Cloning is cheap: the underlying node is shared. Subtrees may be shared
/// too, so a tree is really a DAG; walks over it visit each node once.
#[derive(Debug, Clone)]
pub struct CsgSolid {
    node: Arc<CsgNode>,
}

impl CsgSolid {
    pub(crate) fn from_node(node: CsgNode) -> Self {
        Self {
            node: Arc::new(node),
        }
    }

    /// Returns the root node of the tree.
    #[must_use]
    pub fn node(&self) -> &CsgNode {
        &self.node
    }

    /// Returns `true` if both handles point at the same tree.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }

    /// Identity of the root node, stable while the handle is alive.
    #[must_use]
    pub(crate) fn node_ptr(&self) -> *const CsgNode {
        Arc::as_ptr(&self.node)
    }

    /// Number of distinct nodes in the tree. A subtree shared by several
    /// parents is counted once.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut seen = HashSet::new();
        let mut stack = vec![self];
        while let Some(solid) = stack.pop() {
            if !seen.insert(solid.node_ptr()) {
                continue;
            }
            match solid.node() {
                CsgNode::Primitive(_) => {}
                CsgNode::Transform { child, .. } => stack.push(child),
                CsgNode::Boolean { left, right, .. } => {
                    stack.push(right);
                    stack.push(left);
                }
            }
        }
        seen.len()
    }

    fn detach(&mut self) -> Arc<CsgNode> {
        std::mem::replace(&mut self.node, detached_leaf())
    }
}

/// Placeholder swapped into a node's child slots while it is torn down.
fn detached_leaf() -> Arc<CsgNode> {
    static LEAF: OnceLock<Arc<CsgNode>> = OnceLock::new();
    Arc::clone(LEAF.get_or_init(|| {
        Arc::new(CsgNode::Primitive(Primitive::Box {
            min: Point3::origin(),
            max: Point3::origin(),
        }))
    }))
}

/// A node of the CSG tree.
#[derive(Debug, Clone)]
pub enum CsgNode {
    /// A leaf shape in its local frame.
    Primitive(Primitive),
    /// An affine transform applied to `child`.
    Transform { matrix: Matrix4, child: CsgSolid },
    /// A boolean combination of two subtrees.
    Boolean {
        op: BooleanOp,
        left: CsgSolid,
        right: CsgSolid,
    },
}

impl CsgNode {
    fn detach_children(&mut self, out: &mut Vec<Arc<CsgNode>>) {
        match self {
            Self::Primitive(_) => {}
            Self::Transform { child, .. } => out.push(child.detach()),
            Self::Boolean { left, right, .. } => {
                out.push(left.detach());
                out.push(right.detach());
            }
        }
    }
}

// Tears deep trees down with an explicit stack. Children whose last handle
// is released here are emptied before they drop, so no drop recurses.
impl Drop for CsgNode {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(node) = pending.pop() {
            if let Some(mut node) = Arc::into_inner(node) {
                node.detach_children(&mut pending);
            }
        }
    }
}

/// Leaf shapes of the CSG tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Axis-aligned box between two corners.
    Box { min: Point3, max: Point3 },
    /// Sphere around a center.
    Sphere { center: Point3, radius: f64 },
    /// Regular `segments`-gon prism around +Z, from `z = 0` to `z = height`,
    /// with its vertices on a circle of `radius`.
    Cylinder {
        radius: f64,
        height: f64,
        segments: u32,
    },
}
