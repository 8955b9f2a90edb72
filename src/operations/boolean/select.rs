use super::classify::PointClassification;

/// The type of boolean operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    Union,
    Subtract,
    Intersect,
}

impl BooleanOp {
    /// Classifies a point against `left op right`, given its classification
    /// against each operand.
    ///
    /// | left \ right | Inside | OnBoundary | Outside |
    /// |--------------|--------|------------|---------|
    /// | **Union**    |        |            |         |
    /// | Inside       | in     | in         | in      |
    /// | OnBoundary   | in     | on         | on      |
    /// | Outside      | in     | on         | out     |
    /// | **Subtract** |        |            |         |
    /// | Inside       | out    | on         | in      |
    /// | OnBoundary   | out    | on         | on      |
    /// | Outside      | out    | out        | out     |
    /// | **Intersect**|        |            |         |
    /// | Inside       | in     | on         | out     |
    /// | OnBoundary   | on     | on         | out     |
    /// | Outside      | out    | out        | out     |
    ///
    /// Two touching boundaries are reported as `OnBoundary` even when the
    /// point is interior to the combined solid.
    #[allow(clippy::match_same_arms)]
    #[must_use]
    pub fn combine(self, left: PointClassification, right: PointClassification) -> PointClassification {
        use PointClassification::{Inside, OnBoundary, Outside};

        match (self, left, right) {
            (Self::Union, Inside, _) | (Self::Union, _, Inside) => Inside,
            (Self::Union, Outside, Outside) => Outside,
            (Self::Union, _, _) => OnBoundary,

            (Self::Subtract, Outside, _) | (Self::Subtract, _, Inside) => Outside,
            (Self::Subtract, Inside, Outside) => Inside,
            (Self::Subtract, _, _) => OnBoundary,

            (Self::Intersect, Outside, _) | (Self::Intersect, _, Outside) => Outside,
            (Self::Intersect, Inside, Inside) => Inside,
            (Self::Intersect, _, _) => OnBoundary,
        }
    }
}
