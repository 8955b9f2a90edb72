use crate::math::Vector3;

/// A transform argument given either as a single number or as a 3-vector.
///
/// How a scalar expands depends on the operation, see [`Vec3Arg::as_offset`],
/// [`Vec3Arg::as_angles`] and [`Vec3Arg::as_factors`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Vec3Arg {
    Scalar(f64),
    Vector(Vector3),
}

impl Vec3Arg {
    /// Translation offset: a scalar moves along X only.
    #[must_use]
    pub fn as_offset(self) -> Vector3 {
        match self {
            Self::Scalar(x) => Vector3::new(x, 0.0, 0.0),
            Self::Vector(v) => v,
        }
    }

    /// Rotation angles: a scalar rotates about Z only.
    #[must_use]
    pub fn as_angles(self) -> Vector3 {
        match self {
            Self::Scalar(z) => Vector3::new(0.0, 0.0, z),
            Self::Vector(v) => v,
        }
    }

    /// Scale factors: a scalar scales uniformly.
    #[must_use]
    pub fn as_factors(self) -> Vector3 {
        match self {
            Self::Scalar(k) => Vector3::repeat(k),
            Self::Vector(v) => v,
        }
    }
}

impl From<f64> for Vec3Arg {
    fn from(v: f64) -> Self {
        Self::Scalar(v)
    }
}

impl From<Vector3> for Vec3Arg {
    fn from(v: Vector3) -> Self {
        Self::Vector(v)
    }
}

impl From<[f64; 3]> for Vec3Arg {
    fn from(v: [f64; 3]) -> Self {
        Self::Vector(Vector3::from(v))
    }
}

/// `(x, y)` with `z = 0`.
impl From<(f64, f64)> for Vec3Arg {
    fn from((x, y): (f64, f64)) -> Self {
        Self::Vector(Vector3::new(x, y, 0.0))
    }
}

impl From<(f64, f64, f64)> for Vec3Arg {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::Vector(Vector3::new(x, y, z))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_expansion_depends_on_operation() {
        let arg = Vec3Arg::from(2.0);
        assert_eq!(arg.as_offset(), Vector3::new(2.0, 0.0, 0.0));
        assert_eq!(arg.as_angles(), Vector3::new(0.0, 0.0, 2.0));
        assert_eq!(arg.as_factors(), Vector3::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn vectors_pass_through() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        for arg in [Vec3Arg::from(v), Vec3Arg::from([1.0, 2.0, 3.0]), Vec3Arg::from((1.0, 2.0, 3.0))] {
            assert_eq!(arg.as_offset(), v);
            assert_eq!(arg.as_angles(), v);
            assert_eq!(arg.as_factors(), v);
        }
    }

    #[test]
    fn missing_z_defaults_to_zero() {
        assert_eq!(Vec3Arg::from((1.0, 2.0)).as_offset(), Vector3::new(1.0, 2.0, 0.0));
    }
}
