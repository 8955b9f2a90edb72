use crate::constants::PI;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Converts an angle from degrees to radians as `degrees * PI / 180`.
#[must_use]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Transforms a point by a 4x4 matrix (homogeneous coordinates).
#[must_use]
pub fn transform_point(matrix: &Matrix4, point: &Point3) -> Point3 {
    let v = matrix * nalgebra::Vector4::new(point.x, point.y, point.z, 1.0);
    Point3::new(v.x, v.y, v.z)
}

/// Returns the name of the first non-finite component, if any.
pub(crate) fn non_finite_axis(v: &Vector3) -> Option<&'static str> {
    ["x", "y", "z"]
        .into_iter()
        .zip(v.iter())
        .find(|(_, c)| !c.is_finite())
        .map(|(axis, _)| axis)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn degrees_convert_to_radians() {
        assert_relative_eq!(degrees_to_radians(180.0), PI);
        assert_relative_eq!(degrees_to_radians(-90.0), -PI / 2.0);
        assert_relative_eq!(degrees_to_radians(0.0), 0.0);
    }

    #[test]
    fn translation_matrix_moves_point() {
        let m = Matrix4::new_translation(&Vector3::new(1.0, 2.0, 3.0));
        let p = transform_point(&m, &Point3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(p, Point3::new(2.0, 3.0, 4.0));
    }

    #[test]
    fn finds_non_finite_axis() {
        assert_eq!(non_finite_axis(&Vector3::new(1.0, 2.0, 3.0)), None);
        assert_eq!(non_finite_axis(&Vector3::new(1.0, f64::NAN, 3.0)), Some("y"));
        assert_eq!(
            non_finite_axis(&Vector3::new(f64::INFINITY, 0.0, 0.0)),
            Some("x")
        );
    }
}
