use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};

/// World up convention (+y). Prism bases and rim sweeps are anchored to it.
pub fn up() -> Vector3<f64> {
    Vector3::y()
}

/// Signed angle from `a` to `b`, measured about the +z reference normal.
///
/// Intended for directions lying in the xy plane (cross-section work); for
/// out-of-plane vectors only the z component of the rotation is reported.
pub fn angle_between(a: &Vector3<f64>, b: &Vector3<f64>) -> f64 {
    let a = a.normalize();
    let b = b.normalize();

    a.cross(&b).dot(&Vector3::z()).atan2(a.dot(&b))
}

/// Component-wise mean of a set of points. The origin for an empty set.
pub fn average(points: &[Point3<f64>]) -> Point3<f64> {
    if points.is_empty() {
        return Point3::origin();
    }

    let sum = points
        .iter()
        .fold(Vector3::zeros(), |sum, point| sum + point.coords);
    Point3::from(sum / points.len() as f64)
}

/// Rotates `v` by `angle` radians around `axis`. The axis does not need to be
/// pre-normalized.
pub fn rotate_about(axis: &Vector3<f64>, angle: f64, v: &Vector3<f64>) -> Vector3<f64> {
    UnitQuaternion::from_axis_angle(&Unit::new_normalize(*axis), angle) * v
}

#[cfg(test)]
mod test {
    use super::*;
    use more_asserts::assert_le;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn it_measures_signed_angles_about_z() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);

        assert_le!((angle_between(&x, &y) - FRAC_PI_2).abs(), 1e-12);
        assert_le!((angle_between(&y, &x) + FRAC_PI_2).abs(), 1e-12);
        assert_le!(angle_between(&x, &x).abs(), 1e-12);
    }

    #[test]
    fn it_ignores_vector_lengths_when_measuring_angles() {
        let a = Vector3::new(3.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 0.25, 0.0);

        assert_le!((angle_between(&a, &b) - FRAC_PI_2).abs(), 1e-12);
    }

    #[test]
    fn it_averages_points() {
        let points = [
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(2.0, 4.0, -2.0),
            Point3::new(4.0, 2.0, 2.0),
        ];

        assert_eq!(average(&points), Point3::new(2.0, 2.0, 0.0));
        assert_eq!(average(&[]), Point3::origin());
    }

    #[test]
    fn it_anchors_up_to_positive_y() {
        assert_eq!(up(), Vector3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn it_rotates_vectors_about_an_axis() {
        let rotated = rotate_about(
            &Vector3::new(0.0, 0.0, 2.0),
            FRAC_PI_2,
            &Vector3::new(1.0, 0.0, 0.0),
        );

        assert_le!((rotated - Vector3::new(0.0, 1.0, 0.0)).norm(), 1e-12);
    }
}
