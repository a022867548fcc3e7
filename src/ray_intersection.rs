use nalgebra::{Point3, Vector3};

/// Intersects a ray with an infinite plane anchored at `plane_pivot`.
///
/// `normal` and `ray_direction` are expected to be unit length; with non-unit
/// inputs the returned point is scaled incorrectly.
///
/// Returns `None` when `(-normal) · ray_direction <= 1e-6`, which covers both
/// a ray parallel to the plane and one approaching the plane from the side the
/// normal points away from. The distance along the ray is deliberately not
/// clamped to the positive half: a hit behind the origin is still reported
/// when the direction test passes.
pub fn intersect_plane(
    normal: &Vector3<f64>,
    plane_pivot: &Point3<f64>,
    ray_origin: &Point3<f64>,
    ray_direction: &Vector3<f64>,
) -> Option<Point3<f64>> {
    let denom = (-normal).dot(ray_direction);
    if denom <= 1e-6 {
        return None;
    }

    let to_pivot = plane_pivot - ray_origin;
    let t = to_pivot.dot(&-normal) / denom;
    Some(ray_origin + ray_direction * t)
}
