use super::Ray;
use crate::ray_intersection::intersect_plane;
use nalgebra::{Point3, Vector3};
use serde::Deserialize;

/// An infinite planar interface anchored at `pivot`.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Plane {
    pub pivot: Point3<f64>,
    pub normal: Vector3<f64>,
}

impl Plane {
    pub fn new(pivot: Point3<f64>, normal: Vector3<f64>) -> Self {
        Self { pivot, normal }
    }

    /// Where the ray crosses this plane, if it does. See [`intersect_plane`]
    /// for the miss conditions.
    pub fn intersect(&self, ray: &Ray) -> Option<Point3<f64>> {
        intersect_plane(&self.normal, &self.pivot, &ray.origin, &ray.direction)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use more_asserts::assert_le;

    #[test]
    fn it_intersects_through_the_free_function() {
        let plane = Plane::new(Point3::new(0.0, 0.0, 3.0), Vector3::new(0.0, 0.0, -1.0));
        let ray = Ray::new(Point3::new(-1.0, 0.5, 0.0), Vector3::new(0.0, 0.0, 1.0));

        let hit = plane.intersect(&ray).unwrap();
        assert_le!((hit - Point3::new(-1.0, 0.5, 3.0)).norm(), 1e-12);

        let grazing = Ray::new(Point3::new(0.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0));
        assert!(plane.intersect(&grazing).is_none());
    }
}
