use nalgebra::{Point3, Vector3};
use serde::Deserialize;

/// A half-line with a point of origin and a direction.
///
/// The direction is conventionally unit length but not enforced; operations
/// that require a unit direction say so.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Ray {
    pub origin: Point3<f64>,
    pub direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Self {
        Self { origin, direction }
    }

    /// Point reached after travelling `t` along the direction.
    pub fn point_at(&self, t: f64) -> Point3<f64> {
        self.origin + self.direction * t
    }
}
