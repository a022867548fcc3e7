use crate::ray_intersection::intersect_plane;
use crate::utils::{average, rotate_about, up};
use nalgebra::{Point3, Vector2, Vector3};
use serde::Deserialize;
use std::f64::consts::PI;

/// How far beyond the entry face the silhouette projection rays start. Large
/// enough to clear any face tilt the solver produces.
const CROSS_SECTION_CAST_DISTANCE: f64 = 100.0;

/// One planar refracting surface of a prism.
///
/// `index_of_refraction` is the relative ratio `n_from / n_to` seen by a ray
/// crossing the face along the prism's canonical traversal direction, oriented
/// consistent with `normal`.
#[derive(Debug, Clone, Copy)]
pub struct Face {
    pub normal: Vector3<f64>,
    pub pivot: Point3<f64>,
    pub index_of_refraction: f64,
}

/// A wedge prism: two refracting faces plus a 2D cross-section outline.
///
/// The silhouette lives in the prism's local right/up basis and is only used
/// for extent computations, never for the refraction math itself.
#[derive(Debug, Clone)]
pub struct Prism {
    pub thickness: f64,
    pub first_face: Face,
    pub second_face: Face,
    pub silhouette: Vec<Vector2<f64>>,
}

impl Prism {
    /// Prism axis, pointing from the second face pivot back out through the
    /// first face (against the traversal direction of the ray).
    pub fn direction(&self) -> Vector3<f64> {
        (self.first_face.pivot - self.second_face.pivot).normalize()
    }

    /// Local right/up basis of the silhouette plane, built from the world +y
    /// up convention. Degenerate when the prism axis is vertical.
    pub fn basis(&self) -> (Vector3<f64>, Vector3<f64>) {
        let axis = self.direction();
        let right = up().cross(&axis);
        let local_up = axis.cross(&right);

        (right, local_up)
    }

    /// Projects every silhouette vertex along the prism axis onto both face
    /// planes, yielding the (entry, exit) point pairs that outline the solid.
    ///
    /// The exit face is tested with its normal negated since the projection
    /// approaches it from inside the slab. `None` if any projection misses a
    /// face.
    pub fn cross_section(&self) -> Option<Vec<(Point3<f64>, Point3<f64>)>> {
        let axis = self.direction();
        let (right, local_up) = self.basis();

        self.silhouette
            .iter()
            .map(|point| {
                let offset =
                    right * point.x + local_up * point.y + axis * CROSS_SECTION_CAST_DISTANCE;
                let ray_origin = self.first_face.pivot + offset;

                let entry = intersect_plane(
                    &self.first_face.normal,
                    &self.first_face.pivot,
                    &ray_origin,
                    &-axis,
                )?;
                let exit = intersect_plane(
                    &-self.second_face.normal,
                    &self.second_face.pivot,
                    &ray_origin,
                    &-axis,
                )?;

                Some((entry, exit))
            })
            .collect()
    }

    /// Mean entry and exit points of the projected silhouette outline, the
    /// anchor the presentation layer hangs outline caps on. `None` when the
    /// silhouette is empty or any projection misses a face.
    pub fn cross_section_centroids(&self) -> Option<(Point3<f64>, Point3<f64>)> {
        let section = self.cross_section()?;
        if section.is_empty() {
            return None;
        }

        let entries: Vec<_> = section.iter().map(|(entry, _)| *entry).collect();
        let exits: Vec<_> = section.iter().map(|(_, exit)| *exit).collect();

        Some((average(&entries), average(&exits)))
    }

    /// Ring of `count` points of the given radius around the first face
    /// pivot, swept by quaternion rotation about the face normal. Used to fan
    /// a bundle of probe rays across the entry face.
    ///
    /// Degenerate when the face normal is parallel to the +y up convention.
    pub fn rim_points(&self, radius: f64, count: usize) -> Vec<Point3<f64>> {
        let normal = self.first_face.normal;
        let perp = normal.cross(&up()) * radius;

        (0..count)
            .map(|step| {
                let angle = 2.0 * PI * step as f64 / count as f64;
                self.first_face.pivot + rotate_about(&normal, angle, &perp)
            })
            .collect()
    }
}

/// Input description of a prism whose face normals are not yet known: where
/// it sits, which way it faces, and the index ratio across each face.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PrismConfiguration {
    pub position: Point3<f64>,
    /// Unit vector pointing from the prism center out through the first face.
    pub general_direction: Vector3<f64>,
    pub thickness: f64,
    pub silhouette: Vec<Vector2<f64>>,
    pub first_face: FaceConfiguration,
    pub second_face: FaceConfiguration,
}

/// Per-face refractive input: the relative ratio `n_from / n_to` for a ray
/// crossing that face in traversal order (entry face `outer/inner`, exit face
/// `inner/outer`).
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FaceConfiguration {
    pub index_of_refraction: f64,
}

impl PrismConfiguration {
    /// Face midpoints, half a thickness out from the position along the
    /// general direction; the first face sits on the positive side.
    pub fn face_mids(&self) -> (Point3<f64>, Point3<f64>) {
        let half = self.general_direction * self.thickness / 2.0;

        (self.position + half, self.position - half)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use more_asserts::assert_le;

    fn flat_slab() -> Prism {
        Prism {
            thickness: 2.0,
            first_face: Face {
                normal: Vector3::new(0.0, 0.0, 1.0),
                pivot: Point3::new(0.0, 0.0, 1.0),
                index_of_refraction: 1.0 / 1.52,
            },
            second_face: Face {
                normal: Vector3::new(0.0, 0.0, -1.0),
                pivot: Point3::new(0.0, 0.0, -1.0),
                index_of_refraction: 1.52,
            },
            silhouette: vec![
                Vector2::new(0.0, 0.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(0.0, 1.0),
            ],
        }
    }

    #[test]
    fn it_builds_an_orthonormal_basis() {
        let prism = flat_slab();
        let axis = prism.direction();
        let (right, up) = prism.basis();

        assert_le!((axis - Vector3::new(0.0, 0.0, 1.0)).norm(), 1e-12);
        assert_le!((right - Vector3::new(1.0, 0.0, 0.0)).norm(), 1e-12);
        assert_le!((up - Vector3::new(0.0, 1.0, 0.0)).norm(), 1e-12);
    }

    #[test]
    fn it_projects_the_silhouette_onto_both_faces() {
        let prism = flat_slab();
        let section = prism.cross_section().unwrap();

        assert_eq!(section.len(), 3);
        let (entry, exit) = section[1];
        assert_le!((entry - Point3::new(1.0, 0.0, 1.0)).norm(), 1e-12);
        assert_le!((exit - Point3::new(1.0, 0.0, -1.0)).norm(), 1e-12);
    }

    #[test]
    fn it_averages_the_outline_into_face_centroids() {
        let prism = flat_slab();
        let (entry, exit) = prism.cross_section_centroids().unwrap();

        let third = 1.0 / 3.0;
        assert_le!((entry - Point3::new(third, third, 1.0)).norm(), 1e-12);
        assert_le!((exit - Point3::new(third, third, -1.0)).norm(), 1e-12);

        let bare = Prism {
            silhouette: Vec::new(),
            ..flat_slab()
        };
        assert!(bare.cross_section_centroids().is_none());
    }

    #[test]
    fn it_sweeps_rim_points_in_the_face_plane() {
        let prism = flat_slab();
        let radius = 2.0;
        let points = prism.rim_points(radius, 8);

        assert_eq!(points.len(), 8);
        for point in points {
            let offset = point - prism.first_face.pivot;
            assert_le!((offset.norm() - radius).abs(), 1e-12);
            assert_le!(offset.dot(&prism.first_face.normal).abs(), 1e-12);
        }
    }

    #[test]
    fn it_places_face_mids_along_the_general_direction() {
        let configuration = PrismConfiguration {
            position: Point3::new(0.0, 0.0, 0.0),
            general_direction: Vector3::new(0.0, 0.0, -1.0),
            thickness: 10.0,
            silhouette: Vec::new(),
            first_face: FaceConfiguration {
                index_of_refraction: 1.0 / 1.52,
            },
            second_face: FaceConfiguration {
                index_of_refraction: 1.52,
            },
        };

        let (first, second) = configuration.face_mids();
        assert_eq!(first, Point3::new(0.0, 0.0, -5.0));
        assert_eq!(second, Point3::new(0.0, 0.0, 5.0));
    }
}
