use super::{normal_from, refract, OpticsError};
use crate::ray_intersection::intersect_plane;
use nalgebra::{Point3, Vector3};

/// A single ray/surface crossing: where the ray came from, where it struck
/// the surface, and its directions on both sides of the interface.
#[derive(Debug, Clone, Copy)]
pub struct Refraction {
    pub origin: Point3<f64>,
    pub incidence_point: Point3<f64>,
    pub incidence_vector: Vector3<f64>,
    pub normal: Vector3<f64>,
    pub refraction_vector: Vector3<f64>,
}

/// Result of routing a ray through the two faces of a prism.
///
/// Faces are resolved front to back, so a second crossing can only exist once
/// the first one does; the variants encode that dependency directly.
#[derive(Debug, Clone)]
pub enum RefractionPath {
    /// The incoming ray never reached the first face.
    Unresolved,
    /// The ray entered the slab but the internal ray missed the second face.
    FirstOnly(Refraction),
    /// The ray crossed both faces and emerged.
    Complete(Refraction, Refraction),
}

impl RefractionPath {
    pub fn first(&self) -> Option<&Refraction> {
        match self {
            RefractionPath::Unresolved => None,
            RefractionPath::FirstOnly(first) | RefractionPath::Complete(first, _) => Some(first),
        }
    }

    pub fn second(&self) -> Option<&Refraction> {
        match self {
            RefractionPath::Complete(_, second) => Some(second),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, RefractionPath::Complete(..))
    }

    /// Forward problem: trace `incoming_ray` from `origin` through two fully
    /// specified face planes.
    ///
    /// `inner_index` and `outer_index` are the absolute refractive indices of
    /// the slab and the surrounding medium. A face the ray cannot reach ends
    /// the path early (`Unresolved` or `FirstOnly`, both ordinary outcomes);
    /// a refraction with no real solution is an error.
    #[allow(clippy::too_many_arguments)]
    pub fn forward(
        origin: Point3<f64>,
        incoming_ray: Vector3<f64>,
        inner_index: f64,
        outer_index: f64,
        first_face_mid: Point3<f64>,
        first_face_normal: Vector3<f64>,
        second_face_mid: Point3<f64>,
        second_face_normal: Vector3<f64>,
    ) -> Result<RefractionPath, OpticsError> {
        let first_hit =
            match intersect_plane(&first_face_normal, &first_face_mid, &origin, &incoming_ray) {
                Some(hit) => hit,
                None => return Ok(RefractionPath::Unresolved),
            };

        let first_refraction_vector =
            refract(&incoming_ray, &first_face_normal, outer_index / inner_index)?;

        let first = Refraction {
            origin,
            incidence_point: first_hit,
            incidence_vector: incoming_ray,
            normal: first_face_normal,
            refraction_vector: first_refraction_vector,
        };

        // the internal ray strikes the second face from behind
        let exit_normal = -second_face_normal;
        let second_hit = match intersect_plane(
            &exit_normal,
            &second_face_mid,
            &first_hit,
            &first_refraction_vector,
        ) {
            Some(hit) => hit,
            None => return Ok(RefractionPath::FirstOnly(first)),
        };

        let emergence_vector = refract(
            &first_refraction_vector,
            &exit_normal,
            inner_index / outer_index,
        )?;

        let second = Refraction {
            origin: first_hit,
            incidence_point: second_hit,
            incidence_vector: first_refraction_vector,
            normal: second_face_normal,
            refraction_vector: emergence_vector,
        };

        Ok(RefractionPath::Complete(first, second))
    }

    /// Inverse problem: derive the two face normals that route a ray from
    /// `origin` along `incoming_ray` so it leaves the slab along
    /// `outgoing_ray`, then trace the result with [`RefractionPath::forward`].
    ///
    /// The internal leg is pinned to the line between the two face pivots.
    /// TODO: solve for the internal direction instead of assuming the
    /// pivot-to-pivot line, so off-axis internal paths become reachable.
    pub fn inverse(
        origin: Point3<f64>,
        incoming_ray: Vector3<f64>,
        outgoing_ray: Vector3<f64>,
        inner_index: f64,
        outer_index: f64,
        first_face_mid: Point3<f64>,
        second_face_mid: Point3<f64>,
    ) -> Result<RefractionPath, OpticsError> {
        let optimal_internal = (second_face_mid - first_face_mid).normalize();

        let first_face_normal =
            normal_from(&incoming_ray, &optimal_internal, outer_index / inner_index)?;
        // the internal ray meets the second face from behind, so the face
        // normal is the reconstruction flipped
        let second_face_normal =
            -normal_from(&optimal_internal, &outgoing_ray, inner_index / outer_index)?;

        Self::forward(
            origin,
            incoming_ray,
            inner_index,
            outer_index,
            first_face_mid,
            first_face_normal,
            second_face_mid,
            second_face_normal,
        )
    }
}
