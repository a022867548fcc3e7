use super::{refract, OpticsError, RefractionPath};
use crate::core::{Face, Prism, PrismConfiguration, Ray};
use crate::ray_intersection::intersect_plane;
use crate::utils::angle_between;
use nalgebra::Point3;

/// A fully solved single-prism arrangement: the concrete prism geometry plus
/// the three legs of the ray and the point the emergent leg is aimed at.
///
/// Unlike [`RefractionPath`], a `Setup` only exists when the ray makes it all
/// the way through, so its constructors turn misses into errors.
#[derive(Debug, Clone)]
pub struct Setup {
    pub prism: Prism,
    pub incidence_ray: Ray,
    pub refraction_ray: Ray,
    pub emergence_ray: Ray,
    pub focal_point: Point3<f64>,
}

impl Setup {
    /// Inverse design: orient the faces of a prism described by
    /// `configuration` so a ray from `ray_start`, aimed at the first face
    /// midpoint, leaves the prism toward `ray_end`.
    ///
    /// The slab's inner/outer indices are derived from the first face ratio;
    /// the second face ratio is expected to be its reciprocal.
    pub fn design(
        ray_start: Point3<f64>,
        ray_end: Point3<f64>,
        configuration: &PrismConfiguration,
    ) -> Result<Setup, OpticsError> {
        let (first_face_mid, second_face_mid) = configuration.face_mids();

        let incoming_ray = (first_face_mid - ray_start).normalize();
        let outgoing_ray = (ray_end - second_face_mid).normalize();

        // face configurations carry the relative ratio across each face, so
        // express them as inner/outer indices for the path solver
        let inner_index = 1.0 / configuration.first_face.index_of_refraction;
        let outer_index = 1.0;

        let path = RefractionPath::inverse(
            ray_start,
            incoming_ray,
            outgoing_ray,
            inner_index,
            outer_index,
            first_face_mid,
            second_face_mid,
        )?;

        let (first, second) = match path {
            RefractionPath::Complete(first, second) => (first, second),
            RefractionPath::FirstOnly(_) => return Err(OpticsError::MissedSecondFace),
            RefractionPath::Unresolved => return Err(OpticsError::MissedFirstFace),
        };

        let prism = Prism {
            thickness: configuration.thickness,
            first_face: Face {
                normal: first.normal,
                pivot: first_face_mid,
                index_of_refraction: configuration.first_face.index_of_refraction,
            },
            second_face: Face {
                normal: second.normal,
                pivot: second_face_mid,
                index_of_refraction: configuration.second_face.index_of_refraction,
            },
            silhouette: configuration.silhouette.clone(),
        };

        Ok(Setup {
            prism,
            incidence_ray: Ray::new(ray_start, incoming_ray),
            refraction_ray: Ray::new(first.incidence_point, first.refraction_vector),
            emergence_ray: Ray::new(second.incidence_point, second.refraction_vector),
            focal_point: ray_end,
        })
    }

    /// Forward trace through an existing prism, using the relative index
    /// stored on each face. The focal point is placed `emergence_length` past
    /// the exit face along the emergent direction.
    pub fn trace(prism: Prism, ray_start: Ray, emergence_length: f64) -> Result<Setup, OpticsError> {
        let first_hit = intersect_plane(
            &prism.first_face.normal,
            &prism.first_face.pivot,
            &ray_start.origin,
            &ray_start.direction,
        )
        .ok_or(OpticsError::MissedFirstFace)?;

        let refracted = refract(
            &ray_start.direction,
            &prism.first_face.normal,
            prism.first_face.index_of_refraction,
        )?;

        // exit side, so the face normal flips
        let exit_normal = -prism.second_face.normal;
        let second_hit = intersect_plane(
            &exit_normal,
            &prism.second_face.pivot,
            &first_hit,
            &refracted,
        )
        .ok_or(OpticsError::MissedSecondFace)?;

        let emergent = refract(
            &refracted,
            &exit_normal,
            prism.second_face.index_of_refraction,
        )?;

        let emergence_ray = Ray::new(second_hit, emergent);
        let focal_point = emergence_ray.point_at(emergence_length);

        Ok(Setup {
            prism,
            incidence_ray: ray_start,
            refraction_ray: Ray::new(first_hit, refracted),
            emergence_ray,
            focal_point,
        })
    }

    /// Signed angle from the incoming to the emergent direction, measured
    /// about the +z cross-section normal: positive when the ray bends toward
    /// +y for a layout in the xy plane.
    pub fn deviation_angle(&self) -> f64 {
        angle_between(
            &self.incidence_ray.direction,
            &self.emergence_ray.direction,
        )
    }
}
