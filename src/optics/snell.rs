use nalgebra::Vector3;
use std::error::Error;
use std::fmt;

/// How far a direction's length may stray from one before it is rejected.
const UNIT_LENGTH_TOLERANCE: f64 = 1e-4;

/// Failure modes of the refraction formulas. Geometric misses are not errors
/// and are reported as absent results instead; these variants cover inputs on
/// which the closed forms have no usable solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OpticsError {
    /// The incidence angle exceeds the critical angle, so Snell's law has no
    /// real refracted direction.
    TotalInternalReflection,
    /// The incidence/refraction pair does not determine a surface normal
    /// (anti-parallel directions, an index ratio of one with no bend, or a
    /// bend too steep for the given ratio).
    DegenerateDirections,
    /// A direction that must be unit length was not, within 1e-4.
    NotNormalized { length: f64 },
    /// The incoming ray never reached the first face.
    MissedFirstFace,
    /// The internal ray never reached the second face.
    MissedSecondFace,
}

impl fmt::Display for OpticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpticsError::TotalInternalReflection => write!(f, "total internal reflection"),
            OpticsError::DegenerateDirections => write!(
                f,
                "incidence and refraction directions do not determine a surface normal"
            ),
            OpticsError::NotNormalized { length } => {
                write!(f, "expected a unit length direction, got length {}", length)
            }
            OpticsError::MissedFirstFace => write!(f, "ray does not reach the first face"),
            OpticsError::MissedSecondFace => {
                write!(f, "refracted ray does not reach the second face")
            }
        }
    }
}

impl Error for OpticsError {}

/// Refracts `incidence` at a surface with the given `normal`, which must
/// point back toward the incoming medium.
///
/// `ior` is the relative ratio `n_from / n_to` between the medium the ray is
/// leaving and the one it is entering. Both directions are expected to be
/// unit length; the output is then unit length as well.
pub fn refract(
    incidence: &Vector3<f64>,
    normal: &Vector3<f64>,
    ior: f64,
) -> Result<Vector3<f64>, OpticsError> {
    let c = (-normal).dot(incidence);
    let k = 1.0 - ior * ior * (1.0 - c * c);
    if k < 0.0 {
        return Err(OpticsError::TotalInternalReflection);
    }

    Ok(ior * incidence + (ior * c - k.sqrt()) * normal)
}

/// Reconstructs the unit surface normal consistent with Snell's law, given a
/// unit incidence direction, the unit direction it refracted into, and the
/// relative index ratio `n_from / n_to` across the surface.
///
/// Closed form after Mikš and Novák (2012). The returned normal points back
/// toward the incoming medium, so feeding it to [`refract`] with the same
/// `incidence` and `ior` reproduces `refraction`. Parallel input directions
/// resolve to `-incidence`; anti-parallel pairs and bends steeper than the
/// index ratio allows are rejected.
pub fn normal_from(
    incidence: &Vector3<f64>,
    refraction: &Vector3<f64>,
    ior: f64,
) -> Result<Vector3<f64>, OpticsError> {
    check_normalized(incidence)?;
    check_normalized(refraction)?;

    let dot_ir = incidence.dot(refraction);
    let q = 1.0 + ior * ior - 2.0 * ior * dot_ir;
    if q <= f64::EPSILON {
        // index ratio of one with no bend between the directions
        return Err(OpticsError::DegenerateDirections);
    }

    let k = (dot_ir - ior).abs() / q.sqrt();
    let s = 1.0 - ior * ior * (1.0 - k * k);
    if s < 0.0 {
        return Err(OpticsError::TotalInternalReflection);
    }

    let denom = s.sqrt() - ior * k;
    if denom.abs() <= 1e-9 {
        return Err(OpticsError::DegenerateDirections);
    }

    let normal = -(refraction - ior * incidence) / denom;

    let length = normal.norm();
    if !length.is_finite() || (length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
        return Err(OpticsError::DegenerateDirections);
    }

    Ok(normal)
}

fn check_normalized(direction: &Vector3<f64>) -> Result<(), OpticsError> {
    let length = direction.norm();
    if (length - 1.0).abs() > UNIT_LENGTH_TOLERANCE {
        return Err(OpticsError::NotNormalized { length });
    }

    Ok(())
}
