#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(
    clippy::cast_precision_loss,
    clippy::many_single_char_names,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::similar_names
)]

mod core;
mod optics;
mod ray_intersection;
mod utils;

pub use crate::core::{Face, FaceConfiguration, Plane, Prism, PrismConfiguration, Ray};
pub use crate::optics::{normal_from, refract, OpticsError, Refraction, RefractionPath, Setup};
pub use crate::ray_intersection::intersect_plane;
pub use crate::utils::{angle_between, average, rotate_about, up};
