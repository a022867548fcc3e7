mod plane;
mod prism;
mod ray;

pub use plane::*;
pub use prism::*;
pub use ray::*;
