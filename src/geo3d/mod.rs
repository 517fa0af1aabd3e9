//! Solid shapes.
//!
//! Each type reports a volume and a surface area; see [`crate::Spatial`].
//! `Sphere` and `Cylinder` use [`crate::PI_APPROX`] rather than `f64::consts::PI`.

mod cuboid;
mod cylinder;
mod pyramid;
mod sphere;

pub use cuboid::Cuboid;
pub use cylinder::Cylinder;
pub use pyramid::Pyramid;
pub use sphere::Sphere;
