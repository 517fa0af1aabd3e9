//! Sphere given by its radius.

use crate::precision::PI_APPROX;
use crate::Spatial;

/// A sphere.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sphere {
    radius: f64,
}

impl Sphere {
    /// Creates a sphere. The radius is not validated.
    #[inline]
    pub const fn new(radius: f64) -> Self {
        Self { radius }
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Computes the volume of the sphere.
    #[inline]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI_APPROX * self.radius.powi(3)
    }

    /// Computes the area of the sphere.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        4.0 * PI_APPROX * self.radius.powi(2)
    }
}

impl Spatial for Sphere {
    fn volume(&self) -> f64 {
        Sphere::volume(self)
    }

    fn surface_area(&self) -> f64 {
        Sphere::surface_area(self)
    }
}
