//! Closed right circular cylinder.

use crate::precision::PI_APPROX;
use crate::Spatial;

/// A cylinder with both end caps.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cylinder {
    radius: f64,
    height: f64,
}

impl Cylinder {
    /// Creates a cylinder. Dimensions are not validated.
    #[inline]
    pub const fn new(radius: f64, height: f64) -> Self {
        Self { radius, height }
    }

    /// Returns the radius.
    #[inline]
    pub const fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn volume(&self) -> f64 {
        PI_APPROX * self.radius.powi(2) * self.height
    }

    /// Side plus both caps: `2 * pi * r * (r + h)`.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        2.0 * PI_APPROX * self.radius * (self.radius + self.height)
    }
}

impl Spatial for Cylinder {
    fn volume(&self) -> f64 {
        Cylinder::volume(self)
    }

    fn surface_area(&self) -> f64 {
        Cylinder::surface_area(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_basic() {
        let cyl = Cylinder::new(5.0, 12.0);
        assert_eq!(cyl.radius(), 5.0);
        assert_eq!(cyl.height(), 12.0);
    }

    #[test]
    fn test_cylinder_unit() {
        let cyl = Cylinder::new(1.0, 1.0);
        assert!((cyl.volume() - 3.14159).abs() < 1e-12);
        assert!((cyl.surface_area() - 12.56636).abs() < 1e-10);
    }

    #[test]
    fn test_cylinder_disc() {
        let disc = Cylinder::new(3.0, 0.0);
        assert_eq!(disc.volume(), 0.0);
        assert!((disc.surface_area() - 2.0 * 3.14159 * 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_cylinder_line() {
        let line = Cylinder::new(0.0, 5.0);
        assert_eq!(line.volume(), 0.0);
        assert_eq!(line.surface_area(), 0.0);
    }
}
