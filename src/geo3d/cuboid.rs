//! Rectangular box.

use crate::Spatial;

/// A cuboid with width, height and depth.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cuboid {
    width: f64,
    height: f64,
    depth: f64,
}

impl Cuboid {
    /// Creates a cuboid. Dimensions are not validated.
    #[inline]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self { width, height, depth }
    }

    /// Returns the width.
    #[inline]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the depth.
    #[inline]
    pub const fn depth(&self) -> f64 {
        self.depth
    }

    /// Computes the volume.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.depth
    }

    /// Computes the surface area: `2 * (wh + wd + hd)`.
    #[inline]
    pub fn surface_area(&self) -> f64 {
        2.0 * (self.width * self.height + self.width * self.depth + self.height * self.depth)
    }
}

impl Spatial for Cuboid {
    fn volume(&self) -> f64 {
        Cuboid::volume(self)
    }

    fn surface_area(&self) -> f64 {
        Cuboid::surface_area(self)
    }
}
