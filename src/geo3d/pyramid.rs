//! Pyramid over a rectangular base.

use crate::Spatial;

/// A right pyramid with a `base_width` x `base_depth` base and an apex
/// `height` above the base centre.
///
/// The lateral area uses one slant height, measured across `base_width`,
/// for all four triangular faces.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pyramid {
    base_width: f64,
    base_depth: f64,
    height: f64,
}

impl Pyramid {
    /// Creates a pyramid. Dimensions are not validated.
    #[inline]
    pub const fn new(base_width: f64, base_depth: f64, height: f64) -> Self {
        Self {
            base_width,
            base_depth,
            height,
        }
    }

    /// Returns the base width.
    #[inline]
    pub const fn base_width(&self) -> f64 {
        self.base_width
    }

    /// Returns the base depth.
    #[inline]
    pub const fn base_depth(&self) -> f64 {
        self.base_depth
    }

    /// Returns the height.
    #[inline]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Returns the base area.
    #[inline]
    pub fn base_area(&self) -> f64 {
        self.base_width * self.base_depth
    }

    /// Distance from the apex to the midpoint of a base edge,
    /// `sqrt((base_width / 2)^2 + height^2)`.
    #[inline]
    pub fn slant_height(&self) -> f64 {
        ((self.base_width / 2.0).powi(2) + self.height.powi(2)).sqrt()
    }

    /// Computes the volume: `base_width * base_depth * height / 3`.
    #[inline]
    pub fn volume(&self) -> f64 {
        1.0 / 3.0 * self.base_width * self.base_depth * self.height
    }

    /// Computes the surface area: base plus
    /// `2 * (base_width * slant + base_depth * slant)`.
    ///
    /// A flat pyramid (`height == 0`) has no lateral faces and reports the
    /// base area alone.
    pub fn surface_area(&self) -> f64 {
        let base_area = self.base_area();
        if self.height == 0.0 {
            return base_area;
        }
        let slant_height = self.slant_height();
        let lateral_area =
            2.0 * (self.base_width * slant_height + self.base_depth * slant_height);
        base_area + lateral_area
    }
}

impl Spatial for Pyramid {
    fn volume(&self) -> f64 {
        Pyramid::volume(self)
    }

    fn surface_area(&self) -> f64 {
        Pyramid::surface_area(self)
    }
}
