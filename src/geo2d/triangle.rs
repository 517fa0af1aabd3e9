//! Triangle given by its three side lengths.

use crate::{GeoError, Planar, Result};

/// A triangle described by side lengths `a`, `b`, `c`.
///
/// The triangle inequality is not checked at construction; an impossible
/// triangle only surfaces as an error from [`Triangle::area`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    a: f64,
    b: f64,
    c: f64,
}

impl Triangle {
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub const fn a(&self) -> f64 {
        self.a
    }

    #[inline]
    pub const fn b(&self) -> f64 {
        self.b
    }

    #[inline]
    pub const fn c(&self) -> f64 {
        self.c
    }

    /// Half the perimeter.
    #[inline]
    pub fn semi_perimeter(&self) -> f64 {
        (self.a + self.b + self.c) / 2.0
    }

    /// Computes the area with Heron's formula.
    ///
    /// Fails with [`GeoError::NegativeRadicand`] when the sides cannot
    /// form a triangle.
    pub fn area(&self) -> Result<f64> {
        let s = self.semi_perimeter();
        let radicand = s * (s - self.a) * (s - self.b) * (s - self.c);
        if radicand < 0.0 {
            tracing::debug!(a = self.a, b = self.b, c = self.c, radicand, "heron radicand is negative");
            return Err(GeoError::NegativeRadicand {
                a: self.a,
                b: self.b,
                c: self.c,
                radicand,
            });
        }
        Ok(radicand.sqrt())
    }

    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.a + self.b + self.c
    }
}

impl Planar for Triangle {
    fn area(&self) -> Result<f64> {
        Triangle::area(self)
    }

    fn perimeter(&self) -> f64 {
        Triangle::perimeter(self)
    }
}
