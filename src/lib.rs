//! geoshapes: area, volume, perimeter and surface area of basic shapes.
//!
//! Planar shapes live in [`geo2d`], solids in [`geo3d`]. Every shape is a
//! plain value type built from its dimensions; the formulas are pure and
//! accept any sign of input without validation.

pub mod geo2d;
pub mod geo3d;
pub mod logging;
pub mod precision;

// Re-exports for convenience
pub use geo2d::{Rectangle, Triangle};
pub use geo3d::{Cuboid, Cylinder, Pyramid, Sphere};
pub use precision::PI_APPROX;

/// Result type for shape computations
pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    /// Heron's formula hit a negative radicand: the sides do not close.
    #[error("math domain error: sides ({a}, {b}, {c}) give negative radicand {radicand}")]
    NegativeRadicand { a: f64, b: f64, c: f64, radicand: f64 },
}

/// A planar shape with an area and a perimeter.
pub trait Planar {
    fn area(&self) -> Result<f64>;
    fn perimeter(&self) -> f64;
}

/// A solid with a volume and a surface area.
pub trait Spatial {
    fn volume(&self) -> f64;
    fn surface_area(&self) -> f64;
}
