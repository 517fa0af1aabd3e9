//! Planar shapes.
//!
//! Each type reports an area and a perimeter; see [`crate::Planar`].

mod rectangle;
mod triangle;

pub use rectangle::Rectangle;
pub use triangle::Triangle;
