/// Isoplot Core Library - shared shape and transformation logic
///
/// This library provides the stateless core for isometric plotting:
/// vertex rotation, the fixed isometric viewing transform, 2D projection,
/// and JSON shape-library persistence.

pub mod error;
pub mod geometry;
pub mod library;
pub mod projection;
pub mod transform;

// Re-export commonly used types
pub use error::{IsoplotError, Result};
pub use geometry::{Shape, Vertex};
pub use library::ShapeLibrary;
pub use transform::{Axis, RotationState};
