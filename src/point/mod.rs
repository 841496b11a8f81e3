//! Point module: single character cells and the registry of live ones.
//!
//! Points are plain values. A [`PointHandle`] registers its point with a
//! [`PointRegistry`] and remembers the returned [`PointId`] so the owner can
//! take it off screen again.

#[allow(clippy::module_inception)]
mod point;
mod registry;

pub use point::{Point, PointHandle};
pub use registry::{PointId, PointRegistry};
