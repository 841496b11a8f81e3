//! Point: one character cell, and the handle that tracks whether it is live.

use super::registry::{PointId, PointRegistry};
use crate::error::{Error, Result};
use crate::style::FontId;

/// A character at a screen position, drawn only while its field is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    /// Character to draw.
    pub ch: char,
    /// Column.
    pub x: u16,
    /// Row.
    pub y: u16,
    /// Field (screen page) the point belongs to.
    pub field: u32,
    /// Font to draw with; `None` uses the terminal default.
    pub font: Option<FontId>,
}

impl Point {
    /// Create a point without a font.
    pub const fn new(ch: char, x: u16, y: u16, field: u32) -> Self {
        Self {
            ch,
            x,
            y,
            field,
            font: None,
        }
    }

    /// Set the font (builder pattern).
    #[must_use]
    pub const fn with_font(mut self, font: Option<FontId>) -> Self {
        self.font = font;
        self
    }
}

/// Owner-side record of a point and its registration.
///
/// The point is in the registry exactly while `is_active()` returns true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointHandle {
    point: Point,
    id: Option<PointId>,
}

impl PointHandle {
    /// Wrap a point without registering it.
    pub const fn new(point: Point) -> Self {
        Self { point, id: None }
    }

    /// Wrap a point and register it straight away.
    pub fn spawn(point: Point, registry: &mut PointRegistry) -> Self {
        let mut handle = Self::new(point);
        handle.activate(registry);
        handle
    }

    /// The wrapped point.
    pub const fn point(&self) -> &Point {
        &self.point
    }

    /// Registration number while active.
    pub const fn id(&self) -> Option<PointId> {
        self.id
    }

    /// Whether the point is currently registered.
    pub const fn is_active(&self) -> bool {
        self.id.is_some()
    }

    /// Register the point if it is not already live.
    ///
    /// Activating an active point is a no-op returning the existing id.
    pub fn activate(&mut self, registry: &mut PointRegistry) -> PointId {
        if let Some(id) = self.id {
            tracing::debug!(point = %id, "point already activated");
            return id;
        }
        let id = registry.register(self.point);
        self.id = Some(id);
        id
    }

    /// Take the point out of the registry.
    ///
    /// Fails with [`Error::Inactive`] when the handle was never activated or
    /// already removed. The handle becomes inactive, so a later `activate`
    /// registers it once.
    pub fn remove(&mut self, registry: &mut PointRegistry) -> Result<()> {
        let id = self.id.take().ok_or(Error::Inactive)?;
        registry.remove(id)?;
        Ok(())
    }
}
