//! The live-point registry walked by every redraw.

use super::point::Point;
use crate::error::{Error, Result};
use std::fmt;

/// Registration number of a live point.
///
/// Handed out from 1 upward by [`PointRegistry::register`]; a counter, so a
/// point that is removed and registered again gets a new number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointId(u64);

impl PointId {
    /// The raw sequence number.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Ordered list of the points currently on screen.
///
/// Removal is a linear search, matching how rarely it happens compared to
/// the per-frame walk.
#[derive(Debug, Default, Clone)]
pub struct PointRegistry {
    live: Vec<(PointId, Point)>,
    registered: u64,
}

impl PointRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self {
            live: Vec::new(),
            registered: 0,
        }
    }

    /// Append `point` to the live list and return its sequence number.
    pub fn register(&mut self, point: Point) -> PointId {
        self.registered += 1;
        let id = PointId(self.registered);
        self.live.push((id, point));
        tracing::debug!(point = %id, x = point.x, y = point.y, "registered point");
        id
    }

    /// Remove the entry registered under `id`.
    pub fn remove(&mut self, id: PointId) -> Result<Point> {
        let index = self
            .live
            .iter()
            .position(|(live_id, _)| *live_id == id)
            .ok_or(Error::NotRegistered(id))?;
        let (_, point) = self.live.remove(index);
        tracing::debug!(point = %id, "removed point");
        Ok(point)
    }

    /// Check whether `id` is live.
    pub fn contains(&self, id: PointId) -> bool {
        self.live.iter().any(|(live_id, _)| *live_id == id)
    }

    /// Look up a live point.
    pub fn get(&self, id: PointId) -> Option<&Point> {
        self.live
            .iter()
            .find(|(live_id, _)| *live_id == id)
            .map(|(_, point)| point)
    }

    /// Iterate live points in registration order.
    pub fn live(&self) -> impl Iterator<Item = (PointId, &Point)> {
        self.live.iter().map(|(id, point)| (*id, point))
    }

    /// Number of live points.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Whether no point is live.
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// How many registrations have happened so far (the last id handed out).
    pub const fn registered_total(&self) -> u64 {
        self.registered
    }
}
