//! The trait shared by everything built out of points.

use crate::error::Result;
use crate::point::{PointHandle, PointRegistry};
use crate::scene::Scene;

/// A composite that owns the points it put on screen.
///
/// Lines, shapes, text and menus implement this so callers can take any of
/// them off screen the same way.
pub trait Figure {
    /// The handles of the points currently owned.
    fn handles(&self) -> &[PointHandle];

    /// Take every owned point out of the scene.
    ///
    /// Removing twice is harmless: handles that are already inactive are
    /// skipped.
    fn remove(&mut self, scene: &mut Scene) -> Result<()>;

    /// Whether any owned point is live.
    fn is_visible(&self) -> bool {
        self.handles().iter().any(PointHandle::is_active)
    }

    /// Number of points owned.
    fn point_count(&self) -> usize {
        self.handles().len()
    }
}

/// Remove every active handle from `registry`, skipping inactive ones.
pub(crate) fn remove_all(handles: &mut [PointHandle], registry: &mut PointRegistry) -> Result<()> {
    for handle in handles.iter_mut().filter(|h| h.is_active()) {
        handle.remove(registry)?;
    }
    Ok(())
}
