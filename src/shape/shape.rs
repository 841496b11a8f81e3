//! Shapes built from custom blueprints.

use super::blueprint::Blueprint;
use super::traits::{remove_all, Figure};
use crate::error::{Error, Result};
use crate::point::{Point, PointHandle};
use crate::scene::Scene;

/// The points of a blueprint placed at an origin.
#[derive(Debug)]
pub struct Shape {
    x: u16,
    y: u16,
    field: u32,
    points: Vec<PointHandle>,
}

impl Shape {
    /// Place `blueprint` with its origin at `(x, y)`.
    ///
    /// Only [`Custom`](super::BlueprintKind::Custom) blueprints build
    /// shapes; any other kind fails with [`Error::IncompatibleBlueprint`].
    /// Every font id is checked before the first point is registered, so a
    /// failed build leaves nothing on screen.
    pub fn new(blueprint: &Blueprint, x: u16, y: u16, field: u32, scene: &mut Scene) -> Result<Self> {
        let kind = blueprint.kind();
        if !kind.builds_shapes() {
            tracing::error!(%kind, "blueprint type is incompatible with Shape object");
            return Err(Error::IncompatibleBlueprint { kind: kind.clone() });
        }
        for entry in blueprint.entries() {
            scene.check_font(entry.font)?;
        }

        let points = blueprint
            .entries()
            .iter()
            .map(|entry| {
                let point = Point::new(
                    entry.ch,
                    entry.pos.x.saturating_add(x),
                    entry.pos.y.saturating_add(y),
                    field,
                )
                .with_font(entry.font);
                scene.spawn(point)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(x, y, field, points = points.len(), "created shape");
        Ok(Self { x, y, field, points })
    }

    /// Origin column.
    pub const fn x(&self) -> u16 {
        self.x
    }

    /// Origin row.
    pub const fn y(&self) -> u16 {
        self.y
    }

    /// Field the points belong to.
    pub const fn field(&self) -> u32 {
        self.field
    }
}

impl Figure for Shape {
    fn handles(&self) -> &[PointHandle] {
        &self.points
    }

    fn remove(&mut self, scene: &mut Scene) -> Result<()> {
        remove_all(&mut self.points, scene.points_mut())
    }
}
