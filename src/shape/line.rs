//! Straight runs of one character.

use super::traits::{remove_all, Figure};
use crate::error::Result;
use crate::point::{Point, PointHandle};
use crate::scene::Scene;
use crate::style::FontId;
use std::ops::Range;

/// A horizontal run of `ch` over a half-open column range on one row.
#[derive(Debug)]
pub struct HLine {
    points: Vec<PointHandle>,
}

impl HLine {
    /// Put one point on every column of `x` at row `y`.
    pub fn new(
        x: Range<u16>,
        y: u16,
        ch: char,
        field: u32,
        font: Option<FontId>,
        scene: &mut Scene,
    ) -> Result<Self> {
        scene.check_font(font)?;
        let points = x
            .map(|col| scene.spawn(Point::new(ch, col, y, field).with_font(font)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(y, len = points.len(), "made horizontal line");
        Ok(Self { points })
    }
}

impl Figure for HLine {
    fn handles(&self) -> &[PointHandle] {
        &self.points
    }

    fn remove(&mut self, scene: &mut Scene) -> Result<()> {
        remove_all(&mut self.points, scene.points_mut())
    }
}

/// A vertical run of `ch` over a half-open row range in one column.
#[derive(Debug)]
pub struct VLine {
    points: Vec<PointHandle>,
}

impl VLine {
    /// Put one point on every row of `y` at column `x`.
    pub fn new(
        x: u16,
        y: Range<u16>,
        ch: char,
        field: u32,
        font: Option<FontId>,
        scene: &mut Scene,
    ) -> Result<Self> {
        scene.check_font(font)?;
        let points = y
            .map(|row| scene.spawn(Point::new(ch, x, row, field).with_font(font)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(x, len = points.len(), "made vertical line");
        Ok(Self { points })
    }
}

impl Figure for VLine {
    fn handles(&self) -> &[PointHandle] {
        &self.points
    }

    fn remove(&mut self, scene: &mut Scene) -> Result<()> {
        remove_all(&mut self.points, scene.points_mut())
    }
}
