//! Scene: the registries and active field shared by everything on screen.
//!
//! Every constructor that puts points on screen takes a `&mut Scene`, so two
//! scenes never see each other's points and tests can build as many as they
//! like.

use crate::buffer::{Cell, Color};
use crate::error::{Error, Result};
use crate::point::{Point, PointHandle, PointRegistry};
use crate::style::{ColorId, ColorPair, ColorRegistry, Font, FontId, FontRegistry};
use crate::terminal::Backend;

/// What happened during one redraw pass.
#[derive(Debug, Default)]
pub struct FrameStats {
    /// Points drawn.
    pub drawn: usize,
    /// Live points skipped because they belong to another field.
    pub other_field: usize,
    /// The error that stopped the pass early, if any.
    pub aborted: Option<Error>,
}

/// Colors, fonts, live points and the field currently shown.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    colors: ColorRegistry,
    fonts: FontRegistry,
    points: PointRegistry,
    active_field: u32,
}

impl Scene {
    /// An empty scene showing field 0.
    pub const fn new() -> Self {
        Self {
            colors: ColorRegistry::new(),
            fonts: FontRegistry::new(),
            points: PointRegistry::new(),
            active_field: 0,
        }
    }

    /// Register a foreground/background pair.
    pub fn add_color(&mut self, fg: Color, bg: Color) -> Result<ColorId> {
        self.colors.register(ColorPair::new(fg, bg))
    }

    /// Register a font. Its color pair must already be registered.
    pub fn add_font(&mut self, font: Font) -> Result<FontId> {
        if self.colors.get(font.color).is_none() {
            return Err(Error::UnknownColor(font.color));
        }
        self.fonts.register(font)
    }

    /// Check that a point's font, if any, is registered.
    pub fn check_font(&self, font: Option<FontId>) -> Result<()> {
        match font {
            Some(id) if !self.fonts.contains(id) => Err(Error::UnknownFont(id)),
            _ => Ok(()),
        }
    }

    /// Register a point and return the handle that owns its registration.
    pub fn spawn(&mut self, point: Point) -> Result<PointHandle> {
        self.check_font(point.font)?;
        Ok(PointHandle::spawn(point, &mut self.points))
    }

    /// The color registry.
    pub const fn colors(&self) -> &ColorRegistry {
        &self.colors
    }

    /// The font registry.
    pub const fn fonts(&self) -> &FontRegistry {
        &self.fonts
    }

    /// The live-point registry.
    pub const fn points(&self) -> &PointRegistry {
        &self.points
    }

    /// Mutable access to the live-point registry.
    pub const fn points_mut(&mut self) -> &mut PointRegistry {
        &mut self.points
    }

    /// The field whose points are drawn.
    pub const fn active_field(&self) -> u32 {
        self.active_field
    }

    /// Switch the field whose points are drawn.
    pub fn set_active_field(&mut self, field: u32) {
        tracing::debug!(field, "active field changed");
        self.active_field = field;
    }

    /// The cell a point draws as.
    pub fn cell_for(&self, point: &Point) -> Result<Cell> {
        let cell = Cell::new(point.ch);
        let Some(id) = point.font else {
            return Ok(cell);
        };
        let font = self.fonts.get(id).ok_or(Error::UnknownFont(id))?;
        let (fg, bg, attributes) = font.resolve(&self.colors)?;
        Ok(cell.with_fg(fg).with_bg(bg).with_attributes(attributes))
    }

    /// Draw one frame: clear, draw the live points of the active field, flip.
    ///
    /// A failing point (off screen, dangling font) is logged and ends the
    /// pass; the points drawn before it still reach the screen. Only the
    /// final flush can make this return an error.
    pub fn redraw<B: Backend + ?Sized>(&self, backend: &mut B) -> Result<FrameStats> {
        backend.clear();
        let mut stats = FrameStats::default();
        if let Err(err) = self.draw_pass(backend, &mut stats) {
            tracing::warn!(error = %err, drawn = stats.drawn, "redraw pass abandoned");
            stats.aborted = Some(err);
        }
        backend.flush()?;
        Ok(stats)
    }

    fn draw_pass<B: Backend + ?Sized>(&self, backend: &mut B, stats: &mut FrameStats) -> Result<()> {
        for (_, point) in self.points.live() {
            if point.field != self.active_field {
                stats.other_field += 1;
                continue;
            }
            backend.draw(point.x, point.y, self.cell_for(point)?)?;
            stats.drawn += 1;
        }
        Ok(())
    }
}
