//! Multi-line text placed as a shape.

use super::blueprint::{split_lines, text_to_blueprint};
use super::shape::Shape;
use super::traits::Figure;
use crate::error::Result;
use crate::point::PointHandle;
use crate::scene::Scene;
use crate::style::FontId;

/// A block of text whose points can be hidden and shown again.
///
/// While hidden the text keeps its content and placement but owns no
/// points; `show` rebuilds them.
#[derive(Debug)]
pub struct Text {
    x: u16,
    y: u16,
    text: String,
    field: u32,
    font: Option<FontId>,
    shape: Option<Shape>,
}

impl Text {
    /// Lay out `text` with its top-left corner at `(x, y)`.
    pub fn new(
        x: u16,
        y: u16,
        text: impl Into<String>,
        field: u32,
        font: Option<FontId>,
        scene: &mut Scene,
    ) -> Result<Self> {
        let mut this = Self {
            x,
            y,
            text: text.into(),
            field,
            font,
            shape: None,
        };
        this.show(scene)?;
        tracing::debug!(x, y, field, "created text");
        Ok(this)
    }

    /// Take the points off screen, keeping the text.
    pub fn hide(&mut self, scene: &mut Scene) -> Result<()> {
        if let Some(mut shape) = self.shape.take() {
            shape.remove(scene)?;
        }
        Ok(())
    }

    /// Rebuild the points if hidden. Does nothing when already shown.
    pub fn show(&mut self, scene: &mut Scene) -> Result<()> {
        if self.shape.is_none() {
            let blueprint = text_to_blueprint(&self.text, self.font);
            self.shape = Some(Shape::new(&blueprint, self.x, self.y, self.field, scene)?);
        }
        Ok(())
    }

    /// Replace the text, rebuilding the points if currently shown.
    pub fn set_text(&mut self, text: impl Into<String>, scene: &mut Scene) -> Result<()> {
        let shown = self.shape.is_some();
        self.hide(scene)?;
        self.text = text.into();
        if shown {
            self.show(scene)?;
        }
        Ok(())
    }

    /// The current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Column of the top-left corner.
    pub const fn x(&self) -> u16 {
        self.x
    }

    /// Row of the top-left corner.
    pub const fn y(&self) -> u16 {
        self.y
    }

    /// Characters in the longest line.
    pub fn width(&self) -> u16 {
        let widest = split_lines(&self.text).map(|line| line.chars().count()).max().unwrap_or(0);
        u16::try_from(widest).unwrap_or(u16::MAX)
    }

    /// Number of lines.
    pub fn height(&self) -> u16 {
        u16::try_from(split_lines(&self.text).count()).unwrap_or(u16::MAX)
    }
}

impl Figure for Text {
    fn handles(&self) -> &[PointHandle] {
        match &self.shape {
            Some(shape) => shape.handles(),
            None => &[],
        }
    }

    fn remove(&mut self, scene: &mut Scene) -> Result<()> {
        self.hide(scene)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::HeadlessBackend;

    #[test]
    fn renders_lines_at_origin() {
        let mut scene = Scene::new();
        let text = Text::new(1, 0, "ab\ncd", 0, None, &mut scene).unwrap();
        assert_eq!((text.width(), text.height()), (2, 2));
        assert_eq!(text.point_count(), 4);

        let mut backend = HeadlessBackend::new(4, 2);
        scene.redraw(&mut backend).unwrap();
        assert_eq!(backend.row(0), " ab ");
        assert_eq!(backend.row(1), " cd ");
    }

    #[test]
    fn hide_then_show_rebuilds_once() {
        let mut scene = Scene::new();
        let mut text = Text::new(0, 0, "hey", 0, None, &mut scene).unwrap();

        text.hide(&mut scene).unwrap();
        assert!(!text.is_visible());
        assert!(scene.points().is_empty());
        text.hide(&mut scene).unwrap();

        text.show(&mut scene).unwrap();
        text.show(&mut scene).unwrap();
        assert!(text.is_visible());
        assert_eq!(scene.points().len(), 3);
    }

    #[test]
    fn set_text_while_hidden_stays_hidden() {
        let mut scene = Scene::new();
        let mut text = Text::new(0, 0, "one", 0, None, &mut scene).unwrap();
        text.hide(&mut scene).unwrap();

        text.set_text("four", &mut scene).unwrap();
        assert!(scene.points().is_empty());
        text.show(&mut scene).unwrap();
        assert_eq!(scene.points().len(), 4);
    }

    #[test]
    fn set_text_replaces_points() {
        let mut scene = Scene::new();
        let mut text = Text::new(0, 0, "long", 0, None, &mut scene).unwrap();
        text.set_text("ok", &mut scene).unwrap();
        assert_eq!(text.text(), "ok");

        let mut backend = HeadlessBackend::new(4, 1);
        scene.redraw(&mut backend).unwrap();
        assert_eq!(backend.row(0), "ok  ");
    }

    #[test]
    fn crlf_text_draws_like_lf_text() {
        let mut scene = Scene::new();
        let text = Text::new(0, 0, "ab\r\ncd", 0, None, &mut scene).unwrap();
        assert_eq!((text.width(), text.height()), (2, 2));

        let mut backend = HeadlessBackend::new(3, 2);
        scene.redraw(&mut backend).unwrap();
        assert_eq!(backend.row(0), "ab ");
        assert_eq!(backend.row(1), "cd ");
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let mut scene = Scene::new();
        let text = Text::new(0, 0, "", 0, None, &mut scene).unwrap();
        assert_eq!((text.width(), text.height()), (0, 1));
        assert_eq!(text.point_count(), 0);
    }
}
