//! Boxed option list with an arrow-key cursor.

use crate::error::{Error, Result};
use crate::input::KeyCode;
use crate::point::{Point, PointHandle};
use crate::scene::Scene;
use crate::shape::{remove_all, text_to_blueprint, Figure};
use crate::style::FontId;
use crate::terminal::Backend;

/// Character drawn next to the selected option.
pub const CURSOR: char = '>';

/// A framed list of options, one of which is selected.
///
/// ```text
/// ┌──────────┐
/// │> Start   │
/// │  Options │
/// │  Quit    │
/// └──────────┘
/// ```
#[derive(Debug)]
pub struct MenuBox {
    x: u16,
    y: u16,
    field: u32,
    font: Option<FontId>,
    options: Vec<String>,
    selected: usize,
    /// Frame points followed by the cursor point.
    points: Vec<PointHandle>,
}

impl MenuBox {
    /// Draw the frame at `(x, y)` with the cursor on the first option.
    pub fn new<I, S>(
        x: u16,
        y: u16,
        options: I,
        field: u32,
        font: Option<FontId>,
        scene: &mut Scene,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let options: Vec<String> = options.into_iter().map(Into::into).collect();
        scene.check_font(font)?;
        let mut points = text_to_blueprint(&frame_text(&options), font)
            .entries()
            .iter()
            .map(|entry| {
                let point = Point::new(
                    entry.ch,
                    x.saturating_add(entry.pos.x),
                    y.saturating_add(entry.pos.y),
                    field,
                )
                .with_font(font);
                scene.spawn(point)
            })
            .collect::<Result<Vec<_>>>()?;
        points.push(scene.spawn(cursor_point(x, y, 0, field, font))?);
        tracing::debug!(x, y, options = options.len(), "made menu box");
        Ok(Self {
            x,
            y,
            field,
            font,
            options,
            selected: 0,
            points,
        })
    }

    /// The options, in display order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the selected option.
    pub const fn selected(&self) -> usize {
        self.selected
    }

    /// Move the cursor to `index`, wrapping past either end.
    pub fn set_selected(&mut self, index: usize, scene: &mut Scene) -> Result<()> {
        if self.options.is_empty() {
            return Err(Error::EmptyMenu);
        }
        self.selected = index % self.options.len();
        self.place_cursor(scene)
    }

    /// Block until Enter, moving the selection with Up and Down.
    ///
    /// Redraws before every key read. Returns the option selected when Enter
    /// was pressed.
    pub fn capture<B: Backend + ?Sized>(&mut self, scene: &mut Scene, backend: &mut B) -> Result<String> {
        let count = self.options.len();
        if count == 0 {
            return Err(Error::EmptyMenu);
        }
        loop {
            scene.redraw(backend)?;
            match backend.read_key()?.code {
                KeyCode::Up => self.selected = (self.selected + count - 1) % count,
                KeyCode::Down => self.selected = (self.selected + 1) % count,
                KeyCode::Enter => break,
                _ => continue,
            }
            self.place_cursor(scene)?;
        }
        let choice = self.options[self.selected].clone();
        tracing::info!(index = self.selected, %choice, "menu option chosen");
        Ok(choice)
    }

    fn place_cursor(&mut self, scene: &mut Scene) -> Result<()> {
        let point = cursor_point(self.x, self.y, self.selected, self.field, self.font);
        let Some(cursor) = self.points.last_mut() else {
            return Ok(());
        };
        if cursor.is_active() {
            cursor.remove(scene.points_mut())?;
        }
        *cursor = scene.spawn(point)?;
        Ok(())
    }
}

impl Figure for MenuBox {
    fn handles(&self) -> &[PointHandle] {
        &self.points
    }

    fn remove(&mut self, scene: &mut Scene) -> Result<()> {
        remove_all(&mut self.points, scene.points_mut())
    }
}

fn cursor_point(x: u16, y: u16, selected: usize, field: u32, font: Option<FontId>) -> Point {
    let row = u16::try_from(selected).unwrap_or(u16::MAX);
    Point::new(CURSOR, x.saturating_add(1), y.saturating_add(1).saturating_add(row), field).with_font(font)
}

/// Box-drawing frame around the options with a two-column cursor gutter.
fn frame_text(options: &[String]) -> String {
    let longest = options.iter().map(|o| o.chars().count()).max().unwrap_or(0);
    let inner = longest + 4;
    let edge = "─".repeat(inner);

    let mut text = format!("┌{edge}┐");
    for option in options {
        text.push_str(&format!("\n│  {option:<width$}│", width = longest + 2));
    }
    text.push_str(&format!("\n└{edge}┘"));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;
    use crate::terminal::HeadlessBackend;

    fn menu(scene: &mut Scene) -> MenuBox {
        MenuBox::new(0, 0, ["Start", "Options", "Quit"], 0, None, scene).unwrap()
    }

    #[test]
    fn frame_layout() {
        let mut scene = Scene::new();
        let _menu = menu(&mut scene);
        let mut backend = HeadlessBackend::new(13, 5);
        scene.redraw(&mut backend).unwrap();

        assert_eq!(backend.row(0), "┌───────────┐");
        assert_eq!(backend.row(1), "│> Start    │");
        assert_eq!(backend.row(2), "│  Options  │");
        assert_eq!(backend.row(3), "│  Quit     │");
        assert_eq!(backend.row(4), "└───────────┘");
    }

    #[test]
    fn enter_returns_selected_option() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);
        let mut backend = HeadlessBackend::new(13, 5).with_keys([KeyCode::Down, KeyCode::Enter]);

        assert_eq!(menu.capture(&mut scene, &mut backend).unwrap(), "Options");
        assert_eq!(menu.selected(), 1);
        // one redraw per key read
        assert_eq!(backend.flushes(), 2);
    }

    #[test]
    fn down_wraps_to_first() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);
        let mut backend = HeadlessBackend::new(13, 5)
            .with_keys([KeyCode::Down, KeyCode::Down, KeyCode::Down, KeyCode::Enter]);

        assert_eq!(menu.capture(&mut scene, &mut backend).unwrap(), "Start");
    }

    #[test]
    fn up_wraps_to_last() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);
        let mut backend = HeadlessBackend::new(13, 5).with_keys([KeyCode::Up, KeyCode::Enter]);

        assert_eq!(menu.capture(&mut scene, &mut backend).unwrap(), "Quit");
        scene.redraw(&mut backend).unwrap();
        assert_eq!(backend.row(3), "│> Quit     │");
        assert_eq!(backend.row(1), "│  Start    │");
    }

    #[test]
    fn other_keys_only_redraw() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);
        let mut backend = HeadlessBackend::new(13, 5).with_keys([Key::char('q'), KeyCode::Enter.into()]);

        assert_eq!(menu.capture(&mut scene, &mut backend).unwrap(), "Start");
        assert_eq!(backend.flushes(), 2);
    }

    #[test]
    fn input_ending_early_is_an_error() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);
        let mut backend = HeadlessBackend::new(13, 5).with_keys([KeyCode::Down]);

        assert!(matches!(menu.capture(&mut scene, &mut backend), Err(Error::InputClosed)));
    }

    #[test]
    fn empty_menu_cannot_capture() {
        let mut scene = Scene::new();
        let mut menu = MenuBox::new(0, 0, Vec::<String>::new(), 0, None, &mut scene).unwrap();
        let mut backend = HeadlessBackend::new(6, 3).with_keys([KeyCode::Enter]);

        assert!(matches!(menu.capture(&mut scene, &mut backend), Err(Error::EmptyMenu)));
        assert_eq!(backend.pending_keys(), 1);
    }

    #[test]
    fn handles_cover_frame_and_cursor() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);

        // 13 columns by 5 rows of frame, plus the cursor
        assert_eq!(menu.point_count(), 13 * 5 + 1);
        assert_eq!(menu.point_count(), menu.handles().len());
        assert_eq!(menu.handles().len(), scene.points().len());
        assert_eq!(menu.handles().last().unwrap().point().ch, CURSOR);

        menu.set_selected(2, &mut scene).unwrap();
        assert_eq!(menu.handles().len(), scene.points().len());
        let cursor = menu.handles().last().unwrap().point();
        assert_eq!((cursor.x, cursor.y), (1, 3));
    }

    #[test]
    fn set_selected_wraps_and_remove_clears() {
        let mut scene = Scene::new();
        let mut menu = menu(&mut scene);
        menu.set_selected(4, &mut scene).unwrap();
        assert_eq!(menu.selected(), 1);

        menu.remove(&mut scene).unwrap();
        assert!(!menu.is_visible());
        assert!(scene.points().is_empty());
    }
}
