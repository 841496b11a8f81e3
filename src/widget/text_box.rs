//! Single-line text entry after a prompt.

use crate::error::Result;
use crate::input::KeyCode;
use crate::scene::Scene;
use crate::shape::{Figure, Text};
use crate::style::FontId;
use crate::terminal::Backend;

/// A prompt followed by an editable line, read by [`capture`](Self::capture).
///
/// Nothing is on screen until `capture` runs; both the prompt and the typed
/// text are taken off screen again when it returns.
#[derive(Debug, Clone)]
pub struct SingleLineTextBox {
    x: u16,
    y: u16,
    prompt: String,
    field: u32,
    font: Option<FontId>,
    only_numbers: bool,
    max_len: Option<usize>,
}

impl SingleLineTextBox {
    /// A box whose prompt starts at `(x, y)`.
    pub fn new(x: u16, y: u16, prompt: impl Into<String>, field: u32, font: Option<FontId>) -> Self {
        Self {
            x,
            y,
            prompt: prompt.into(),
            field,
            font,
            only_numbers: false,
            max_len: None,
        }
    }

    /// Accept only ASCII digits (builder pattern).
    #[must_use]
    pub const fn only_numbers(mut self, only_numbers: bool) -> Self {
        self.only_numbers = only_numbers;
        self
    }

    /// Cap the number of characters typed (builder pattern).
    #[must_use]
    pub const fn max_len(mut self, max_len: Option<usize>) -> Self {
        self.max_len = max_len;
        self
    }

    /// Read a line of text.
    ///
    /// Backspace deletes the last character; Enter or Esc ends the capture.
    /// Characters typed with Ctrl or Alt held, and non-digits in numeric
    /// mode, are ignored. The hardware cursor sits after the typed text.
    pub fn capture<B: Backend + ?Sized>(&self, scene: &mut Scene, backend: &mut B) -> Result<String> {
        let mut prompt = Text::new(self.x, self.y, self.prompt.as_str(), self.field, self.font, scene)?;
        let input_x = self.x.saturating_add(prompt.width());
        let mut input = Text::new(input_x, self.y, "", self.field, self.font, scene)?;

        let result = self.edit(&mut input, input_x, scene, backend);

        input.remove(scene)?;
        prompt.remove(scene)?;
        backend.set_cursor(None);
        let text = result?;
        tracing::debug!(len = text.chars().count(), "text box captured");
        Ok(text)
    }

    /// Read a line in numeric mode and parse it.
    ///
    /// Returns `None` when nothing was typed or the number does not fit.
    pub fn capture_number<B: Backend + ?Sized>(&self, scene: &mut Scene, backend: &mut B) -> Result<Option<u64>> {
        let text = self.clone().only_numbers(true).capture(scene, backend)?;
        Ok(text.parse().ok())
    }

    fn edit<B: Backend + ?Sized>(
        &self,
        input: &mut Text,
        input_x: u16,
        scene: &mut Scene,
        backend: &mut B,
    ) -> Result<String> {
        let mut buffer = String::new();
        loop {
            let col = u16::try_from(buffer.chars().count()).unwrap_or(u16::MAX);
            backend.set_cursor(Some((input_x.saturating_add(col), self.y)));
            scene.redraw(backend)?;

            let key = backend.read_key()?;
            match key.code {
                KeyCode::Enter | KeyCode::Esc => return Ok(buffer),
                KeyCode::Backspace => {
                    buffer.pop();
                }
                KeyCode::Char(c) if !key.modifiers.control && !key.modifiers.alt => {
                    if self.accepts(c, &buffer) {
                        buffer.push(c);
                    }
                }
                _ => {}
            }
            input.set_text(buffer.as_str(), scene)?;
        }
    }

    fn accepts(&self, c: char, buffer: &str) -> bool {
        if self.only_numbers && !c.is_ascii_digit() {
            return false;
        }
        !matches!(self.max_len, Some(max) if buffer.chars().count() >= max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{Key, KeyModifiers};
    use crate::terminal::HeadlessBackend;
    use crate::Error;

    #[test]
    fn typed_text_is_returned_without_enter() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(20, 1);
        backend.type_text("hello");
        backend.push_keys([KeyCode::Enter]);

        let text = SingleLineTextBox::new(0, 0, "Name: ", 0, None)
            .capture(&mut scene, &mut backend)
            .unwrap();
        assert_eq!(text, "hello");
        assert!(scene.points().is_empty());
        assert_eq!(backend.cursor(), None);
    }

    #[test]
    fn text_is_drawn_after_the_prompt() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 1);
        backend.type_text("ab");
        let text_box = SingleLineTextBox::new(1, 0, "> ", 0, None);

        // script runs out before Enter, leaving the last frame on screen
        let err = text_box.capture(&mut scene, &mut backend).unwrap_err();
        assert!(matches!(err, Error::InputClosed));
        assert_eq!(backend.row(0), " > ab     ");
        assert!(scene.points().is_empty());
    }

    #[test]
    fn backspace_truncates() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 1);
        backend.type_text("abc");
        backend.push_keys([KeyCode::Backspace, KeyCode::Backspace, KeyCode::Backspace, KeyCode::Backspace]);
        backend.type_text("z");
        backend.push_keys([KeyCode::Enter]);

        let text = SingleLineTextBox::new(0, 0, "", 0, None)
            .capture(&mut scene, &mut backend)
            .unwrap();
        assert_eq!(text, "z");
    }

    #[test]
    fn numeric_mode_ignores_non_digits() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 1);
        backend.type_text("4x2-");
        backend.push_keys([KeyCode::Enter]);

        let text = SingleLineTextBox::new(0, 0, "#", 0, None)
            .only_numbers(true)
            .capture(&mut scene, &mut backend)
            .unwrap();
        assert_eq!(text, "42");
    }

    #[test]
    fn max_len_stops_appending() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 1);
        backend.type_text("abcdef");
        backend.push_keys([KeyCode::Esc]);

        let text = SingleLineTextBox::new(0, 0, "", 0, None)
            .max_len(Some(3))
            .capture(&mut scene, &mut backend)
            .unwrap();
        assert_eq!(text, "abc");
    }

    #[test]
    fn modified_chars_are_ignored() {
        let mut scene = Scene::new();
        let ctrl_c = Key {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers {
                control: true,
                ..KeyModifiers::NONE
            },
        };
        let mut backend = HeadlessBackend::new(10, 1).with_keys([Key::char('a'), ctrl_c, KeyCode::Enter.into()]);

        let text = SingleLineTextBox::new(0, 0, "", 0, None)
            .capture(&mut scene, &mut backend)
            .unwrap();
        assert_eq!(text, "a");
    }

    #[test]
    fn cursor_hidden_even_when_input_fails() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 2);
        backend.type_text("ab");

        let result = SingleLineTextBox::new(2, 1, "? ", 0, None).capture(&mut scene, &mut backend);
        assert!(result.is_err());
        assert_eq!(backend.cursor(), None);
        assert_eq!(backend.flushes(), 3);
    }

    #[test]
    fn capture_number_parses() {
        let mut scene = Scene::new();
        let mut backend = HeadlessBackend::new(10, 1);
        backend.type_text("1a23");
        backend.push_keys([KeyCode::Enter]);
        backend.push_keys([KeyCode::Enter]);

        let text_box = SingleLineTextBox::new(0, 0, "", 0, None);
        assert_eq!(text_box.capture_number(&mut scene, &mut backend).unwrap(), Some(123));
        assert_eq!(text_box.capture_number(&mut scene, &mut backend).unwrap(), None);
    }
}
