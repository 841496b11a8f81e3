//! Headless backend: an in-memory screen fed by a script of key presses.
//!
//! Used by the tests and by callers that want to render a scene without a
//! TTY (snapshots, benchmarks).

use super::backend::Backend;
use crate::buffer::{Buffer, Cell};
use crate::error::{Error, Result};
use crate::input::Key;
use std::collections::VecDeque;

/// An off-screen terminal.
#[derive(Debug, Clone)]
pub struct HeadlessBackend {
    /// Frame being drawn.
    next: Buffer,
    /// Last flushed frame.
    screen: Buffer,
    keys: VecDeque<Key>,
    cursor: Option<(u16, u16)>,
    flushes: usize,
}

impl HeadlessBackend {
    /// Create a screen of `width` x `height` cells.
    ///
    /// # Panics
    /// Panics if width or height is 0.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            next: Buffer::new(width, height),
            screen: Buffer::new(width, height),
            keys: VecDeque::new(),
            cursor: None,
            flushes: 0,
        }
    }

    /// Queue key presses for [`read_key`](Backend::read_key) (builder pattern).
    #[must_use]
    pub fn with_keys<I>(mut self, keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.push_keys(keys);
        self
    }

    /// Queue more key presses.
    pub fn push_keys<I>(&mut self, keys: I)
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        self.keys.extend(keys.into_iter().map(Into::into));
    }

    /// Queue the characters of `text` as key presses.
    pub fn type_text(&mut self, text: &str) {
        self.keys.extend(text.chars().map(Key::char));
    }

    /// The last flushed frame.
    pub const fn screen(&self) -> &Buffer {
        &self.screen
    }

    /// Row `y` of the last flushed frame as text.
    pub fn row(&self, y: u16) -> String {
        self.screen.row_text(y).unwrap_or_default()
    }

    /// Cursor position as of the last `set_cursor`.
    pub const fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }

    /// How many frames have been flushed.
    pub const fn flushes(&self) -> usize {
        self.flushes
    }

    /// Change the screen size, keeping content where it still fits.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.next.resize(width, height);
        self.screen.resize(width, height);
    }

    /// Key presses not consumed yet.
    pub fn pending_keys(&self) -> usize {
        self.keys.len()
    }
}

impl Backend for HeadlessBackend {
    fn size(&self) -> (u16, u16) {
        (self.next.width(), self.next.height())
    }

    fn clear(&mut self) {
        self.next.clear();
    }

    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<()> {
        self.next.put(x, y, cell).map(|_| ())
    }

    fn set_cursor(&mut self, position: Option<(u16, u16)>) {
        self.cursor = position;
    }

    fn flush(&mut self) -> Result<()> {
        self.screen.copy_from(&self.next);
        self.flushes += 1;
        Ok(())
    }

    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or(Error::InputClosed)
    }
}
