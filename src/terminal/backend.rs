//! The seam between the scene and whatever displays it.

use crate::buffer::Cell;
use crate::error::Result;
use crate::input::Key;

/// A screen that can be cleared, drawn into, flipped, and read keys from.
///
/// Drawing goes to an off-screen frame; nothing is visible until
/// [`flush`](Backend::flush).
pub trait Backend {
    /// Screen size as `(columns, rows)`.
    fn size(&self) -> (u16, u16);

    /// Blank the frame being drawn.
    fn clear(&mut self);

    /// Write one cell. Fails with `Error::OutOfBounds` off screen.
    fn draw(&mut self, x: u16, y: u16, cell: Cell) -> Result<()>;

    /// Show the hardware cursor at a position, or hide it with `None`.
    fn set_cursor(&mut self, position: Option<(u16, u16)>);

    /// Commit the drawn frame to the screen.
    fn flush(&mut self) -> Result<()>;

    /// Block until the next key press.
    fn read_key(&mut self) -> Result<Key>;
}
