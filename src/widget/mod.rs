//! Interactive widgets: blocking key loops over a scene.
//!
//! Each capture redraws the scene before every key read and returns once
//! its terminating key arrives:
//! - [`MenuBox`]: pick one option with Up/Down, confirm with Enter
//! - [`SingleLineTextBox`]: type a line after a prompt
//! - [`capture_cursor`]: move the hardware cursor with the arrow keys

mod cursor;
mod menu_box;
mod text_box;

pub use cursor::{capture_cursor, CaptureMode, CursorCapture};
pub use menu_box::{MenuBox, CURSOR};
pub use text_box::SingleLineTextBox;
