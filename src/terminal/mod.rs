//! Terminal backends.
//!
//! [`Backend`] is everything the scene needs from a screen. Two
//! implementations ship with the crate:
//! - [`CrosstermBackend`]: the real terminal, double-buffered with a diff flush
//! - [`HeadlessBackend`]: an in-memory screen with scripted key presses

mod backend;
mod headless;
mod tty;

pub use backend::Backend;
pub use headless::HeadlessBackend;
pub use tty::CrosstermBackend;
