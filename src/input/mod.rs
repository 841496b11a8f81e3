//! Input module: key presses delivered by a [`Backend`](crate::terminal::Backend).

mod key;

pub use key::{Key, KeyCode, KeyModifiers};
