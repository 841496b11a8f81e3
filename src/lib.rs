//! # Termpoints
//!
//! Terminal cells as objects.
//!
//! Every character on screen is a [`Point`](point::Point): a character, a
//! position, a field (screen page) and an optional font. Lines, text,
//! blueprint shapes and menus are built out of points, and the
//! [`Scene`] redraws all live points of the active field every frame.
//!
//! ## Core Concepts
//!
//! - **Scene**: owns the color, font and point registries. Everything that
//!   puts points on screen takes `&mut Scene`.
//! - **Handles**: a [`PointHandle`](point::PointHandle) tracks whether its
//!   point is live; removal is explicit.
//! - **Backends**: the scene draws through the [`Backend`](terminal::Backend)
//!   trait, either a real terminal or an in-memory screen.
//!
//! ## Example
//!
//! ```rust
//! use termpoints::{Attributes, Color, Font, Scene};
//! use termpoints::shape::{HLine, Text};
//! use termpoints::terminal::HeadlessBackend;
//!
//! let mut scene = Scene::new();
//! let red = scene.add_color(Color::Red, Color::Default)?;
//! let title = scene.add_font(Font::new(red).with_attributes(Attributes::BOLD))?;
//!
//! let _title = Text::new(0, 0, "Hello", 0, Some(title), &mut scene)?;
//! let _rule = HLine::new(0..5, 1, '=', 0, None, &mut scene)?;
//!
//! let mut backend = HeadlessBackend::new(8, 2);
//! scene.redraw(&mut backend)?;
//! assert_eq!(backend.row(0), "Hello   ");
//! assert_eq!(backend.row(1), "=====   ");
//! # Ok::<(), termpoints::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod app;
pub mod buffer;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod point;
pub mod scene;
pub mod shape;
pub mod style;
pub mod terminal;
pub mod widget;

// Re-exports for convenience
pub use app::{run, run_with, App, Flow};
pub use buffer::{Attributes, Cell, Color, Rgb};
pub use config::{LogConfig, SessionConfig};
pub use error::{Error, Result};
pub use input::{Key, KeyCode, KeyModifiers};
pub use scene::{FrameStats, Scene};
pub use style::{ColorId, Font, FontId};
