//! Style module: color pairs and fonts, each behind an append-only registry.

mod color;
mod font;

pub use color::{ColorId, ColorPair, ColorRegistry};
pub use font::{Font, FontId, FontRegistry};
