//! Buffer module: the screen grid the backends draw into.
//!
//! This module contains:
//! - [`Cell`]: one character with colors and attributes
//! - [`Buffer`]: A grid of cells representing the terminal screen
//! - [`Color`] / [`Rgb`]: palette and true-color representation
//! - [`Attributes`]: Text style bitflags
//! - [`diff`]: Diffing engine for generating minimal ANSI sequences

mod cell;
#[allow(clippy::module_inception)]
mod buffer;
pub mod diff;

pub use cell::{Attributes, Cell, Color, Rgb};
pub use buffer::Buffer;
