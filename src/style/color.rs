//! Color pairs and the registry that hands out their ids.

use crate::buffer::Color;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Id of a registered color pair. Allocated from 1 upward and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorId(u16);

impl ColorId {
    /// Wrap a raw id, e.g. one read from a font file.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for ColorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A foreground/background combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorPair {
    /// Foreground color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
}

impl ColorPair {
    /// Create a new pair.
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }
}

/// Append-only list of color pairs.
#[derive(Debug, Default, Clone)]
pub struct ColorRegistry {
    pairs: Vec<ColorPair>,
}

impl ColorRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Register a pair and return its freshly allocated id.
    ///
    /// Fails once all `u16::MAX` ids are in use.
    pub fn register(&mut self, pair: ColorPair) -> Result<ColorId> {
        let raw = u16::try_from(self.pairs.len() + 1).map_err(|_| Error::RegistryFull("color"))?;
        self.pairs.push(pair);
        let id = ColorId(raw);
        tracing::debug!(color = %id, fg = ?pair.fg, bg = ?pair.bg, "registered color pair");
        Ok(id)
    }

    /// Look a pair up by id.
    pub fn get(&self, id: ColorId) -> Option<ColorPair> {
        let index = usize::from(id.0).checked_sub(1)?;
        self.pairs.get(index).copied()
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}
