//! Fonts: a color pair plus attributes, registered under a stable id.
//!
//! The font id is what blueprints store, so a font saved next to a
//! blueprint can be looked back up after reloading.

use super::color::{ColorId, ColorRegistry};
use crate::buffer::{Attributes, Color};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Id of a registered font. Allocated from 0 upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontId(u16);

impl FontId {
    /// Wrap a raw id, e.g. one read from a blueprint.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// The raw id value.
    pub const fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for FontId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A color pair and optional attribute mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Font {
    /// Registered color pair.
    pub color: ColorId,
    /// Extra attributes (bold, underline, ...).
    pub attributes: Attributes,
}

/// On-disk form of a font.
#[derive(Serialize, Deserialize)]
struct FontFile {
    color: ColorId,
    attributes: u8,
}

impl Font {
    /// A font using `color` with no attributes.
    pub const fn new(color: ColorId) -> Self {
        Self {
            color,
            attributes: Attributes::empty(),
        }
    }

    /// Set the attributes (builder pattern).
    #[must_use]
    pub const fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Resolve this font to concrete colors and attributes.
    pub fn resolve(&self, colors: &ColorRegistry) -> Result<(Color, Color, Attributes)> {
        let pair = colors.get(self.color).ok_or(Error::UnknownColor(self.color))?;
        Ok((pair.fg, pair.bg, self.attributes))
    }

    /// Write this font to `dir/font{id}.json` and return the path.
    pub fn export(&self, dir: &Path, id: FontId) -> Result<PathBuf> {
        let path = dir.join(format!("font{id}.json"));
        let file = FontFile {
            color: self.color,
            attributes: self.attributes.bits(),
        };
        fs::write(&path, serde_json::to_string(&file)?)?;
        tracing::debug!(font = %id, path = %path.display(), "exported font");
        Ok(path)
    }

    /// Read a font previously written by [`Font::export`].
    pub fn import(path: &Path) -> Result<Self> {
        let file: FontFile = serde_json::from_str(&fs::read_to_string(path)?)?;
        Ok(Self {
            color: file.color,
            attributes: Attributes::from_bits_truncate(file.attributes),
        })
    }
}

/// Append-only list of fonts.
#[derive(Debug, Default, Clone)]
pub struct FontRegistry {
    fonts: Vec<Font>,
}

impl FontRegistry {
    /// Create an empty registry.
    pub const fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Register a font and return its id.
    ///
    /// Fails once all 65536 ids are in use.
    pub fn register(&mut self, font: Font) -> Result<FontId> {
        let raw = u16::try_from(self.fonts.len()).map_err(|_| Error::RegistryFull("font"))?;
        self.fonts.push(font);
        let id = FontId(raw);
        tracing::debug!(font = %id, "registered font");
        Ok(id)
    }

    /// Look a font up by id.
    pub fn get(&self, id: FontId) -> Option<&Font> {
        self.fonts.get(usize::from(id.0))
    }

    /// Check whether `id` refers to a registered font.
    pub fn contains(&self, id: FontId) -> bool {
        usize::from(id.0) < self.fonts.len()
    }

    /// Number of registered fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    /// Whether no font has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
