//! Blueprints: tagged lists of characters at offsets, loaded from JSON.
//!
//! On the wire a blueprint is a JSON array whose first element is the kind
//! tag and whose remaining elements are entries:
//!
//! ```json
//! ["custom", {"char": "a", "pos": {"x": 0, "y": 0}, "font": 0}]
//! ```

use crate::error::Result;
use crate::style::FontId;
use serde::de::{self, SeqAccess, Visitor};
use serde::ser::SerializeSeq;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// The declared kind of a blueprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlueprintKind {
    /// Free-form entries; the only kind a [`Shape`](super::Shape) can build.
    Custom,
    /// Rectangle outline.
    Rectangle,
    /// Menu frame.
    MenuBox,
    /// Per-character text.
    TextChar,
    /// Per-word text.
    TextWord,
    /// Per-sentence text.
    TextSentence,
    /// A tag this crate does not know.
    Other(String),
}

impl BlueprintKind {
    /// Parse a wire tag. Unknown tags are kept as [`BlueprintKind::Other`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "custom" => Self::Custom,
            "rectangle" => Self::Rectangle,
            "menubox" => Self::MenuBox,
            "textchar" => Self::TextChar,
            "textword" => Self::TextWord,
            "textsentence" => Self::TextSentence,
            other => Self::Other(other.to_owned()),
        }
    }

    /// The wire tag.
    pub fn tag(&self) -> &str {
        match self {
            Self::Custom => "custom",
            Self::Rectangle => "rectangle",
            Self::MenuBox => "menubox",
            Self::TextChar => "textchar",
            Self::TextWord => "textword",
            Self::TextSentence => "textsentence",
            Self::Other(tag) => tag,
        }
    }

    /// Whether a [`Shape`](super::Shape) can be built from this kind.
    pub const fn builds_shapes(&self) -> bool {
        matches!(self, Self::Custom)
    }
}

impl fmt::Display for BlueprintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Position of an entry relative to the shape origin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offset {
    /// Columns right of the origin.
    pub x: u16,
    /// Rows below the origin.
    pub y: u16,
}

/// One character of a blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintEntry {
    /// Character to draw.
    #[serde(rename = "char")]
    pub ch: char,
    /// Offset from the shape origin.
    pub pos: Offset,
    /// Font id; `null` draws with the terminal default.
    pub font: Option<FontId>,
}

impl BlueprintEntry {
    /// Create an entry.
    pub const fn new(ch: char, x: u16, y: u16, font: Option<FontId>) -> Self {
        Self {
            ch,
            pos: Offset { x, y },
            font,
        }
    }
}

/// A kind tag plus the entries that follow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blueprint {
    kind: BlueprintKind,
    entries: Vec<BlueprintEntry>,
}

impl Blueprint {
    /// An empty blueprint of the given kind.
    pub const fn new(kind: BlueprintKind) -> Self {
        Self {
            kind,
            entries: Vec::new(),
        }
    }

    /// Append an entry.
    pub fn push(&mut self, entry: BlueprintEntry) {
        self.entries.push(entry);
    }

    /// Parse an inline JSON blueprint.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let blueprint: Self = serde_json::from_str(json)?;
        tracing::debug!(kind = %blueprint.kind, entries = blueprint.len(), "loaded blueprint");
        Ok(blueprint)
    }

    /// Read a JSON blueprint from a file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serialize to the JSON wire form.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Write the JSON wire form to a file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json_string()?)?;
        Ok(())
    }

    /// The declared kind.
    pub const fn kind(&self) -> &BlueprintKind {
        &self.kind
    }

    /// Entries in file order.
    pub fn entries(&self) -> &[BlueprintEntry] {
        &self.entries
    }

    /// Number of entries, not counting the kind tag.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Blueprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.entries.len() + 1))?;
        seq.serialize_element(self.kind.tag())?;
        for entry in &self.entries {
            seq.serialize_element(entry)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for Blueprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct BlueprintVisitor;

        impl<'de> Visitor<'de> for BlueprintVisitor {
            type Value = Blueprint;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an array starting with a blueprint kind tag")
            }

            fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<Blueprint, A::Error> {
                let tag: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::custom("blueprint is missing its kind tag"))?;
                let mut blueprint = Blueprint::new(BlueprintKind::from_tag(&tag));
                while let Some(entry) = seq.next_element()? {
                    blueprint.push(entry);
                }
                Ok(blueprint)
            }
        }

        deserializer.deserialize_seq(BlueprintVisitor)
    }
}

/// Lay out text as a custom blueprint, one entry per character.
///
/// Lines split on `\n` (a trailing `\r` is dropped); each character sits
/// at `(column, line)`.
pub fn text_to_blueprint(text: &str, font: impl Into<Option<FontId>>) -> Blueprint {
    let font = font.into();
    let mut blueprint = Blueprint::new(BlueprintKind::Custom);
    for (row, line) in split_lines(text).enumerate() {
        let y = u16::try_from(row).unwrap_or(u16::MAX);
        for (col, ch) in line.chars().enumerate() {
            let x = u16::try_from(col).unwrap_or(u16::MAX);
            blueprint.push(BlueprintEntry::new(ch, x, y, font));
        }
    }
    blueprint
}

/// Lines of `text`, accepting both `\n` and `\r\n` endings.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}
