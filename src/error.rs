//! Error type shared by every fallible operation in the crate.

use crate::point::PointId;
use crate::shape::BlueprintKind;
use crate::style::{ColorId, FontId};
use thiserror::Error;

/// Errors produced while building, drawing or capturing points.
#[derive(Debug, Error)]
pub enum Error {
    /// A shape was asked to render a blueprint whose kind it cannot build.
    #[error("blueprint type \"{kind}\" is incompatible with Shape object")]
    IncompatibleBlueprint {
        /// The kind declared by the blueprint.
        kind: BlueprintKind,
    },

    /// A point was removed from the registry while not registered.
    #[error("point {0} is not registered")]
    NotRegistered(PointId),

    /// A point handle was removed while not active.
    #[error("point is not active")]
    Inactive,

    /// A draw landed outside the screen.
    #[error("cell ({x}, {y}) is outside the {width}x{height} screen")]
    OutOfBounds {
        /// Column of the rejected write.
        x: u16,
        /// Row of the rejected write.
        y: u16,
        /// Screen width.
        width: u16,
        /// Screen height.
        height: u16,
    },

    /// A font id did not resolve in the font registry.
    #[error("unknown font {0}")]
    UnknownFont(FontId),

    /// A color id did not resolve in the color registry.
    #[error("unknown color pair {0}")]
    UnknownColor(ColorId),

    /// Every id of a registry has been handed out.
    #[error("{0} registry is full")]
    RegistryFull(&'static str),

    /// JSON (de)serialization failure.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O failure from the terminal or the filesystem.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A menu was asked to capture a selection without options.
    #[error("menu has no options to select")]
    EmptyMenu,

    /// The key source has no more input.
    #[error("input closed")]
    InputClosed,

    /// The log subscriber could not be installed.
    #[error("logging: {0}")]
    Logging(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
