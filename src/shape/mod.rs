//! Composites built out of points: lines, blueprint shapes and text.

mod blueprint;
mod line;
#[allow(clippy::module_inception)]
mod shape;
mod text;
mod traits;

pub use blueprint::{text_to_blueprint, Blueprint, BlueprintEntry, BlueprintKind, Offset};
pub use line::{HLine, VLine};
pub use shape::Shape;
pub use text::Text;
pub use traits::Figure;
pub(crate) use traits::remove_all;
