//! Geometry types for the desktop container
//!
//! All coordinates are in container space: origin at the top-left of the
//! presentation surface, y growing downwards.

mod vec2;
mod rect;
mod size;
mod style;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
pub use style::{ChromeStyle, CHROME_STYLE};
