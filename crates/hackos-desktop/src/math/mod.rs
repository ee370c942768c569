//! Screen-space geometry
//!
//! Everything is in CSS pixels with the origin at the top-left of the
//! viewport. Hit testing and drag clamping are pure functions over these
//! types.

mod vec2;
mod size;
mod rect;
mod style;

pub use vec2::Vec2;
pub use size::Size;
pub use rect::Rect;
pub use style::{FrameStyle, FRAME_STYLE};
