//! Pointer input routing
//!
//! At most one drag or resize is active at a time. It starts on
//! pointer-down over a header or a resize edge and ends on pointer-up,
//! whatever else happened in between.

mod drag;
mod result;
mod router;

pub use drag::DragState;
pub use result::InputResult;
pub use router::InputRouter;

use crate::config::WindowDefaults;
use crate::math::{Size, Vec2};

/// Cursor shown while a window is being moved
pub const GRABBING_CURSOR: &str = "grabbing";

/// New top-left corner for a window dragged to `pointer`
///
/// Keeps the captured offset and clamps to
/// `[0, vw - min_visible_width] x [0, vh - taskbar_height]`.
pub fn drag_position(pointer: Vec2, offset: Vec2, viewport: Size, defaults: &WindowDefaults) -> Vec2 {
    let max = Vec2::new(
        viewport.width - defaults.min_visible_width,
        viewport.height - defaults.taskbar_height,
    );
    (pointer - offset).clamp_to_origin(max)
}

/// New size for a window resized from `start_mouse` to `pointer`
pub fn resize_size(pointer: Vec2, start_mouse: Vec2, start_size: Size, min: Size) -> Size {
    let delta = pointer - start_mouse;
    Size::new(start_size.width + delta.x, start_size.height + delta.y).at_least(min)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Size = Size::new(1024.0, 768.0);

    #[test]
    fn test_drag_keeps_offset() {
        let p = drag_position(
            Vec2::new(400.0, 300.0),
            Vec2::new(20.0, 10.0),
            VIEWPORT,
            &WindowDefaults::default(),
        );
        assert!((p.x - 380.0).abs() < 0.001);
        assert!((p.y - 290.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_clamps_to_viewport() {
        let defaults = WindowDefaults::default();
        let far = drag_position(Vec2::new(5000.0, 5000.0), Vec2::ZERO, VIEWPORT, &defaults);
        assert!((far.x - 824.0).abs() < 0.001);
        assert!((far.y - 724.0).abs() < 0.001);

        let negative = drag_position(Vec2::new(-300.0, -300.0), Vec2::ZERO, VIEWPORT, &defaults);
        assert!((negative.x - 0.0).abs() < 0.001);
        assert!((negative.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_drag_tiny_viewport_pins_to_origin() {
        let p = drag_position(
            Vec2::new(90.0, 30.0),
            Vec2::ZERO,
            Size::new(150.0, 40.0),
            &WindowDefaults::default(),
        );
        assert!((p.x - 0.0).abs() < 0.001);
        assert!((p.y - 0.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_grows_with_pointer() {
        let s = resize_size(
            Vec2::new(950.0, 700.0),
            Vec2::new(850.0, 650.0),
            Size::new(800.0, 600.0),
            Size::new(300.0, 200.0),
        );
        assert!((s.width - 900.0).abs() < 0.001);
        assert!((s.height - 650.0).abs() < 0.001);
    }

    #[test]
    fn test_resize_never_below_minimum() {
        let s = resize_size(
            Vec2::new(0.0, 0.0),
            Vec2::new(850.0, 650.0),
            Size::new(800.0, 600.0),
            Size::new(300.0, 200.0),
        );
        assert!((s.width - 300.0).abs() < 0.001);
        assert!((s.height - 200.0).abs() < 0.001);
    }
}
