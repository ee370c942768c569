//! Input router state machine

use crate::math::{Size, Vec2};
use crate::window::WindowId;
use super::DragState;

/// Holds the single active drag or resize
#[derive(Debug, Default)]
pub struct InputRouter {
    drag: Option<DragState>,
}

impl InputRouter {
    pub fn new() -> Self {
        Self { drag: None }
    }

    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Text selection is suppressed while any operation is active
    #[inline]
    pub fn selection_suppressed(&self) -> bool {
        self.is_dragging()
    }

    /// Start moving a window; replaces any operation in progress
    pub fn start_window_move(&mut self, window_id: WindowId, offset: Vec2) {
        self.drag = Some(DragState::MoveWindow { window_id, offset });
    }

    /// Start resizing a window; replaces any operation in progress
    pub fn start_window_resize(&mut self, window_id: WindowId, start_mouse: Vec2, start_size: Size) {
        self.drag = Some(DragState::ResizeWindow {
            window_id,
            start_mouse,
            start_size,
        });
    }

    /// Clear whatever is active
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }

    /// Drop the operation if it targets `window_id`
    pub fn forget_window(&mut self, window_id: WindowId) {
        if self.drag.as_ref().is_some_and(|d| d.window_id() == window_id) {
            self.drag = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_router_move() {
        let mut router = InputRouter::new();
        assert!(!router.is_dragging());
        assert!(!router.selection_suppressed());

        router.start_window_move(1, Vec2::new(10.0, 10.0));
        assert!(router.is_dragging());
        assert!(router.selection_suppressed());
        assert!(matches!(router.drag_state(), Some(DragState::MoveWindow { window_id: 1, .. })));

        assert!(router.end_drag().is_some());
        assert!(!router.is_dragging());
        assert!(router.end_drag().is_none());
    }

    #[test]
    fn test_resize_replaces_move() {
        let mut router = InputRouter::new();
        router.start_window_move(1, Vec2::ZERO);
        router.start_window_resize(2, Vec2::new(500.0, 400.0), Size::new(400.0, 300.0));
        assert!(matches!(router.drag_state(), Some(DragState::ResizeWindow { window_id: 2, .. })));
    }

    #[test]
    fn test_forget_window() {
        let mut router = InputRouter::new();
        router.start_window_move(1, Vec2::ZERO);
        router.forget_window(2);
        assert!(router.is_dragging());
        router.forget_window(1);
        assert!(!router.is_dragging());
    }
}
