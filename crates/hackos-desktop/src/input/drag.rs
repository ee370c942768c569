//! Drag state for input operations

use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// The pointer operation in progress
#[derive(Clone, Debug)]
pub enum DragState {
    /// Moving a window by its header
    MoveWindow {
        window_id: WindowId,
        /// Offset from window origin to cursor
        offset: Vec2,
    },
    /// Resizing a window from its right/bottom edge
    ResizeWindow {
        window_id: WindowId,
        /// Pointer position at start
        start_mouse: Vec2,
        /// Window size at start
        start_size: Size,
    },
}

impl DragState {
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWindow { .. })
    }

    pub fn window_id(&self) -> WindowId {
        match self {
            DragState::MoveWindow { window_id, .. } | DragState::ResizeWindow { window_id, .. } => *window_id,
        }
    }
}
