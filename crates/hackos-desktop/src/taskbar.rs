//! Taskbar entries
//!
//! The taskbar holds no state of its own. Entries are derived from the
//! window manager on demand, so an entry exists exactly while its window
//! does.

use serde::Serialize;

use crate::window::{Window, WindowId};

/// One taskbar button
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    /// Highlighted when the window is focused
    pub active: bool,
    pub minimized: bool,
}

impl TaskbarEntry {
    pub fn for_window(window: &Window, focused: bool) -> Self {
        Self {
            window_id: window.id,
            title: window.title.clone(),
            active: focused,
            minimized: window.is_minimized(),
        }
    }
}

/// What a click on a taskbar entry should do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TaskbarAction {
    Restore,
    Focus,
}

impl TaskbarAction {
    pub fn for_window(window: &Window) -> Self {
        if window.is_minimized() {
            TaskbarAction::Restore
        } else {
            TaskbarAction::Focus
        }
    }
}
