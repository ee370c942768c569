//! Input result type

use serde::Serialize;

use crate::window::{WindowId, WindowRegion};

/// Outcome of a pointer event, returned to the host
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Consumed by the window manager
    Handled,
    /// Nothing under the pointer; let the host handle it
    Unhandled,
    /// Header control clicked
    Control {
        window_id: WindowId,
        region: WindowRegion,
    },
    /// Press on window content, forwarded to the app
    Forward {
        window_id: WindowId,
        local_x: f32,
        local_y: f32,
        /// Move keyboard focus to the terminal input line
        focus_input: bool,
    },
    /// Pointer moved; show this cursor
    Cursor { cursor: &'static str },
}

impl InputResult {
    #[inline]
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Unhandled)
    }

    /// Cursor to show, if the event implies one
    pub fn cursor(&self) -> Option<&'static str> {
        match self {
            InputResult::Cursor { cursor } => Some(*cursor),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_tags() {
        let json = serde_json::to_value(InputResult::Cursor { cursor: "e-resize" }).unwrap();
        assert_eq!(json["type"], "cursor");
        assert_eq!(json["cursor"], "e-resize");

        let json = serde_json::to_value(InputResult::Control {
            window_id: 3,
            region: WindowRegion::CloseButton,
        })
        .unwrap();
        assert_eq!(json["type"], "control");
        assert_eq!(json["region"], "close_button");
    }
}
