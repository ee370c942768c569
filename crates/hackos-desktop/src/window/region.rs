//! Window region for hit testing

use serde::Serialize;

/// Part of a window under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowRegion {
    /// Header outside the controls; starts a drag
    TitleBar,
    /// Everything else; forwarded to the app
    Content,
    CloseButton,
    MinimizeButton,
    MaximizeButton,
    /// Right edge
    ResizeE,
    /// Bottom edge
    ResizeS,
    /// Bottom-right corner
    ResizeSE,
}

impl WindowRegion {
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(
            self,
            WindowRegion::ResizeE | WindowRegion::ResizeS | WindowRegion::ResizeSE
        )
    }

    #[inline]
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            WindowRegion::CloseButton | WindowRegion::MinimizeButton | WindowRegion::MaximizeButton
        )
    }

    /// CSS cursor shown while hovering this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WindowRegion::ResizeSE => "se-resize",
            WindowRegion::ResizeE => "e-resize",
            WindowRegion::ResizeS => "s-resize",
            _ => "default",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursors() {
        assert_eq!(WindowRegion::ResizeSE.cursor(), "se-resize");
        assert_eq!(WindowRegion::ResizeE.cursor(), "e-resize");
        assert_eq!(WindowRegion::ResizeS.cursor(), "s-resize");
        assert_eq!(WindowRegion::TitleBar.cursor(), "default");
        assert_eq!(WindowRegion::Content.cursor(), "default");
    }

    #[test]
    fn test_classification() {
        assert!(WindowRegion::ResizeSE.is_resize());
        assert!(!WindowRegion::TitleBar.is_resize());
        assert!(WindowRegion::CloseButton.is_button());
        assert!(!WindowRegion::Content.is_button());
    }
}
