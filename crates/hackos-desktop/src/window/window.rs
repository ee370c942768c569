//! Window struct and state

use serde::{Deserialize, Serialize};

use crate::apps::AppKind;
use crate::math::{Rect, Size, Vec2, FRAME_STYLE};
use super::{WindowId, WindowRegion};

/// Window state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WindowState {
    #[default]
    Normal,
    Minimized,
    Maximized,
}

/// A window on the desktop
#[derive(Clone, Debug)]
pub struct Window {
    pub id: WindowId,
    pub title: String,
    /// App hosted in the content area
    pub app: AppKind,
    /// Top-left corner in viewport pixels
    pub position: Vec2,
    /// Outer size including the header
    pub size: Size,
    /// Stacking index (higher = on top)
    pub z_order: u32,
    pub state: WindowState,
    /// Geometry saved when maximizing
    pub(crate) restore_rect: Option<Rect>,
    /// State to return to when un-minimizing
    pub(crate) prev_state: Option<WindowState>,
}

impl Window {
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.state == WindowState::Minimized
    }

    /// Header strip holding the title and the controls
    pub fn title_bar_rect(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            FRAME_STYLE.title_bar_height,
        )
    }

    /// Rightmost control
    pub fn close_button_rect(&self) -> Rect {
        self.button_rect(0)
    }

    pub fn maximize_button_rect(&self) -> Rect {
        self.button_rect(1)
    }

    pub fn minimize_button_rect(&self) -> Rect {
        self.button_rect(2)
    }

    /// `slot` counts controls from the right edge
    fn button_rect(&self, slot: u8) -> Rect {
        let slot = f32::from(slot);
        let x = self.position.x + self.size.width
            - FRAME_STYLE.button_margin
            - FRAME_STYLE.button_size * (slot + 1.0)
            - FRAME_STYLE.button_spacing * slot;
        let y = self.position.y + (FRAME_STYLE.title_bar_height - FRAME_STYLE.button_size) / 2.0;
        Rect::new(x, y, FRAME_STYLE.button_size, FRAME_STYLE.button_size)
    }

    /// Classify a point already known to be inside the window
    ///
    /// Controls win over the header, the header wins over the resize
    /// edges, and anything left over is content.
    pub fn region_at(&self, point: Vec2, resize_threshold: f32) -> Option<WindowRegion> {
        let rect = self.rect();
        if !rect.contains(point) {
            return None;
        }

        if self.close_button_rect().contains(point) {
            return Some(WindowRegion::CloseButton);
        }
        if self.maximize_button_rect().contains(point) {
            return Some(WindowRegion::MaximizeButton);
        }
        if self.minimize_button_rect().contains(point) {
            return Some(WindowRegion::MinimizeButton);
        }
        if self.title_bar_rect().contains(point) {
            return Some(WindowRegion::TitleBar);
        }

        let near_right = rect.near_right(point, resize_threshold);
        let near_bottom = rect.near_bottom(point, resize_threshold);
        Some(match (near_right, near_bottom) {
            (true, true) => WindowRegion::ResizeSE,
            (true, false) => WindowRegion::ResizeE,
            (false, true) => WindowRegion::ResizeS,
            (false, false) => WindowRegion::Content,
        })
    }

    /// Snapshot for rendering
    pub fn view(&self, focused: bool) -> WindowView {
        WindowView {
            id: self.id,
            title: self.title.clone(),
            app: self.app,
            x: self.position.x,
            y: self.position.y,
            width: self.size.width,
            height: self.size.height,
            z_order: self.z_order,
            state: self.state,
            focused,
        }
    }
}

/// Serializable window geometry and state
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub title: String,
    pub app: AppKind,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub z_order: u32,
    pub state: WindowState,
    pub focused: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window() -> Window {
        Window {
            id: 1,
            title: "root@kali: ~".to_string(),
            app: AppKind::Terminal,
            position: Vec2::new(50.0, 50.0),
            size: Size::new(800.0, 600.0),
            z_order: 101,
            state: WindowState::Normal,
            restore_rect: None,
            prev_state: None,
        }
    }

    #[test]
    fn test_buttons_sit_in_header_right_to_left() {
        let w = window();
        let close = w.close_button_rect();
        let max = w.maximize_button_rect();
        let min = w.minimize_button_rect();
        assert!(close.x > max.x && max.x > min.x);
        assert!((close.right() - (850.0 - FRAME_STYLE.button_margin)).abs() < 0.001);
        assert!(w.title_bar_rect().contains(close.position()));
    }

    #[test]
    fn test_region_order() {
        let w = window();
        let close = w.close_button_rect();
        assert_eq!(
            w.region_at(Vec2::new(close.x + 2.0, close.y + 2.0), 10.0),
            Some(WindowRegion::CloseButton)
        );
        assert_eq!(w.region_at(Vec2::new(100.0, 60.0), 10.0), Some(WindowRegion::TitleBar));
        // header beats the right-edge resize strip
        assert_eq!(w.region_at(Vec2::new(848.0, 52.0), 10.0), Some(WindowRegion::TitleBar));
        assert_eq!(w.region_at(Vec2::new(845.0, 300.0), 10.0), Some(WindowRegion::ResizeE));
        assert_eq!(w.region_at(Vec2::new(300.0, 645.0), 10.0), Some(WindowRegion::ResizeS));
        assert_eq!(w.region_at(Vec2::new(845.0, 645.0), 10.0), Some(WindowRegion::ResizeSE));
        assert_eq!(w.region_at(Vec2::new(300.0, 300.0), 10.0), Some(WindowRegion::Content));
        assert_eq!(w.region_at(Vec2::new(10.0, 10.0), 10.0), None);
    }

    #[test]
    fn test_view_serializes_camel_case() {
        let json = serde_json::to_value(window().view(true)).unwrap();
        assert_eq!(json["zOrder"], 101);
        assert_eq!(json["state"], "normal");
        assert_eq!(json["app"], "terminal");
        assert_eq!(json["focused"], true);
    }
}
