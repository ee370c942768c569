//! Window manager for lifecycle, focus, and z-order

use std::collections::HashMap;

use crate::apps::AppKind;
use crate::config::WindowDefaults;
use crate::math::{Rect, Size, Vec2};
use crate::taskbar::TaskbarEntry;
use super::{Window, WindowId, WindowRegion, WindowState, WindowView};

/// Owns every open window, the stacking pool and the focus
///
/// Invariants:
/// - ids come from a counter and are never reused
/// - stacking indices come from a pool that only grows, so the window
///   focused last always has the highest index
/// - a minimized window is never the focused one
pub struct WindowManager {
    windows: HashMap<WindowId, Window>,
    focused: Option<WindowId>,
    next_id: WindowId,
    /// Last stacking index handed out
    next_z: u32,
    defaults: WindowDefaults,
    viewport: Size,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(WindowDefaults::default(), Size::new(1280.0, 800.0))
    }
}

impl WindowManager {
    pub fn new(defaults: WindowDefaults, viewport: Size) -> Self {
        Self {
            windows: HashMap::new(),
            focused: None,
            next_id: 1,
            next_z: defaults.z_base,
            defaults,
            viewport,
        }
    }

    /// Create a window at the next cascade slot and focus it
    pub fn create(&mut self, title: impl Into<String>, app: AppKind, size: Size) -> WindowId {
        let id = self.next_id;
        self.next_id += 1;

        let offset = self.defaults.cascade_origin + self.windows.len() as f32 * self.defaults.cascade_step;
        let window = Window {
            id,
            title: title.into(),
            app,
            position: Vec2::new(offset, offset),
            size,
            z_order: self.take_z(),
            state: WindowState::Normal,
            restore_rect: None,
            prev_state: None,
        };

        self.windows.insert(id, window);
        self.focused = Some(id);
        id
    }

    /// Close a window; returns it if it was open
    pub fn close(&mut self, id: WindowId) -> Option<Window> {
        let window = self.windows.remove(&id)?;
        if self.focused == Some(id) {
            self.focused = None;
        }
        Some(window)
    }

    #[inline]
    pub fn get(&self, id: WindowId) -> Option<&Window> {
        self.windows.get(&id)
    }

    #[inline]
    pub fn contains(&self, id: WindowId) -> bool {
        self.windows.contains_key(&id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.windows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    #[inline]
    pub fn focused(&self) -> Option<WindowId> {
        self.focused
    }

    #[inline]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn defaults(&self) -> &WindowDefaults {
        &self.defaults
    }

    /// Raise a window above all others and make it the active one
    ///
    /// Unknown and minimized windows are left alone.
    pub fn focus(&mut self, id: WindowId) -> bool {
        let z = self.next_z + 1;
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if window.is_minimized() {
            return false;
        }
        window.z_order = z;
        self.next_z = z;
        self.focused = Some(id);
        true
    }

    /// Move a window's top-left corner
    pub fn move_to(&mut self, id: WindowId, position: Vec2) {
        if let Some(window) = self.windows.get_mut(&id) {
            window.position = position;
        }
    }

    /// Resize a window, never below the minimum size
    pub fn resize(&mut self, id: WindowId, size: Size) {
        let min = self.defaults.min_size;
        if let Some(window) = self.windows.get_mut(&id) {
            window.size = size.at_least(min);
        }
    }

    /// Hide a window; minimizing the focused window clears focus
    pub fn minimize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if window.is_minimized() {
            return false;
        }
        window.prev_state = Some(window.state);
        window.state = WindowState::Minimized;
        if self.focused == Some(id) {
            self.focused = None;
        }
        true
    }

    /// Show a minimized window again and focus it
    pub fn restore(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if window.is_minimized() {
            window.state = window.prev_state.take().unwrap_or_default();
        }
        self.focus(id)
    }

    /// Toggle between the work area and the saved geometry
    pub fn maximize(&mut self, id: WindowId) -> bool {
        let work_area = self.work_area();
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };

        match window.state {
            WindowState::Maximized => {
                if let Some(saved) = window.restore_rect.take() {
                    window.position = saved.position();
                    window.size = saved.size();
                }
                window.state = WindowState::Normal;
            }
            WindowState::Normal | WindowState::Minimized => {
                window.restore_rect = Some(window.rect());
                window.prev_state = None;
                window.position = work_area.position();
                window.size = work_area.size();
                window.state = WindowState::Maximized;
            }
        }
        self.focus(id)
    }

    /// Drop a maximized window back to Normal where it stands
    ///
    /// Called when a move or resize starts, so the gesture becomes the new
    /// geometry and a later maximize saves it.
    pub fn unmaximize(&mut self, id: WindowId) -> bool {
        let Some(window) = self.windows.get_mut(&id) else {
            return false;
        };
        if window.state != WindowState::Maximized {
            return false;
        }
        window.state = WindowState::Normal;
        window.restore_rect = None;
        true
    }

    /// Viewport minus the taskbar strip
    pub fn work_area(&self) -> Rect {
        Rect::new(
            0.0,
            0.0,
            self.viewport.width,
            (self.viewport.height - self.defaults.taskbar_height).max(0.0),
        )
    }

    /// Windows sorted bottom to top
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<_> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Windows in creation order
    pub fn windows_by_id(&self) -> Vec<&Window> {
        let mut windows: Vec<_> = self.windows.values().collect();
        windows.sort_by_key(|w| w.id);
        windows
    }

    /// Topmost visible window containing `point`
    pub fn window_at(&self, point: Vec2) -> Option<WindowId> {
        self.windows
            .values()
            .filter(|w| !w.is_minimized() && w.rect().contains(point))
            .max_by_key(|w| w.z_order)
            .map(|w| w.id)
    }

    /// Topmost window and the region of it under `point`
    pub fn region_at(&self, point: Vec2) -> Option<(WindowId, WindowRegion)> {
        let id = self.window_at(point)?;
        let region = self.windows.get(&id)?.region_at(point, self.defaults.resize_threshold)?;
        Some((id, region))
    }

    /// Snapshots in creation order
    pub fn views(&self) -> Vec<WindowView> {
        self.windows_by_id()
            .into_iter()
            .map(|w| w.view(self.focused == Some(w.id)))
            .collect()
    }

    /// One taskbar entry per open window, in creation order
    pub fn taskbar(&self) -> Vec<TaskbarEntry> {
        self.windows_by_id()
            .into_iter()
            .map(|w| TaskbarEntry::for_window(w, self.focused == Some(w.id)))
            .collect()
    }

    fn take_z(&mut self) -> u32 {
        self.next_z += 1;
        self.next_z
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> WindowManager {
        WindowManager::new(WindowDefaults::default(), Size::new(1280.0, 800.0))
    }

    fn open(wm: &mut WindowManager) -> WindowId {
        wm.create("File Manager", AppKind::FileManager, Size::new(500.0, 400.0))
    }

    #[test]
    fn test_first_window_placement() {
        let mut wm = manager();
        let id = open(&mut wm);
        let w = wm.get(id).unwrap();
        assert_eq!(w.z_order, 101);
        assert!((w.position.x - 50.0).abs() < 0.001);
        assert!((w.position.y - 50.0).abs() < 0.001);
        assert_eq!(wm.focused(), Some(id));
    }

    #[test]
    fn test_cascade_uses_open_count() {
        let mut wm = manager();
        let a = open(&mut wm);
        let b = open(&mut wm);
        assert!((wm.get(b).unwrap().position.x - 80.0).abs() < 0.001);

        wm.close(a);
        let c = open(&mut wm);
        // one window open again, so the second slot is reused
        assert!((wm.get(c).unwrap().position.y - 80.0).abs() < 0.001);
        assert_ne!(c, a);
    }

    #[test]
    fn test_focus_raises_above_all() {
        let mut wm = manager();
        let a = open(&mut wm);
        let b = open(&mut wm);
        let c = open(&mut wm);

        assert!(wm.focus(a));
        let za = wm.get(a).unwrap().z_order;
        assert!(za > wm.get(b).unwrap().z_order);
        assert!(za > wm.get(c).unwrap().z_order);
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_focus_unknown_is_noop() {
        let mut wm = manager();
        let a = open(&mut wm);
        assert!(!wm.focus(999));
        assert_eq!(wm.focused(), Some(a));
    }

    #[test]
    fn test_close_twice() {
        let mut wm = manager();
        let a = open(&mut wm);
        let b = open(&mut wm);
        assert!(wm.close(a).is_some());
        assert!(wm.close(a).is_none());
        assert_eq!(wm.len(), 1);
        assert!(wm.contains(b));
    }

    #[test]
    fn test_minimize_clears_focus_and_restore_refocuses() {
        let mut wm = manager();
        let a = open(&mut wm);
        assert!(wm.minimize(a));
        assert_eq!(wm.focused(), None);
        assert!(!wm.focus(a));
        assert_eq!(wm.window_at(Vec2::new(60.0, 60.0)), None);

        assert!(wm.restore(a));
        assert_eq!(wm.focused(), Some(a));
        assert_eq!(wm.get(a).unwrap().state, WindowState::Normal);
    }

    #[test]
    fn test_minimize_unfocused_keeps_focus() {
        let mut wm = manager();
        let a = open(&mut wm);
        let b = open(&mut wm);
        wm.minimize(a);
        assert_eq!(wm.focused(), Some(b));
    }

    #[test]
    fn test_maximize_toggles() {
        let mut wm = manager();
        let a = open(&mut wm);
        wm.maximize(a);
        let w = wm.get(a).unwrap();
        assert_eq!(w.state, WindowState::Maximized);
        assert!((w.position.x - 0.0).abs() < 0.001);
        assert!((w.size.width - 1280.0).abs() < 0.001);
        assert!((w.size.height - 756.0).abs() < 0.001);

        wm.maximize(a);
        let w = wm.get(a).unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert!((w.position.x - 50.0).abs() < 0.001);
        assert!((w.size.width - 500.0).abs() < 0.001);
    }

    #[test]
    fn test_unmaximize_keeps_geometry() {
        let mut wm = manager();
        let a = open(&mut wm);
        assert!(!wm.unmaximize(a));

        wm.maximize(a);
        assert!(wm.unmaximize(a));
        let w = wm.get(a).unwrap();
        assert_eq!(w.state, WindowState::Normal);
        assert!(w.restore_rect.is_none());
        assert!((w.size.width - 1280.0).abs() < 0.001);

        // the next maximize saves the work-area rect, not the old one
        wm.maximize(a);
        wm.maximize(a);
        assert!((wm.get(a).unwrap().size.width - 1280.0).abs() < 0.001);
    }

    #[test]
    fn test_minimized_maximized_restores_maximized() {
        let mut wm = manager();
        let a = open(&mut wm);
        wm.maximize(a);
        wm.minimize(a);
        wm.restore(a);
        assert_eq!(wm.get(a).unwrap().state, WindowState::Maximized);
    }

    #[test]
    fn test_window_at_picks_topmost() {
        let mut wm = manager();
        let a = open(&mut wm);
        let b = open(&mut wm);
        // (100, 100) is inside both
        assert_eq!(wm.window_at(Vec2::new(100.0, 100.0)), Some(b));
        wm.focus(a);
        assert_eq!(wm.window_at(Vec2::new(100.0, 100.0)), Some(a));
    }

    #[test]
    fn test_resize_respects_minimum() {
        let mut wm = manager();
        let a = open(&mut wm);
        wm.resize(a, Size::new(10.0, 10.0));
        let w = wm.get(a).unwrap();
        assert!((w.size.width - 300.0).abs() < 0.001);
        assert!((w.size.height - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_taskbar_mirrors_windows() {
        let mut wm = manager();
        let a = open(&mut wm);
        let b = open(&mut wm);
        let bar = wm.taskbar();
        assert_eq!(bar.len(), 2);
        assert_eq!(bar[0].window_id, a);
        assert!(!bar[0].active);
        assert!(bar[1].active);

        wm.close(b);
        let bar = wm.taskbar();
        assert_eq!(bar.len(), 1);
        assert!(!bar[0].active);
    }
}
