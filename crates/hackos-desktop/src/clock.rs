//! Taskbar clock

use hackos_terminal::time;
use serde::Serialize;

/// Rendered clock face
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ClockView {
    /// 24-hour `HH:MM`
    pub time: String,
}

/// Wall clock refreshed by the shell's periodic tick
#[derive(Debug)]
pub struct Clock {
    utc_offset_minutes: i32,
    view: ClockView,
}

impl Clock {
    pub fn new(utc_offset_minutes: i32) -> Self {
        Self {
            utc_offset_minutes,
            view: ClockView::default(),
        }
    }

    /// Recompute the face; returns whether it changed
    pub fn update(&mut self, now_ms: f64) -> bool {
        let face = time::clock_face(&time::local_time(now_ms, self.utc_offset_minutes));
        if face == self.view.time {
            return false;
        }
        self.view.time = face;
        true
    }

    #[inline]
    pub fn view(&self) -> &ClockView {
        &self.view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-01-15T19:42:37Z
    const NOW: f64 = 1_705_347_757_000.0;

    #[test]
    fn test_face_is_hh_mm() {
        let mut clock = Clock::new(0);
        assert!(clock.update(NOW));
        assert_eq!(clock.view().time, "19:42");
    }

    #[test]
    fn test_same_minute_is_unchanged() {
        let mut clock = Clock::new(0);
        clock.update(NOW);
        assert!(!clock.update(NOW + 1000.0));
        assert!(clock.update(NOW + 23_000.0));
        assert_eq!(clock.view().time, "19:43");
    }

    #[test]
    fn test_offset_applies() {
        let mut clock = Clock::new(-300);
        clock.update(NOW);
        assert_eq!(clock.view().time, "14:42");
    }
}
