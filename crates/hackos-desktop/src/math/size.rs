//! 2D size type for dimensions

use serde::{Deserialize, Serialize};

/// Width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Grow each dimension to at least `min`
    #[inline]
    pub fn at_least(self, min: Size) -> Self {
        Self::new(self.width.max(min.width), self.height.max(min.height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_at_least() {
        let s = Size::new(120.0, 480.0).at_least(Size::new(300.0, 200.0));
        assert!((s.width - 300.0).abs() < 0.001);
        assert!((s.height - 480.0).abs() < 0.001);
    }
}
