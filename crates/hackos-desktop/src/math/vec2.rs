//! 2D vector type for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D vector for positions and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Clamp each axis to `[0, max]`; when `max` is negative the lower
    /// bound wins
    #[inline]
    pub fn clamp_to_origin(self, max: Vec2) -> Self {
        Self::new(self.x.min(max.x).max(0.0), self.y.min(max.y).max(0.0))
    }
}

impl std::ops::Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec2_operations() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);

        let sum = a + b;
        assert!((sum.x - 4.0).abs() < 0.001);
        assert!((sum.y - 6.0).abs() < 0.001);

        let diff = b - a;
        assert!((diff.x - 2.0).abs() < 0.001);
        assert!((diff.y - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_to_origin() {
        let max = Vec2::new(824.0, 724.0);
        let c = Vec2::new(-40.0, 900.0).clamp_to_origin(max);
        assert!((c.x - 0.0).abs() < 0.001);
        assert!((c.y - 724.0).abs() < 0.001);
    }

    #[test]
    fn test_clamp_lower_bound_wins() {
        // viewport narrower than the visible-width allowance
        let c = Vec2::new(50.0, 10.0).clamp_to_origin(Vec2::new(-20.0, -4.0));
        assert!((c.x - 0.0).abs() < 0.001);
        assert!((c.y - 0.0).abs() < 0.001);
    }
}
