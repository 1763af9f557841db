//! 2D vector type for positions and offsets

use serde::{Deserialize, Serialize};

/// 2D vector for positions, drag translations and offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    /// Zero vector
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a new vector
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both components are finite
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Constrain each component to `[min, max]`.
    ///
    /// When a range is inverted (max below min) the component settles on
    /// the lower bound instead of panicking like `f32::clamp`.
    #[inline]
    pub fn clamp_lower_biased(self, min: Vec2, max: Vec2) -> Vec2 {
        Vec2::new(self.x.min(max.x).max(min.x), self.y.min(max.y).max(min.y))
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
