//! 2D size type for dimensions

use serde::{Deserialize, Serialize};

/// 2D size for width and height
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Check if size is zero or negative
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Usable as a container: finite and strictly positive
    #[inline]
    pub fn is_valid_container(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && !self.is_empty()
    }

    /// Scale each dimension by its own factor
    #[inline]
    pub fn scale_by(self, width_factor: f32, height_factor: f32) -> Self {
        Self::new(self.width * width_factor, self.height * height_factor)
    }

    /// Component-wise minimum
    #[inline]
    pub fn min(self, other: Size) -> Self {
        Self::new(self.width.min(other.width), self.height.min(other.height))
    }
}
