//! Static window descriptors

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use super::WindowId;

/// 8-bit RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex notation (`#rrggbb`)
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Gradient endpoints used for a window's icon and accents
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccentPair {
    pub primary: Rgb,
    pub secondary: Rgb,
}

impl AccentPair {
    pub const fn new(primary: Rgb, secondary: Rgb) -> Self {
        Self { primary, secondary }
    }
}

/// Default window size as a function of the container size
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SizeRule {
    /// Same size regardless of container
    Fixed(Size),
    /// Fractions of the container, optionally capped
    Relative {
        width: f32,
        height: f32,
        #[serde(default)]
        max: Option<Size>,
    },
    /// Arbitrary function, only available from code
    #[serde(skip)]
    Custom(fn(Size) -> Size),
}

impl SizeRule {
    /// Compute the default size for a container
    pub fn resolve(&self, container: Size) -> Size {
        match *self {
            SizeRule::Fixed(size) => size,
            SizeRule::Relative { width, height, max } => {
                let size = container.scale_by(width, height);
                match max {
                    Some(max) => size.min(max),
                    None => size,
                }
            }
            SizeRule::Custom(f) => f(container),
        }
    }

    /// Whether the rule can only produce finite, positive sizes
    fn is_valid(&self) -> bool {
        let positive = |v: f32| v.is_finite() && v > 0.0;
        match *self {
            SizeRule::Fixed(size) => positive(size.width) && positive(size.height),
            SizeRule::Relative { width, height, max } => {
                positive(width)
                    && positive(height)
                    && max.map_or(true, |m| positive(m.width) && positive(m.height))
            }
            SizeRule::Custom(_) => true,
        }
    }
}

/// Static description of one window kind
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WindowDescriptor {
    /// Unique identifier, also the window's key
    pub id: WindowId,
    /// Title shown in the title bar, dock and menu bar
    pub label: String,
    /// Icon reference (symbol name) resolved by the presentation layer
    pub icon: String,
    #[serde(default)]
    pub accent: AccentPair,
    pub size: SizeRule,
}

impl WindowDescriptor {
    pub fn new(
        id: impl Into<WindowId>,
        label: impl Into<String>,
        icon: impl Into<String>,
        size: SizeRule,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: icon.into(),
            accent: AccentPair::default(),
            size,
        }
    }

    pub fn with_accent(mut self, accent: AccentPair) -> Self {
        self.accent = accent;
        self
    }

    /// Default size for a container
    #[inline]
    pub fn default_size(&self, container: Size) -> Size {
        self.size.resolve(container)
    }

    pub(crate) fn validate(&self) -> DesktopResult<()> {
        if self.id.as_str().is_empty() {
            return Err(DesktopError::EmptyWindowId);
        }
        if !self.size.is_valid() {
            return Err(DesktopError::InvalidSizeRule { id: self.id.clone() });
        }
        Ok(())
    }
}
