//! Window record and lifecycle phase

use serde::{Deserialize, Serialize};
use crate::math::{Rect, Size, Vec2};
use super::WindowId;

/// How an open window is presented
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Presentation {
    #[default]
    Normal,
    Minimized,
    Fullscreen,
}

/// Lifecycle phase of a window
///
/// Minimized and fullscreen are mutually exclusive by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", content = "presentation", rename_all = "lowercase")]
pub enum WindowPhase {
    /// Never opened, or closed
    #[default]
    Closed,
    /// Visible, possibly minimized or fullscreen
    Open(Presentation),
}

/// State of one registered window
#[derive(Clone, Debug)]
pub struct Window {
    /// Descriptor identifier
    pub id: WindowId,
    /// Registration index (drives the cascade offset)
    pub index: usize,
    /// Top-left corner in container space, excluding any in-progress drag
    pub position: Vec2,
    /// Default size for the current container
    pub size: Size,
    /// Stacking value (higher = in front), never reused
    pub z_order: u64,
    pub(crate) phase: WindowPhase,
    /// Translation of the in-progress drag gesture
    pub(crate) drag: Option<Vec2>,
}

impl Window {
    pub(crate) fn new(id: WindowId, index: usize, size: Size, position: Vec2) -> Self {
        Self {
            id,
            index,
            position,
            size,
            z_order: index as u64,
            phase: WindowPhase::Closed,
            drag: None,
        }
    }

    #[inline]
    pub fn phase(&self) -> WindowPhase {
        self.phase
    }

    /// Opened and not closed since (minimized windows are still visible)
    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, WindowPhase::Open(_))
    }

    #[inline]
    pub fn is_minimized(&self) -> bool {
        self.phase == WindowPhase::Open(Presentation::Minimized)
    }

    #[inline]
    pub fn is_fullscreen(&self) -> bool {
        self.phase == WindowPhase::Open(Presentation::Fullscreen)
    }

    /// Visible, not minimized and not fullscreen
    #[inline]
    pub fn is_normal(&self) -> bool {
        self.phase == WindowPhase::Open(Presentation::Normal)
    }

    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Current drag translation, zero when no gesture is in progress
    #[inline]
    pub fn drag_delta(&self) -> Vec2 {
        self.drag.unwrap_or(Vec2::ZERO)
    }

    /// Base position plus the in-progress drag translation
    #[inline]
    pub fn display_position(&self) -> Vec2 {
        self.position + self.drag_delta()
    }

    /// Windowed rectangle (ignores fullscreen)
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.display_position(), self.size)
    }
}
