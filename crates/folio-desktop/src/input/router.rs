//! Pointer gesture state machine

use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};

/// Pointer gesture in progress
#[derive(Clone, Debug, PartialEq)]
pub enum PointerGesture {
    /// Dragging a window by its title bar
    MoveWindow {
        /// Window being moved
        window_id: WindowId,
        /// Pointer position when the drag started
        start: Vec2,
    },
    /// Holding a title bar button; it fires on release over the same button
    PressButton {
        window_id: WindowId,
        region: WindowRegion,
    },
}

impl PointerGesture {
    /// Check if this is a window move
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, PointerGesture::MoveWindow { .. })
    }

    /// Window the gesture targets
    pub fn window_id(&self) -> &WindowId {
        match self {
            PointerGesture::MoveWindow { window_id, .. }
            | PointerGesture::PressButton { window_id, .. } => window_id,
        }
    }
}

/// Input router holding the current pointer gesture
#[derive(Default)]
pub struct InputRouter {
    gesture: Option<PointerGesture>,
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { gesture: None }
    }

    /// Get current gesture
    #[inline]
    pub fn gesture(&self) -> Option<&PointerGesture> {
        self.gesture.as_ref()
    }

    /// Check if currently dragging a window
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.gesture.as_ref().is_some_and(PointerGesture::is_move)
    }

    /// Start window move operation
    pub fn start_window_move(&mut self, window_id: WindowId, start: Vec2) {
        self.gesture = Some(PointerGesture::MoveWindow { window_id, start });
    }

    /// Start pressing a title bar button
    pub fn press_button(&mut self, window_id: WindowId, region: WindowRegion) {
        self.gesture = Some(PointerGesture::PressButton { window_id, region });
    }

    /// Translation of a window move relative to its start point
    pub fn translation(&self, pos: Vec2) -> Option<(&WindowId, Vec2)> {
        match &self.gesture {
            Some(PointerGesture::MoveWindow { window_id, start }) => Some((window_id, pos - *start)),
            _ => None,
        }
    }

    /// Finish the current gesture, returning it
    pub fn finish(&mut self) -> Option<PointerGesture> {
        self.gesture.take()
    }
}
