//! Drag gestures
//!
//! While a gesture is in progress only the window's drag delta changes, so a
//! renderer always reads a consistent `position + delta` pair. The base
//! position is committed (and clamped) when the gesture ends.

use crate::math::{Size, Vec2};
use super::layout::clamp_to_bounds;
use super::{ignored, WindowEvent, WindowManager};

impl WindowManager {
    /// Start dragging a window, bringing it to front.
    ///
    /// Ignored for fullscreen, minimized and closed windows.
    pub fn begin_drag(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            ignored("begin_drag", id, "unknown window");
            return;
        };
        if !window.is_normal() {
            ignored("begin_drag", id, "not draggable");
            return;
        }

        window.drag = Some(Vec2::ZERO);
        tracing::debug!(window = %id, "drag began");
        self.bring_to_front(id);
    }

    /// Record the gesture's current translation without moving the window
    pub fn update_drag(&mut self, id: &str, translation: Vec2) {
        let Some(window) = self.windows.get_mut(id) else {
            ignored("update_drag", id, "unknown window");
            return;
        };
        if !window.is_normal() || !translation.is_finite() {
            ignored("update_drag", id, "not draggable");
            return;
        }

        window.drag = Some(translation);
        tracing::trace!(window = %id, dx = translation.x, dy = translation.y, "drag updated");
    }

    /// Finish a drag: commit `position + translation`, clamped into the
    /// container, and reset the drag delta to zero.
    pub fn end_drag(&mut self, id: &str, translation: Vec2, container: Size) {
        let (top, bottom) = (self.config.top_inset, self.config.bottom_inset);
        let Some(window) = self.windows.get(id) else {
            ignored("end_drag", id, "unknown window");
            return;
        };
        let size = self.default_size(window.index, container);

        let Some(window) = self.windows.get_mut(id) else {
            return;
        };
        if !window.is_normal() {
            window.drag = None;
            ignored("end_drag", id, "not draggable");
            return;
        }
        if !translation.is_finite() || !container.is_valid_container() {
            window.drag = None;
            tracing::warn!(window = %id, ?translation, ?container, "drag cancelled on invalid geometry");
            return;
        }

        let position = clamp_to_bounds(window.position + translation, size, container, top, bottom);
        window.position = position;
        window.drag = None;
        tracing::debug!(window = %id, x = position.x, y = position.y, "drag ended");
        self.events.push(WindowEvent::Moved {
            id: window.id.clone(),
            position,
        });
    }

    /// Abandon a drag, leaving the window where it was before the gesture
    pub fn cancel_drag(&mut self, id: &str) {
        if let Some(window) = self.windows.get_mut(id) {
            if window.drag.take().is_some() {
                tracing::debug!(window = %id, "drag cancelled");
            }
        }
    }
}
