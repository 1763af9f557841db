//! Read side for the presentation layer

use serde::Serialize;
use crate::math::Rect;
use crate::window::{AccentPair, Window, WindowId};
use super::WindowManager;

/// Everything a renderer needs to draw one window
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowView {
    pub id: WindowId,
    pub label: String,
    pub icon: String,
    pub accent: AccentPair,
    /// Rendered rectangle: base position plus drag delta, or the whole
    /// container when fullscreen
    pub rect: Rect,
    pub z_order: u64,
    pub visible: bool,
    pub minimized: bool,
    pub fullscreen: bool,
    pub dragging: bool,
    /// Frontmost visible, non-minimized window
    pub focused: bool,
}

impl WindowManager {
    /// Rendered rectangle of a window
    pub fn frame(&self, id: &str) -> Option<Rect> {
        let window = self.windows.get(id)?;
        Some(self.frame_of(window))
    }

    /// Windows sorted by z-order (back to front)
    pub fn windows_by_z(&self) -> Vec<&Window> {
        let mut windows: Vec<&Window> = self.windows.values().collect();
        windows.sort_by_key(|w| w.z_order);
        windows
    }

    /// Visible, non-minimized windows back to front
    pub fn drawable_windows(&self) -> Vec<&Window> {
        let mut windows = self.windows_by_z();
        windows.retain(|w| w.is_visible() && !w.is_minimized());
        windows
    }

    /// Snapshot of every window, back to front
    pub fn views(&self) -> Vec<WindowView> {
        let focused = self.front().map(|w| w.id.clone());
        self.windows_by_z()
            .into_iter()
            .filter_map(|w| {
                let descriptor = self.descriptors.get(w.index)?;
                Some(WindowView {
                    id: w.id.clone(),
                    label: descriptor.label.clone(),
                    icon: descriptor.icon.clone(),
                    accent: descriptor.accent,
                    rect: self.frame_of(w),
                    z_order: w.z_order,
                    visible: w.is_visible(),
                    minimized: w.is_minimized(),
                    fullscreen: w.is_fullscreen(),
                    dragging: w.is_dragging(),
                    focused: focused.as_ref() == Some(&w.id),
                })
            })
            .collect()
    }

    fn frame_of(&self, window: &Window) -> Rect {
        match self.container {
            Some(container) if window.is_fullscreen() => {
                Rect::new(0.0, 0.0, container.width, container.height)
            }
            _ => window.rect(),
        }
    }
}
