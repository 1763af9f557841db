//! Window lifecycle: open, close, minimize, restore, fullscreen

use serde::Serialize;
use crate::window::{Presentation, WindowPhase};
use super::{ignored, WindowEvent, WindowManager};

/// What a dock tap did
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DockAction {
    /// Closed window was opened and brought to front
    Opened,
    /// Minimized window was restored and brought to front
    Restored,
    /// Visible window was minimized
    Minimized,
    /// Unknown window, or manager not initialized
    Ignored,
}

impl WindowManager {
    /// Open a window.
    ///
    /// A closed window is re-centered for the current container, shown and
    /// brought to front. A minimized window is restored. A window that is
    /// already showing is only brought to front.
    pub fn open(&mut self, id: &str) {
        let Some(container) = self.container else {
            ignored("open", id, "not initialized");
            return;
        };
        let Some(window) = self.windows.get(id) else {
            ignored("open", id, "unknown window");
            return;
        };

        let (phase, index) = (window.phase, window.index);
        match phase {
            WindowPhase::Closed => {
                let size = self.default_size(index, container);
                let position = self.default_position(index, size, container);

                if let Some(window) = self.windows.get_mut(id) {
                    window.size = size;
                    window.position = position;
                    window.drag = None;
                    window.phase = WindowPhase::Open(Presentation::Normal);
                    tracing::debug!(window = %id, x = position.x, y = position.y, "window opened");
                    self.events.push(WindowEvent::Opened { id: window.id.clone() });
                }
                self.bring_to_front(id);
            }
            WindowPhase::Open(Presentation::Minimized) => self.restore(id),
            WindowPhase::Open(_) => self.bring_to_front(id),
        }
    }

    /// Close a window.
    ///
    /// Clears minimized and fullscreen. Position and z-order are left as they
    /// were; reopening re-centers anyway.
    pub fn close(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            ignored("close", id, "unknown window");
            return;
        };
        if !window.is_visible() {
            ignored("close", id, "already closed");
            return;
        }

        window.phase = WindowPhase::Closed;
        window.drag = None;
        tracing::debug!(window = %id, "window closed");
        self.events.push(WindowEvent::Closed { id: window.id.clone() });
    }

    /// Minimize a visible window, leaving fullscreen if needed.
    ///
    /// Minimizing an already minimized window changes nothing.
    pub fn minimize(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            ignored("minimize", id, "unknown window");
            return;
        };

        let phase = window.phase;
        match phase {
            WindowPhase::Closed => ignored("minimize", id, "not visible"),
            WindowPhase::Open(Presentation::Minimized) => {}
            WindowPhase::Open(_) => {
                window.phase = WindowPhase::Open(Presentation::Minimized);
                window.drag = None;
                tracing::debug!(window = %id, "window minimized");
                self.events.push(WindowEvent::Minimized { id: window.id.clone() });
            }
        }
    }

    /// Un-minimize a visible window and bring it to front.
    ///
    /// The last position is kept. Restoring a window that is not minimized
    /// only brings it to front; closed windows are ignored.
    pub fn restore(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            ignored("restore", id, "unknown window");
            return;
        };

        let phase = window.phase;
        match phase {
            WindowPhase::Closed => {
                ignored("restore", id, "not visible");
                return;
            }
            WindowPhase::Open(Presentation::Minimized) => {
                window.phase = WindowPhase::Open(Presentation::Normal);
                tracing::debug!(window = %id, "window restored");
                self.events.push(WindowEvent::Restored { id: window.id.clone() });
            }
            WindowPhase::Open(_) => {}
        }
        self.bring_to_front(id);
    }

    /// Dock tap: open a closed window, restore a minimized one, minimize a
    /// showing one.
    pub fn toggle_from_dock(&mut self, id: &str) -> DockAction {
        let phase = match (self.container, self.windows.get(id)) {
            (Some(_), Some(window)) => window.phase,
            _ => {
                ignored("toggle_from_dock", id, "unknown window");
                return DockAction::Ignored;
            }
        };

        match phase {
            WindowPhase::Open(Presentation::Minimized) => {
                self.restore(id);
                DockAction::Restored
            }
            WindowPhase::Open(_) => {
                self.minimize(id);
                DockAction::Minimized
            }
            WindowPhase::Closed => {
                self.open(id);
                DockAction::Opened
            }
        }
    }

    /// Enter or leave fullscreen.
    ///
    /// Entering cancels any drag and brings the window to front. The
    /// windowed position is not touched, so leaving fullscreen returns the
    /// window to exactly where it was. Minimized and closed windows are
    /// ignored.
    pub fn toggle_fullscreen(&mut self, id: &str) {
        let Some(window) = self.windows.get_mut(id) else {
            ignored("toggle_fullscreen", id, "unknown window");
            return;
        };

        let phase = window.phase;
        match phase {
            WindowPhase::Open(Presentation::Normal) => {
                window.phase = WindowPhase::Open(Presentation::Fullscreen);
                window.drag = None;
                tracing::debug!(window = %id, "window entered fullscreen");
                self.events.push(WindowEvent::FullscreenEntered { id: window.id.clone() });
                self.bring_to_front(id);
            }
            WindowPhase::Open(Presentation::Fullscreen) => {
                window.phase = WindowPhase::Open(Presentation::Normal);
                tracing::debug!(window = %id, "window left fullscreen");
                self.events.push(WindowEvent::FullscreenExited { id: window.id.clone() });
            }
            WindowPhase::Open(Presentation::Minimized) => ignored("toggle_fullscreen", id, "minimized"),
            WindowPhase::Closed => ignored("toggle_fullscreen", id, "not visible"),
        }
    }
}
