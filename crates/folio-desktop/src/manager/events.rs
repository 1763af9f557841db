//! Change notifications for the presentation layer

use serde::Serialize;
use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// A state change applied by the window manager
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WindowEvent {
    /// Closed window became visible
    Opened { id: WindowId },
    /// Window was closed
    Closed { id: WindowId },
    /// Window was minimized
    Minimized { id: WindowId },
    /// Minimized window was restored
    Restored { id: WindowId },
    /// Window entered fullscreen
    FullscreenEntered { id: WindowId },
    /// Window left fullscreen
    FullscreenExited { id: WindowId },
    /// Window received a new, highest z-order
    Raised { id: WindowId, z_order: u64 },
    /// Drag committed a new base position
    Moved { id: WindowId, position: Vec2 },
    /// Container size became known or changed
    ContainerResized { size: Size },
}

impl WindowEvent {
    /// Window the event concerns, if any
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            WindowEvent::Opened { id }
            | WindowEvent::Closed { id }
            | WindowEvent::Minimized { id }
            | WindowEvent::Restored { id }
            | WindowEvent::FullscreenEntered { id }
            | WindowEvent::FullscreenExited { id }
            | WindowEvent::Raised { id, .. }
            | WindowEvent::Moved { id, .. } => Some(id),
            WindowEvent::ContainerResized { .. } => None,
        }
    }
}
