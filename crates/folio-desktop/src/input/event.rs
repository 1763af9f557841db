//! Discrete input events from the host UI runtime

use serde::{Deserialize, Serialize};
use crate::math::{Size, Vec2};
use crate::window::WindowId;

/// An input event already resolved to a target window
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Dock icon tapped
    DockTap { id: WindowId },
    /// Window (or its desktop icon) tapped
    Activate { id: WindowId },
    /// Close button tapped
    Close { id: WindowId },
    /// Minimize button tapped
    Minimize { id: WindowId },
    /// Fullscreen button tapped
    ToggleFullscreen { id: WindowId },
    /// Title bar drag started
    DragBegan { id: WindowId },
    /// Title bar drag moved
    DragChanged { id: WindowId, translation: Vec2 },
    /// Title bar drag released
    DragEnded { id: WindowId, translation: Vec2 },
    /// Gesture interrupted by the system
    DragCancelled { id: WindowId },
    /// Container size changed
    ContainerResized { size: Size },
}

impl InputEvent {
    /// Target window, if the event has one
    pub fn window_id(&self) -> Option<&WindowId> {
        match self {
            InputEvent::DockTap { id }
            | InputEvent::Activate { id }
            | InputEvent::Close { id }
            | InputEvent::Minimize { id }
            | InputEvent::ToggleFullscreen { id }
            | InputEvent::DragBegan { id }
            | InputEvent::DragChanged { id, .. }
            | InputEvent::DragEnded { id, .. }
            | InputEvent::DragCancelled { id } => Some(id),
            InputEvent::ContainerResized { .. } => None,
        }
    }
}
