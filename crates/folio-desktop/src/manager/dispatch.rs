//! Discrete input dispatch

use crate::input::{InputEvent, InputResult};
use super::{ignored, WindowManager};

impl WindowManager {
    /// Apply a discrete input event.
    ///
    /// Returns `Unhandled` when the event names a window the registry does
    /// not know, or arrives before the container size is known.
    pub fn handle(&mut self, event: &InputEvent) -> InputResult {
        if let InputEvent::ContainerResized { size } = event {
            self.resize_container(*size);
            return InputResult::Handled;
        }

        let Some(container) = self.container else {
            tracing::debug!(?event, "input ignored before initialize");
            return InputResult::Unhandled;
        };
        if let Some(id) = event.window_id() {
            if !self.windows.contains_key(id.as_str()) {
                ignored("handle", id.as_str(), "unknown window");
                return InputResult::Unhandled;
            }
        }

        match event {
            InputEvent::DockTap { id } => {
                self.toggle_from_dock(id.as_str());
            }
            InputEvent::Activate { id } => self.open(id.as_str()),
            InputEvent::Close { id } => self.close(id.as_str()),
            InputEvent::Minimize { id } => self.minimize(id.as_str()),
            InputEvent::ToggleFullscreen { id } => self.toggle_fullscreen(id.as_str()),
            InputEvent::DragBegan { id } => self.begin_drag(id.as_str()),
            InputEvent::DragChanged { id, translation } => self.update_drag(id.as_str(), *translation),
            InputEvent::DragEnded { id, translation } => self.end_drag(id.as_str(), *translation, container),
            InputEvent::DragCancelled { id } => self.cancel_drag(id.as_str()),
            InputEvent::ContainerResized { .. } => {}
        }
        InputResult::Handled
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DesktopConfig;
    use crate::input::{InputEvent, InputResult};
    use crate::manager::tests::{descriptors, manager};
    use crate::manager::WindowManager;
    use crate::math::{Size, Vec2};
    use crate::window::WindowId;

    fn id(s: &str) -> WindowId {
        WindowId::new(s)
    }

    #[test]
    fn test_drag_sequence_through_events() {
        let mut wm = manager();
        wm.handle(&InputEvent::Activate { id: id("a") });
        wm.handle(&InputEvent::DragBegan { id: id("a") });
        wm.handle(&InputEvent::DragChanged {
            id: id("a"),
            translation: Vec2::new(1000.0, 1000.0),
        });
        assert!(wm.get("a").unwrap().is_dragging());

        let result = wm.handle(&InputEvent::DragEnded {
            id: id("a"),
            translation: Vec2::new(1000.0, 1000.0),
        });
        assert_eq!(result, InputResult::Handled);
        assert_eq!(wm.get("a").unwrap().position, Vec2::new(110.0, 504.0));
    }

    #[test]
    fn test_button_events() {
        let mut wm = manager();
        wm.handle(&InputEvent::DockTap { id: id("b") });
        assert!(wm.get("b").unwrap().is_normal());

        wm.handle(&InputEvent::ToggleFullscreen { id: id("b") });
        assert!(wm.get("b").unwrap().is_fullscreen());

        wm.handle(&InputEvent::Minimize { id: id("b") });
        assert!(wm.get("b").unwrap().is_minimized());

        wm.handle(&InputEvent::Close { id: id("b") });
        assert!(!wm.get("b").unwrap().is_visible());
    }

    #[test]
    fn test_unknown_window_unhandled() {
        let mut wm = manager();
        let result = wm.handle(&InputEvent::Close { id: id("ghost") });
        assert_eq!(result, InputResult::Unhandled);
    }

    #[test]
    fn test_resize_event_initializes() {
        let mut wm = WindowManager::new(DesktopConfig::default(), descriptors()).unwrap();
        assert_eq!(wm.handle(&InputEvent::Activate { id: id("a") }), InputResult::Unhandled);

        let result = wm.handle(&InputEvent::ContainerResized {
            size: Size::new(390.0, 844.0),
        });
        assert!(result.is_handled());
        assert!(wm.is_initialized());
        assert_eq!(wm.count(), 3);
    }

    #[test]
    fn test_drag_cancelled_event() {
        let mut wm = manager();
        wm.handle(&InputEvent::Activate { id: id("c") });
        let start = wm.get("c").unwrap().position;
        wm.handle(&InputEvent::DragBegan { id: id("c") });
        wm.handle(&InputEvent::DragChanged {
            id: id("c"),
            translation: Vec2::new(30.0, 30.0),
        });
        wm.handle(&InputEvent::DragCancelled { id: id("c") });

        let c = wm.get("c").unwrap();
        assert_eq!(c.position, start);
        assert!(!c.is_dragging());
    }
}
