//! Pointer routing over window chrome

use crate::input::{InputResult, PointerGesture};
use crate::math::Vec2;
use crate::window::{WindowId, WindowRegion};
use super::Desktop;

impl Desktop {
    /// Topmost drawable window under `pos` and the chrome region hit
    pub fn region_at(&self, pos: Vec2) -> Option<(WindowId, WindowRegion)> {
        self.windows
            .drawable_windows()
            .into_iter()
            .rev()
            .find_map(|window| {
                let frame = self.windows.frame(window.id.as_str())?;
                WindowRegion::hit_test(frame, pos).map(|region| (window.id.clone(), region))
            })
    }

    /// Handle pointer down
    pub fn pointer_down(&mut self, pos: Vec2) -> InputResult {
        // A stale gesture means we never saw its release
        self.pointer_cancel();

        let Some((id, region)) = self.region_at(pos) else {
            return InputResult::Unhandled;
        };

        match region {
            WindowRegion::TitleBar => self.handle_title_bar_press(id, pos),
            WindowRegion::Content => self.windows.bring_to_front(id.as_str()),
            button => {
                self.windows.bring_to_front(id.as_str());
                self.input.press_button(id, button);
            }
        }
        InputResult::Handled
    }

    /// Handle pointer move
    pub fn pointer_move(&mut self, pos: Vec2) -> InputResult {
        let Some((id, translation)) = self.input.translation(pos) else {
            return InputResult::Unhandled;
        };
        let id = id.clone();
        self.windows.update_drag(id.as_str(), translation);
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn pointer_up(&mut self, pos: Vec2) -> InputResult {
        match self.input.finish() {
            Some(PointerGesture::MoveWindow { window_id, start }) => {
                match self.windows.container() {
                    Some(container) => self.windows.end_drag(window_id.as_str(), pos - start, container),
                    None => self.windows.cancel_drag(window_id.as_str()),
                }
                InputResult::Handled
            }
            Some(PointerGesture::PressButton { window_id, region }) => {
                // Buttons fire only when released over themselves
                if self.region_at(pos) == Some((window_id.clone(), region)) {
                    self.press(window_id.as_str(), region);
                }
                InputResult::Handled
            }
            None => InputResult::Unhandled,
        }
    }

    /// Abandon the current gesture
    pub fn pointer_cancel(&mut self) {
        if let Some(PointerGesture::MoveWindow { window_id, .. }) = self.input.finish() {
            self.windows.cancel_drag(window_id.as_str());
        }
    }

    fn handle_title_bar_press(&mut self, id: WindowId, pos: Vec2) {
        let draggable = self.windows.get(id.as_str()).is_some_and(|w| w.is_normal());
        if !draggable {
            self.windows.bring_to_front(id.as_str());
            return;
        }
        self.windows.begin_drag(id.as_str());
        self.input.start_window_move(id, pos);
    }

    fn press(&mut self, id: &str, region: WindowRegion) {
        match region {
            WindowRegion::CloseButton => self.windows.close(id),
            WindowRegion::MinimizeButton => self.windows.minimize(id),
            WindowRegion::FullscreenButton => self.windows.toggle_fullscreen(id),
            WindowRegion::TitleBar | WindowRegion::Content => {}
        }
    }
}
