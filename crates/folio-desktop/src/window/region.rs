//! Window region for hit testing

use crate::math::{Rect, Vec2, CHROME_STYLE};

/// Region of a window for hit testing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowRegion {
    /// Title bar area (for dragging)
    TitleBar,
    /// Content area (for interaction)
    Content,
    /// Close button
    CloseButton,
    /// Minimize button
    MinimizeButton,
    /// Fullscreen toggle button
    FullscreenButton,
}

impl WindowRegion {
    /// Find the region of `frame` under `pos`, if the point is inside it
    pub fn hit_test(frame: Rect, pos: Vec2) -> Option<WindowRegion> {
        if !frame.contains(pos) {
            return None;
        }

        // Buttons take priority over the title bar they sit on
        let buttons = [
            WindowRegion::CloseButton,
            WindowRegion::MinimizeButton,
            WindowRegion::FullscreenButton,
        ];
        if let Some(region) = buttons.into_iter().find(|b| b.button_rect(frame).contains(pos)) {
            return Some(region);
        }

        if title_bar_rect(frame).contains(pos) {
            return Some(WindowRegion::TitleBar);
        }

        Some(WindowRegion::Content)
    }

    /// Rectangle of this button within `frame`.
    ///
    /// Buttons are laid out left to right: close, minimize, fullscreen.
    /// Non-button regions yield an empty rectangle.
    pub fn button_rect(&self, frame: Rect) -> Rect {
        let slot = match self {
            WindowRegion::CloseButton => 0.0,
            WindowRegion::MinimizeButton => 1.0,
            WindowRegion::FullscreenButton => 2.0,
            WindowRegion::TitleBar | WindowRegion::Content => return Rect::ZERO,
        };
        let x = frame.x
            + CHROME_STYLE.button_margin
            + slot * (CHROME_STYLE.button_size + CHROME_STYLE.button_spacing);
        let y = frame.y + (CHROME_STYLE.title_bar_height - CHROME_STYLE.button_size) / 2.0;
        Rect::new(x, y, CHROME_STYLE.button_size, CHROME_STYLE.button_size)
    }
}

/// Title bar strip at the top of `frame`
pub(crate) fn title_bar_rect(frame: Rect) -> Rect {
    Rect::new(frame.x, frame.y, frame.width, CHROME_STYLE.title_bar_height)
}
