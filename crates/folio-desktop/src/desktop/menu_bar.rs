//! Menu bar title

use super::Desktop;

impl Desktop {
    /// Title of the frontmost window, or the desktop name when none is showing
    pub fn menu_bar(&self) -> &str {
        self.windows
            .front()
            .and_then(|window| self.windows.descriptor(window.id.as_str()))
            .map_or(self.windows.config().desktop_name.as_str(), |d| d.label.as_str())
    }
}
