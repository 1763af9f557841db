//! Dock model

use serde::Serialize;
use crate::manager::DockAction;
use crate::window::{AccentPair, WindowId, WindowPhase, Presentation};
use super::Desktop;

/// Dot shown under a dock icon
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DockIndicator {
    Closed,
    Running,
    Minimized,
}

impl From<WindowPhase> for DockIndicator {
    fn from(phase: WindowPhase) -> Self {
        match phase {
            WindowPhase::Closed => DockIndicator::Closed,
            WindowPhase::Open(Presentation::Minimized) => DockIndicator::Minimized,
            WindowPhase::Open(_) => DockIndicator::Running,
        }
    }
}

/// One dock icon
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockItem {
    pub id: WindowId,
    pub label: String,
    pub icon: String,
    pub accent: AccentPair,
    pub indicator: DockIndicator,
}

impl Desktop {
    /// Dock icons in registration order
    pub fn dock(&self) -> Vec<DockItem> {
        self.windows
            .descriptors()
            .iter()
            .map(|descriptor| {
                let indicator = self
                    .windows
                    .get(descriptor.id.as_str())
                    .map_or(DockIndicator::Closed, |w| w.phase().into());
                DockItem {
                    id: descriptor.id.clone(),
                    label: descriptor.label.clone(),
                    icon: descriptor.icon.clone(),
                    accent: descriptor.accent,
                    indicator,
                }
            })
            .collect()
    }

    /// Tap a dock icon
    pub fn tap_dock(&mut self, id: &str) -> DockAction {
        if self.input.gesture().is_some_and(|g| g.window_id() == id) {
            self.pointer_cancel();
        }
        self.windows.toggle_from_dock(id)
    }
}
