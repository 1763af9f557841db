//! Desktop shell
//!
//! Wraps the window manager with the pieces a host UI needs around it:
//! pointer routing over window chrome, the dock and the menu bar.

mod pointer;
mod dock;
mod menu_bar;

use crate::catalog;
use crate::config::DesktopConfig;
use crate::error::DesktopResult;
use crate::input::InputRouter;
use crate::manager::WindowManager;
use crate::math::Size;
use crate::window::WindowDescriptor;

pub use dock::{DockIndicator, DockItem};

/// Simulated desktop: windows plus the pointer gesture in progress
pub struct Desktop {
    /// Window manager
    pub windows: WindowManager,
    /// Pointer gesture router
    pub input: InputRouter,
}

impl Desktop {
    /// Create a desktop for a descriptor registry
    pub fn new(config: DesktopConfig, descriptors: Vec<WindowDescriptor>) -> DesktopResult<Self> {
        Ok(Self {
            windows: WindowManager::new(config, descriptors)?,
            input: InputRouter::new(),
        })
    }

    /// Desktop with the built-in portfolio windows and default layout
    pub fn portfolio() -> DesktopResult<Self> {
        Self::new(DesktopConfig::default(), catalog::portfolio())
    }

    /// Set the container size, creating window state on first call
    pub fn init(&mut self, container: Size) {
        self.windows.initialize(container);
    }

    /// Adapt to a new container size
    pub fn resize(&mut self, container: Size) {
        self.windows.resize_container(container);
    }
}
