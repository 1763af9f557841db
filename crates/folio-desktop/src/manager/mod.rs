//! Window manager owning the authoritative state of every window
//!
//! This module is split into focused submodules:
//! - `lifecycle`: open, close, minimize, restore, dock toggle, fullscreen
//! - `drag`: drag gesture begin/update/end
//! - `layout`: default placement, clamping and container resizes
//! - `rendering`: read side for the presentation layer
//! - `dispatch`: mapping of discrete input events onto operations
//! - `events`: change notifications

mod lifecycle;
mod drag;
mod layout;
mod rendering;
mod dispatch;
mod events;

use std::collections::{HashMap, HashSet};

use crate::config::DesktopConfig;
use crate::error::{DesktopError, DesktopResult};
use crate::math::Size;
use crate::window::{Window, WindowDescriptor, WindowId};

pub use events::WindowEvent;
pub use lifecycle::DockAction;
pub use rendering::WindowView;

/// Window manager handling placement, stacking, visibility and drags
///
/// All operations run to completion on the caller's thread. Operations
/// addressed to unknown windows, or whose preconditions do not hold, are
/// ignored rather than reported as errors.
pub struct WindowManager {
    config: DesktopConfig,
    /// Registered descriptors in registration order
    descriptors: Vec<WindowDescriptor>,
    /// Window state keyed by descriptor id (populated by `initialize`)
    windows: HashMap<WindowId, Window>,
    /// Current container size, known once initialized
    container: Option<Size>,
    /// Next z-order value handed out by `bring_to_front`
    next_z: u64,
    /// Notifications not yet drained by the presentation layer
    events: Vec<WindowEvent>,
}

impl WindowManager {
    /// Create a manager for a descriptor registry.
    ///
    /// Fails if the configuration is invalid, an identifier is empty or
    /// repeated, or a sizing rule cannot produce a usable size.
    pub fn new(config: DesktopConfig, descriptors: Vec<WindowDescriptor>) -> DesktopResult<Self> {
        config.validate()?;

        let mut seen = HashSet::new();
        for descriptor in &descriptors {
            descriptor.validate()?;
            if !seen.insert(descriptor.id.clone()) {
                return Err(DesktopError::DuplicateWindow(descriptor.id.clone()));
            }
        }

        tracing::debug!(windows = descriptors.len(), "window manager created");

        Ok(Self {
            next_z: descriptors.len() as u64,
            config,
            descriptors,
            windows: HashMap::new(),
            container: None,
            events: Vec::new(),
        })
    }

    /// Layout configuration
    #[inline]
    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// Registered descriptors in registration order
    #[inline]
    pub fn descriptors(&self) -> &[WindowDescriptor] {
        &self.descriptors
    }

    /// Descriptor for a window
    pub fn descriptor(&self, id: &str) -> Option<&WindowDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Current container size (None before `initialize`)
    #[inline]
    pub fn container(&self) -> Option<Size> {
        self.container
    }

    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.container.is_some()
    }

    /// Get a window by ID
    pub fn get(&self, id: &str) -> Option<&Window> {
        self.windows.get(id)
    }

    /// Number of windows with state
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    /// Give a window the strictly highest z-order.
    ///
    /// Values come from a counter that only increases, so two windows never
    /// share a z-order.
    pub fn bring_to_front(&mut self, id: &str) {
        let z_order = self.next_z;
        let Some(window) = self.windows.get_mut(id) else {
            ignored("bring_to_front", id, "unknown window");
            return;
        };

        window.z_order = z_order;
        self.next_z += 1;
        tracing::debug!(window = %id, z_order, "window raised");
        self.events.push(WindowEvent::Raised {
            id: window.id.clone(),
            z_order,
        });
    }

    /// Frontmost visible, non-minimized window
    pub fn front(&self) -> Option<&Window> {
        self.windows
            .values()
            .filter(|w| w.is_visible() && !w.is_minimized())
            .max_by_key(|w| w.z_order)
    }

    /// Take every notification recorded since the last drain
    pub fn drain_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.events)
    }

    /// Notifications recorded since the last drain
    #[inline]
    pub fn pending_events(&self) -> &[WindowEvent] {
        &self.events
    }

    /// Default size of the window registered at `index` for a container
    fn default_size(&self, index: usize, container: Size) -> Size {
        self.descriptors
            .get(index)
            .map(|d| d.default_size(container))
            .unwrap_or(Size::ZERO)
    }
}

/// Log an operation that did not apply
fn ignored(op: &'static str, id: &str, reason: &'static str) {
    tracing::debug!(window = %id, reason, "{op} ignored");
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::math::Size;
    use crate::window::SizeRule;

    pub(crate) fn phone() -> Size {
        Size::new(390.0, 844.0)
    }

    pub(crate) fn descriptors() -> Vec<WindowDescriptor> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| {
                WindowDescriptor::new(id, id.to_uppercase(), "square", SizeRule::Fixed(Size::new(280.0, 270.0)))
            })
            .collect()
    }

    pub(crate) fn manager() -> WindowManager {
        let mut wm = WindowManager::new(DesktopConfig::default(), descriptors()).unwrap();
        wm.initialize(phone());
        wm
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let mut list = descriptors();
        list.push(list[0].clone());
        let err = WindowManager::new(DesktopConfig::default(), list).err().unwrap();
        assert!(matches!(err, DesktopError::DuplicateWindow(id) if id == "a"));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = DesktopConfig {
            top_inset: f32::NAN,
            ..Default::default()
        };
        assert!(WindowManager::new(config, descriptors()).is_err());
    }

    #[test]
    fn test_operations_before_initialize_are_ignored() {
        let mut wm = WindowManager::new(DesktopConfig::default(), descriptors()).unwrap();
        assert!(!wm.is_initialized());
        wm.open("a");
        wm.bring_to_front("a");
        assert!(wm.get("a").is_none());
        assert!(wm.drain_events().is_empty());
    }

    #[test]
    fn test_initial_z_order_follows_registration() {
        let wm = manager();
        assert_eq!(wm.get("a").unwrap().z_order, 0);
        assert_eq!(wm.get("b").unwrap().z_order, 1);
        assert_eq!(wm.get("c").unwrap().z_order, 2);
        assert!(wm.front().is_none());
    }

    #[test]
    fn test_bring_to_front_is_strictly_monotonic() {
        let mut wm = manager();
        let order = ["b", "a", "b", "c", "a", "a"];
        let mut last = 2;
        for id in order {
            wm.bring_to_front(id);
            let z = wm.get(id).unwrap().z_order;
            assert!(z > last);
            last = z;
            let max = wm.windows.values().map(|w| w.z_order).max().unwrap();
            assert_eq!(max, z);
            assert_eq!(wm.windows.values().filter(|w| w.z_order == max).count(), 1);
        }
    }

    #[test]
    fn test_first_raise_after_init_takes_next_value() {
        let mut wm = manager();
        assert_eq!(wm.get("c").unwrap().z_order, 2);
        wm.bring_to_front("a");
        assert_eq!(wm.get("a").unwrap().z_order, 3);
        assert_eq!(wm.get("b").unwrap().z_order, 1);
        assert_eq!(wm.get("c").unwrap().z_order, 2);
    }

    #[test]
    fn test_bring_to_front_unknown_is_noop() {
        let mut wm = manager();
        wm.drain_events();
        wm.bring_to_front("missing");
        assert_eq!(wm.next_z, 3);
        assert!(wm.drain_events().is_empty());
    }

    #[test]
    fn test_descriptor_lookup() {
        let wm = manager();
        assert_eq!(wm.descriptor("b").unwrap().label, "B");
        assert!(wm.descriptor("zzz").is_none());
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut wm = manager();
        wm.open("a");
        assert!(!wm.pending_events().is_empty());
        let events = wm.drain_events();
        assert!(matches!(events[0], WindowEvent::ContainerResized { .. }));
        assert!(wm.pending_events().is_empty());
    }
}
