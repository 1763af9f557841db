//! Default placement, bounds clamping and container resizes

use crate::math::{Rect, Size, Vec2};
use crate::window::Window;
use super::{WindowEvent, WindowManager};

impl WindowManager {
    /// Create state for every registered window once the container size is
    /// known.
    ///
    /// Windows start closed, centered with a per-index cascade, with z-order
    /// equal to their registration index. Calling this again after the first
    /// time behaves like [`WindowManager::resize_container`].
    pub fn initialize(&mut self, container: Size) {
        if !container.is_valid_container() {
            tracing::warn!(?container, "ignoring degenerate container size");
            return;
        }
        if self.is_initialized() {
            self.resize_container(container);
            return;
        }

        for (index, descriptor) in self.descriptors.iter().enumerate() {
            let size = descriptor.default_size(container);
            let position = self.default_position(index, size, container);
            let window = Window::new(descriptor.id.clone(), index, size, position);
            self.windows.insert(descriptor.id.clone(), window);
        }
        self.next_z = self.descriptors.len() as u64;
        self.container = Some(container);

        tracing::debug!(?container, windows = self.windows.len(), "window manager initialized");
        self.events.push(WindowEvent::ContainerResized { size: container });
    }

    /// Adapt to a new container size.
    ///
    /// Default sizes are recomputed and every open window that is not being
    /// dragged is clamped back into bounds. Dragged windows are clamped when
    /// their drag ends.
    pub fn resize_container(&mut self, container: Size) {
        if !container.is_valid_container() {
            tracing::warn!(?container, "ignoring degenerate container size");
            return;
        }
        if !self.is_initialized() {
            self.initialize(container);
            return;
        }

        let sizes: Vec<Size> = (0..self.descriptors.len())
            .map(|index| self.default_size(index, container))
            .collect();
        let (top, bottom) = (self.config.top_inset, self.config.bottom_inset);

        for window in self.windows.values_mut() {
            window.size = sizes[window.index];
            if window.is_visible() && !window.is_dragging() {
                window.position = clamp_to_bounds(window.position, window.size, container, top, bottom);
            }
        }
        self.container = Some(container);

        tracing::debug!(?container, "container resized");
        self.events.push(WindowEvent::ContainerResized { size: container });
    }

    /// Clamp a proposed position for a window into the container bounds.
    ///
    /// `x` stays in `[0, width - window width]` and `y` in
    /// `[top inset, height - bottom inset - window height]`. A window larger
    /// than the available area settles on the lower bound. Returns `None`
    /// for an unknown window.
    pub fn clamped_position(&self, id: &str, proposed: Vec2, container: Size) -> Option<Vec2> {
        let window = self.windows.get(id)?;
        let size = self.default_size(window.index, container);
        Some(clamp_to_bounds(
            proposed,
            size,
            container,
            self.config.top_inset,
            self.config.bottom_inset,
        ))
    }

    /// Centered position for the window at `index`, cascaded and clamped
    pub(crate) fn default_position(&self, index: usize, size: Size, container: Size) -> Vec2 {
        let top = self.config.top_inset;
        let bottom = self.config.bottom_inset;
        let available = container.height - top - bottom;
        let centered = Vec2::new(
            (container.width - size.width) / 2.0,
            top + (available - size.height) / 2.0,
        );
        let step = self.config.cascade_step * index as f32;
        clamp_to_bounds(centered + Vec2::new(step, step), size, container, top, bottom)
    }

    /// Area between the menu bar and the dock
    pub fn work_area(&self) -> Option<Rect> {
        let container = self.container?;
        let top = self.config.top_inset;
        let height = (container.height - top - self.config.bottom_inset).max(0.0);
        Some(Rect::new(0.0, top, container.width, height))
    }
}

/// Clamp the top-left corner of a `size` window into the container
pub(crate) fn clamp_to_bounds(proposed: Vec2, size: Size, container: Size, top: f32, bottom: f32) -> Vec2 {
    let min = Vec2::new(0.0, top);
    let max = Vec2::new(container.width - size.width, container.height - bottom - size.height);
    proposed.clamp_lower_biased(min, max)
}
