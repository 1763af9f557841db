//! WASM exports for the desktop shell
//!
//! Wraps [`Desktop`] in a JS-friendly API. Structured data crosses the
//! boundary as JSON strings.

use wasm_bindgen::prelude::*;

use crate::config::DesktopConfig;
use crate::desktop::Desktop;
use crate::catalog;
use crate::input::InputEvent;
use crate::math::{Size, Vec2};

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Desktop controller for WASM - wraps Desktop with JS-friendly API
#[wasm_bindgen]
pub struct DesktopController {
    desktop: Desktop,
}

#[wasm_bindgen]
impl DesktopController {
    /// Create a controller with the portfolio windows and default layout
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<DesktopController, JsValue> {
        console_error_panic_hook::set_once();
        let desktop = Desktop::portfolio().map_err(to_js)?;
        Ok(Self { desktop })
    }

    /// Create a controller with a JSON layout configuration
    #[wasm_bindgen]
    pub fn with_config(config_json: &str) -> Result<DesktopController, JsValue> {
        console_error_panic_hook::set_once();
        let config = DesktopConfig::from_json(config_json).map_err(to_js)?;
        let desktop = Desktop::new(config, catalog::portfolio()).map_err(to_js)?;
        Ok(Self { desktop })
    }

    // =========================================================================
    // Container
    // =========================================================================

    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.desktop.init(Size::new(width, height));
    }

    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.desktop.resize(Size::new(width, height));
    }

    // =========================================================================
    // Windows
    // =========================================================================

    /// Tap a dock icon; returns what happened (`opened`, `restored`, ...)
    #[wasm_bindgen]
    pub fn tap_dock(&mut self, id: &str) -> String {
        let action = self.desktop.tap_dock(id);
        serde_json::to_value(action)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string))
            .unwrap_or_default()
    }

    #[wasm_bindgen]
    pub fn open(&mut self, id: &str) {
        self.desktop.windows.open(id);
    }

    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) {
        self.desktop.windows.close(id);
    }

    #[wasm_bindgen]
    pub fn minimize(&mut self, id: &str) {
        self.desktop.windows.minimize(id);
    }

    #[wasm_bindgen]
    pub fn restore(&mut self, id: &str) {
        self.desktop.windows.restore(id);
    }

    #[wasm_bindgen]
    pub fn toggle_fullscreen(&mut self, id: &str) {
        self.desktop.windows.toggle_fullscreen(id);
    }

    #[wasm_bindgen]
    pub fn bring_to_front(&mut self, id: &str) {
        self.desktop.windows.bring_to_front(id);
    }

    // =========================================================================
    // Drag (host-recognized gestures)
    // =========================================================================

    #[wasm_bindgen]
    pub fn begin_drag(&mut self, id: &str) {
        self.desktop.windows.begin_drag(id);
    }

    #[wasm_bindgen]
    pub fn update_drag(&mut self, id: &str, dx: f32, dy: f32) {
        self.desktop.windows.update_drag(id, Vec2::new(dx, dy));
    }

    #[wasm_bindgen]
    pub fn end_drag(&mut self, id: &str, dx: f32, dy: f32) {
        match self.desktop.windows.container() {
            Some(container) => self.desktop.windows.end_drag(id, Vec2::new(dx, dy), container),
            None => self.desktop.windows.cancel_drag(id),
        }
    }

    #[wasm_bindgen]
    pub fn cancel_drag(&mut self, id: &str) {
        self.desktop.windows.cancel_drag(id);
    }

    /// Apply a JSON-encoded input event; returns whether it was handled
    #[wasm_bindgen]
    pub fn handle_event_json(&mut self, json: &str) -> Result<bool, JsValue> {
        let event: InputEvent = serde_json::from_str(json).map_err(to_js)?;
        Ok(self.desktop.windows.handle(&event).is_handled())
    }

    // =========================================================================
    // Pointer (raw events hit-tested against window chrome)
    // =========================================================================

    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.desktop.pointer_down(Vec2::new(x, y)).is_handled()
    }

    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> bool {
        self.desktop.pointer_move(Vec2::new(x, y)).is_handled()
    }

    #[wasm_bindgen]
    pub fn pointer_up(&mut self, x: f32, y: f32) -> bool {
        self.desktop.pointer_up(Vec2::new(x, y)).is_handled()
    }

    #[wasm_bindgen]
    pub fn pointer_cancel(&mut self) {
        self.desktop.pointer_cancel();
    }

    // =========================================================================
    // Read side
    // =========================================================================

    /// Window views back to front
    #[wasm_bindgen]
    pub fn get_windows_json(&self) -> String {
        serde_json::to_string(&self.desktop.windows.views()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Dock icons in registration order
    #[wasm_bindgen]
    pub fn get_dock_json(&self) -> String {
        serde_json::to_string(&self.desktop.dock()).unwrap_or_else(|_| "[]".to_string())
    }

    #[wasm_bindgen]
    pub fn get_menu_title(&self) -> String {
        self.desktop.menu_bar().to_string()
    }

    /// Change notifications since the last call
    #[wasm_bindgen]
    pub fn drain_events_json(&mut self) -> String {
        let events = self.desktop.windows.drain_events();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}
