//! Folio desktop
//!
//! State core of a portfolio presented as a simulated desktop: a fixed set
//! of windows the visitor opens, drags, stacks, minimizes and maximizes,
//! with a dock and a menu bar around them.
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`) and chrome constants
//! - [`window`]: Descriptors, per-window state and hit-test regions
//! - [`manager`]: The window manager and its change notifications
//! - [`input`]: Discrete input events and the pointer gesture router
//! - [`desktop`]: Shell combining windows, dock and menu bar
//! - [`transition`]: Loading, typewriter, intro and particle effects
//!
//! ## Example
//!
//! ```rust
//! use folio_desktop::{Desktop, DockAction, Size, Vec2};
//!
//! let mut desktop = Desktop::portfolio().unwrap();
//! desktop.init(Size::new(390.0, 844.0));
//!
//! assert_eq!(desktop.tap_dock("about"), DockAction::Opened);
//! assert_eq!(desktop.menu_bar(), "About Me");
//!
//! desktop.windows.begin_drag("about");
//! desktop.windows.end_drag("about", Vec2::new(1000.0, 1000.0), Size::new(390.0, 844.0));
//! ```
//!
//! All state changes are synchronous. Operations that do not apply (unknown
//! window, wrong phase, not yet initialized) are ignored and logged at
//! `debug` level through `tracing`.

pub mod math;
pub mod window;
pub mod manager;
pub mod input;
pub mod desktop;
pub mod transition;
pub mod catalog;

mod config;
mod error;

// WASM exports (only available with "wasm" feature)
#[cfg(feature = "wasm")]
mod wasm;
#[cfg(feature = "wasm")]
pub use wasm::*;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2, ChromeStyle, CHROME_STYLE};
pub use window::{
    AccentPair, Presentation, Rgb, SizeRule, Window, WindowDescriptor, WindowId, WindowPhase, WindowRegion,
};
pub use manager::{DockAction, WindowEvent, WindowManager, WindowView};
pub use input::{InputEvent, InputResult, InputRouter, PointerGesture};
pub use desktop::{Desktop, DockIndicator, DockItem};
pub use config::{DesktopConfig, DEFAULT_BOTTOM_INSET, DEFAULT_CASCADE_STEP, DEFAULT_TOP_INSET};
pub use error::{DesktopError, DesktopResult};
