//! Error types for building a desktop
//!
//! Window operations never fail: they either apply or are ignored. Errors
//! only arise while assembling a manager from configuration and a
//! descriptor registry.

use crate::window::WindowId;

/// Errors raised while loading configuration or registering windows.
#[derive(Debug, thiserror::Error)]
pub enum DesktopError {
    /// Two descriptors share the same identifier.
    #[error("duplicate window id: {0}")]
    DuplicateWindow(WindowId),

    /// A descriptor was registered with an empty identifier.
    #[error("window id must not be empty")]
    EmptyWindowId,

    /// A configured inset or offset is negative or not finite.
    #[error("invalid {name}: {value}")]
    InvalidInset { name: &'static str, value: f32 },

    /// A descriptor's sizing rule produces unusable dimensions.
    #[error("invalid size rule for window {id}")]
    InvalidSizeRule { id: WindowId },

    /// Configuration JSON could not be parsed.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result alias for fallible desktop setup.
pub type DesktopResult<T> = Result<T, DesktopError>;
