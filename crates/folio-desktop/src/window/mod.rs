//! Window types
//!
//! Static descriptors (one per window kind), the per-window state record,
//! and chrome regions for hit testing.

#[allow(clippy::module_inception)]
mod window;
mod descriptor;
mod region;

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use window::{Presentation, Window, WindowPhase};
pub use descriptor::{AccentPair, Rgb, SizeRule, WindowDescriptor};
pub use region::WindowRegion;

/// Window identifier, taken from the descriptor that registered it
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindowId(String);

impl WindowId {
    /// Create an identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the identifier text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for WindowId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WindowId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WindowId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for WindowId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for WindowId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
