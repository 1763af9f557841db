//! Desktop layout configuration

use serde::{Deserialize, Serialize};
use crate::error::{DesktopError, DesktopResult};

/// Default height of the menu bar band
pub const DEFAULT_TOP_INSET: f32 = 36.0;
/// Default height of the dock band
pub const DEFAULT_BOTTOM_INSET: f32 = 70.0;
/// Default per-window cascade offset
pub const DEFAULT_CASCADE_STEP: f32 = 18.0;

/// Layout parameters of the simulated desktop
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesktopConfig {
    /// Reserved band at the top of the container (menu bar)
    pub top_inset: f32,
    /// Reserved band at the bottom of the container (dock)
    pub bottom_inset: f32,
    /// Offset applied per registration index so default positions fan out
    pub cascade_step: f32,
    /// Menu bar title shown when no window is in front
    pub desktop_name: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            top_inset: DEFAULT_TOP_INSET,
            bottom_inset: DEFAULT_BOTTOM_INSET,
            cascade_step: DEFAULT_CASCADE_STEP,
            desktop_name: "Folio".to_string(),
        }
    }
}

impl DesktopConfig {
    /// Parse and validate a JSON configuration. Missing fields take defaults.
    pub fn from_json(json: &str) -> DesktopResult<Self> {
        let config: DesktopConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every inset is finite and non-negative
    pub fn validate(&self) -> DesktopResult<()> {
        let fields = [
            ("topInset", self.top_inset),
            ("bottomInset", self.bottom_inset),
            ("cascadeStep", self.cascade_step),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(DesktopError::InvalidInset { name, value });
            }
        }
        Ok(())
    }
}
