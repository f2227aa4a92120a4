//! Tunables for indicator placement and sizing
//!
//! Persistence is owned by the host application; the serde derives exist so
//! these values can travel with whatever settings store the host uses.

use serde::{Deserialize, Serialize};

/// Sizing and placement parameters for the drop indicators
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockSettings {
    /// Inset of the edge indicators from the reference area border, in pixels
    #[serde(default = "default_indicator_margin")]
    pub indicator_margin: f32,

    /// Side length of a square edge indicator glyph, in pixels
    #[serde(default = "default_zone_size")]
    pub zone_size: f32,

    /// Side length of the five-way pane indicator glyph, in pixels
    #[serde(default = "default_diamond_size")]
    pub diamond_size: f32,
}

fn default_indicator_margin() -> f32 {
    10.0
}

fn default_zone_size() -> f32 {
    32.0
}

fn default_diamond_size() -> f32 {
    112.0
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            indicator_margin: default_indicator_margin(),
            zone_size: default_zone_size(),
            diamond_size: default_diamond_size(),
        }
    }
}
