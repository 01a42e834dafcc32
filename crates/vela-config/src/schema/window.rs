//! Window and sidebar startup settings.

use serde::{Deserialize, Serialize};

/// Top-level window settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Initial inner width in logical pixels (valid range: 200-10000).
    pub width: u32,
    /// Initial inner height in logical pixels (valid range: 200-10000).
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Vela".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct SidebarConfig {
    /// Start with the assistant sidebar expanded.
    pub expanded_on_start: bool,
}
