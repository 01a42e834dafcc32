//! Window geometry constants.

use serde::{Deserialize, Serialize};

/// Fixed sizes of the chrome regions, in logical pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Height of the tab strip along the top edge (valid range: 0-200).
    pub tab_bar_height: u32,
    /// Height of the navigation bar below the tab strip (valid range: 0-200).
    pub nav_bar_height: u32,
    /// Sidebar width while expanded (valid range: 0-2000).
    pub sidebar_expanded_width: u32,
    /// Sidebar width while collapsed (valid range: 0-2000, at most the expanded width).
    pub sidebar_collapsed_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            tab_bar_height: 35,
            nav_bar_height: 50,
            sidebar_expanded_width: 300,
            sidebar_collapsed_width: 50,
        }
    }
}

impl LayoutConfig {
    /// Combined height of the tab strip and navigation bar.
    pub fn header_height(&self) -> u32 {
        self.tab_bar_height + self.nav_bar_height
    }
}
