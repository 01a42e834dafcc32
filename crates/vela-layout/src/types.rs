//! Layout engine types and configuration.

use serde::{Deserialize, Serialize};
use vela_common::{Rect, SurfaceRole};
use vela_config::schema::LayoutConfig;

/// Fixed chrome metrics used to split the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    pub tab_bar_height: f64,
    pub nav_bar_height: f64,
    pub sidebar_expanded_width: f64,
    pub sidebar_collapsed_width: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::from(&LayoutConfig::default())
    }
}

impl From<&LayoutConfig> for LayoutEngine {
    fn from(config: &LayoutConfig) -> Self {
        Self {
            tab_bar_height: f64::from(config.tab_bar_height),
            nav_bar_height: f64::from(config.nav_bar_height),
            sidebar_expanded_width: f64::from(config.sidebar_expanded_width),
            sidebar_collapsed_width: f64::from(config.sidebar_collapsed_width),
        }
    }
}

impl LayoutEngine {
    pub fn sidebar_width(&self, sidebar_expanded: bool) -> f64 {
        if sidebar_expanded {
            self.sidebar_expanded_width
        } else {
            self.sidebar_collapsed_width
        }
    }

    pub fn header_height(&self) -> f64 {
        self.tab_bar_height + self.nav_bar_height
    }
}

/// One rectangle per surface role, all non-overlapping and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShellLayout {
    pub tab_strip: Rect,
    pub navigation: Rect,
    pub sidebar: Rect,
    /// Bounds of the active content surface.
    pub content: Rect,
}

impl ShellLayout {
    pub fn rect_for(&self, role: SurfaceRole) -> Rect {
        match role {
            SurfaceRole::TabStrip => self.tab_strip,
            SurfaceRole::Navigation => self.navigation,
            SurfaceRole::Sidebar => self.sidebar,
            SurfaceRole::Content => self.content,
        }
    }

    /// Bounds for a resident but hidden content surface.
    pub fn hidden_content(&self) -> Rect {
        self.content.collapsed()
    }
}
