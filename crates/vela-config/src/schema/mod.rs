//! Configuration schema types for Vela.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod browser;
mod layout;
mod system;
mod window;

pub use browser::*;
pub use layout::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Vela.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct VelaConfig {
    pub layout: LayoutConfig,
    pub browser: BrowserConfig,
    pub window: WindowConfig,
    pub sidebar: SidebarConfig,
    pub chrome: ChromeConfig,
    pub assistant: AssistantConfig,
    pub logging: LoggingConfig,
}
