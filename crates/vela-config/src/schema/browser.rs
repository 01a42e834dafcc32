//! Browsing defaults and chrome surface sources.

use serde::{Deserialize, Serialize};

/// Content surface behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// URL loaded into new tabs and into the replacement tab created when
    /// the last tab closes.
    pub default_url: String,
    /// Custom user agent for content surfaces.
    pub user_agent: Option<String>,
    /// Enable web inspector on every surface (always on in debug builds).
    pub devtools: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            default_url: "https://www.google.com".to_string(),
            user_agent: None,
            devtools: cfg!(debug_assertions),
        }
    }
}

/// Where the chrome surface markup is served from.
///
/// The tab strip, navigation bar and sidebar load `base_url` with the
/// fragments `#tabs`, `#navigation` and `#sidebar` respectively.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    pub base_url: String,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5173/".to_string(),
        }
    }
}

impl ChromeConfig {
    /// URL for a chrome widget, e.g. `http://localhost:5173/#tabs`.
    pub fn url_for(&self, fragment: &str) -> String {
        let base = self.base_url.split('#').next().unwrap_or_default();
        format!("{base}#{fragment}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_defaults() {
        let config = BrowserConfig::default();
        assert_eq!(config.default_url, "https://www.google.com");
        assert!(config.user_agent.is_none());
    }

    #[test]
    fn chrome_url_appends_fragment() {
        let chrome = ChromeConfig::default();
        assert_eq!(chrome.url_for("tabs"), "http://localhost:5173/#tabs");
    }

    #[test]
    fn chrome_url_replaces_existing_fragment() {
        let chrome = ChromeConfig {
            base_url: "file:///opt/vela/chrome/index.html#old".into(),
        };
        assert_eq!(
            chrome.url_for("sidebar"),
            "file:///opt/vela/chrome/index.html#sidebar"
        );
    }
}
