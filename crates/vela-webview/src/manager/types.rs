use vela_common::SurfaceRole;

/// Configuration for creating a new webview surface.
#[derive(Debug, Clone)]
pub struct WebViewOptions {
    pub role: SurfaceRole,
    /// Initial URL to load.
    pub url: String,
    /// Whether to enable dev tools (always on in debug builds).
    pub devtools: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Origin chrome markup is served from. Chrome surfaces may navigate
    /// within it in addition to the web allowlist.
    pub chrome_base_url: Option<String>,
}

impl WebViewOptions {
    pub fn new(role: SurfaceRole, url: impl Into<String>) -> Self {
        Self {
            role,
            url: url.into(),
            devtools: cfg!(debug_assertions),
            user_agent: None,
            chrome_base_url: None,
        }
    }

    /// Extra allowed navigation prefix for this surface, if any.
    pub(crate) fn extra_allowed_prefix(&self) -> Option<String> {
        if self.role.is_chrome() {
            self.chrome_base_url
                .as_ref()
                .map(|base| base.split('#').next().unwrap_or_default().to_string())
        } else {
            None
        }
    }
}
