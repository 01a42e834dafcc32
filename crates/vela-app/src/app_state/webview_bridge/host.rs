//! `SurfaceHost` over the application window.

use std::sync::Arc;

use winit::window::Window;

use vela_common::{Rect, Size, Surface, SurfaceError, SurfaceHost, SurfaceId, SurfaceRole};
use vela_config::schema::VelaConfig;
use vela_webview::{WebViewManager, WebViewOptions};

/// Creates every shell surface as a child webview of one window.
pub(in crate::app_state) struct WryHost {
    window: Arc<Window>,
    manager: WebViewManager,
    devtools: bool,
    user_agent: Option<String>,
    chrome_base_url: String,
}

impl WryHost {
    pub(in crate::app_state) fn new(
        window: Arc<Window>,
        manager: WebViewManager,
        config: &VelaConfig,
    ) -> Self {
        Self {
            window,
            manager,
            devtools: config.browser.devtools,
            user_agent: config.browser.user_agent.clone(),
            chrome_base_url: config.chrome.base_url.clone(),
        }
    }

    fn options(&self, role: SurfaceRole, url: &str) -> WebViewOptions {
        let mut options = WebViewOptions::new(role, url);
        options.devtools = self.devtools || cfg!(debug_assertions);
        if role.is_chrome() {
            options.chrome_base_url = Some(self.chrome_base_url.clone());
        } else {
            options.user_agent = self.user_agent.clone();
        }
        options
    }
}

impl SurfaceHost for WryHost {
    fn create_surface(
        &mut self,
        id: SurfaceId,
        role: SurfaceRole,
        url: &str,
    ) -> Result<Box<dyn Surface>, SurfaceError> {
        // Positioned by the first layout pass.
        let handle = self
            .manager
            .create(id, self.window.as_ref(), Rect::ZERO, self.options(role, url))
            .inspect_err(|e| tracing::error!(surface_id = %id, %role, error = %e, "Failed to create webview"))?;
        Ok(Box::new(handle))
    }

    fn destroy_surface(&mut self, surface: Box<dyn Surface>) {
        tracing::debug!(surface_id = %surface.id(), "WebView destroyed");
        drop(surface);
    }

    fn content_size(&self) -> Option<Size> {
        let logical = self
            .window
            .inner_size()
            .to_logical::<f64>(self.window.scale_factor());
        Some(Size::new(logical.width, logical.height))
    }
}
