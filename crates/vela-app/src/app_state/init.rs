//! Window creation and shell startup.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use vela_core::{Shell, ShellOptions};
use vela_webview::WebViewManager;

use super::core::VelaApp;
use super::webview_bridge::WryHost;

impl VelaApp {
    /// Create the window and start the shell inside it.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let attrs = WindowAttributes::default()
            .with_title(self.config.window.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(self.config.window.width),
                f64::from(self.config.window.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let manager = WebViewManager::new();
        let host = WryHost::new(Arc::clone(&window), manager.clone(), &self.config);
        let mut shell = Shell::new(Box::new(host), ShellOptions::from_config(&self.config));

        if let Err(e) = shell.start(self.initial_url.as_deref()) {
            tracing::error!("Failed to start shell: {e}");
            return false;
        }

        self.window = Some(window);
        self.webviews = Some(manager);
        self.shell = Some(shell);
        tracing::info!("Window initialized");
        true
    }
}
