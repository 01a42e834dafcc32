use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::{Arc, Mutex};

use tracing::debug;
use vela_common::{Rect, SurfaceError, SurfaceId};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::bounds::to_wry_rect;
use crate::history::NavigationHistory;
use crate::ipc::{CONTENT_INIT_SCRIPT, IPC_INIT_SCRIPT};

use super::handle::WebViewHandle;
use super::handlers::SurfaceShared;
use super::types::WebViewOptions;
use super::WebViewManager;

impl WebViewManager {
    /// Create a new webview surface as a child of the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// The webview starts at `bounds` within the parent window.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        id: SurfaceId,
        window: &W,
        bounds: Rect,
        options: WebViewOptions,
    ) -> Result<WebViewHandle, SurfaceError> {
        let shared = SurfaceShared {
            id,
            events: Arc::clone(&self.events),
            seq: Arc::new(AtomicU64::new(0)),
            loading: Arc::new(AtomicBool::new(true)),
            history: Arc::new(Mutex::new(NavigationHistory::new(options.url.clone()))),
        };

        let mut builder = WebViewBuilder::new()
            .with_bounds(to_wry_rect(&bounds))
            .with_devtools(options.devtools)
            .with_clipboard(true)
            .with_focused(false);

        // Chrome pages get the request/push bridge, content pages only
        // report same-document navigations.
        builder = if options.role.is_chrome() {
            builder.with_initialization_script(IPC_INIT_SCRIPT)
        } else {
            builder.with_initialization_script(CONTENT_INIT_SCRIPT)
        };

        if let Some(ua) = &options.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, shared.clone());
        builder = Self::attach_page_load_handler(builder, shared.clone());
        builder = Self::attach_title_handler(builder, shared.clone());
        builder = Self::attach_navigation_handler(builder, id, options.extra_allowed_prefix());

        let webview = builder
            .with_url(&options.url)
            .build_as_child(window)
            .map_err(|e| SurfaceError::Creation(e.to_string()))?;

        debug!(surface_id = %id, role = %options.role, url = %options.url, "WebView created");

        Ok(WebViewHandle {
            webview,
            role: options.role,
            shared,
        })
    }
}
