use std::sync::atomic::Ordering;

use tracing::debug;
use vela_common::{NavSeq, Rect, Surface, SurfaceError, SurfaceId, SurfaceRole};
use wry::WebView;

use crate::bounds::to_wry_rect;
use crate::history::NavigationHistory;
use crate::ipc::js_dispatch_message;

use super::handlers::SurfaceShared;

/// One webview acting as a shell surface.
pub struct WebViewHandle {
    pub(super) webview: WebView,
    pub(super) role: SurfaceRole,
    pub(super) shared: SurfaceShared,
}

impl WebViewHandle {
    /// Get a reference to the underlying wry WebView.
    pub fn inner(&self) -> &WebView {
        &self.webview
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    fn with_history<R>(&self, f: impl FnOnce(&mut NavigationHistory) -> R) -> Option<R> {
        self.shared.history.lock().ok().map(|mut h| f(&mut *h))
    }

    fn start(&self, seq: NavSeq) {
        self.shared.seq.store(seq, Ordering::SeqCst);
        self.shared.loading.store(true, Ordering::SeqCst);
    }

    fn run(&self, js: &str) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| SurfaceError::Navigation(e.to_string()))
    }
}

impl Surface for WebViewHandle {
    fn id(&self) -> SurfaceId {
        self.shared.id
    }

    fn role(&self) -> SurfaceRole {
        self.role
    }

    fn set_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError> {
        self.webview
            .set_bounds(to_wry_rect(&bounds))
            .map_err(|e| SurfaceError::Bounds(e.to_string()))
    }

    fn load_url(&mut self, url: &str, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with_history(NavigationHistory::begin_load);
        self.start(seq);
        debug!(surface_id = %self.shared.id, url = %url, seq, "load url");
        self.webview
            .load_url(url)
            .map_err(|e| SurfaceError::Navigation(e.to_string()))
    }

    fn url(&self) -> String {
        self.with_history(|h| h.current().to_string())
            .unwrap_or_default()
    }

    fn is_loading(&self) -> bool {
        self.shared.loading.load(Ordering::SeqCst)
    }

    fn can_go_back(&self) -> bool {
        self.with_history(|h| h.can_go_back()).unwrap_or(false)
    }

    fn can_go_forward(&self) -> bool {
        self.with_history(|h| h.can_go_forward()).unwrap_or(false)
    }

    fn go_back(&mut self, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with_history(NavigationHistory::begin_back);
        self.start(seq);
        self.run("history.back();")
    }

    fn go_forward(&mut self, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with_history(NavigationHistory::begin_forward);
        self.start(seq);
        self.run("history.forward();")
    }

    fn reload(&mut self, seq: NavSeq) -> Result<(), SurfaceError> {
        self.with_history(NavigationHistory::begin_reload);
        self.start(seq);
        self.run("location.reload();")
    }

    fn send(&self, channel: &str, payload: &serde_json::Value) -> Result<(), SurfaceError> {
        self.webview
            .evaluate_script(&js_dispatch_message(channel, payload))
            .map_err(|e| SurfaceError::Ipc(e.to_string()))
    }
}
