use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use vela_common::{SurfaceEvent, SurfaceEventKind, SurfaceId};
use wry::WebViewBuilder;

use crate::events::{page_load_events, EventSink, PageLoadState};
use crate::history::NavigationHistory;
use crate::ipc::classify_message;

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes any surface may navigate to.
pub const ALLOWED_NAV_PREFIXES: &[&str] = &["http://", "https://", "about:"];

/// Check whether a URL is allowed by the navigation allowlist.
///
/// `extra` is an additional allowed prefix (the chrome origin for chrome
/// surfaces).
pub fn is_navigation_allowed(url: &str, extra: Option<&str>) -> bool {
    let lower = url.trim_start().to_ascii_lowercase();
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| lower.starts_with(prefix))
        || extra.is_some_and(|prefix| !prefix.is_empty() && url.starts_with(prefix))
}

/// State shared between a webview's callbacks and its handle.
#[derive(Clone)]
pub(crate) struct SurfaceShared {
    pub id: SurfaceId,
    pub events: EventSink,
    pub seq: Arc<AtomicU64>,
    pub loading: Arc<AtomicBool>,
    pub history: Arc<Mutex<NavigationHistory>>,
}

impl SurfaceShared {
    pub fn emit(&self, kind: SurfaceEventKind) {
        let seq = self.seq.load(Ordering::SeqCst);
        if let Ok(mut evts) = self.events.lock() {
            evts.push(SurfaceEvent::new(self.id, seq, kind));
        }
    }

    pub fn commit(&self, url: &str) {
        if let Ok(mut history) = self.history.lock() {
            history.commit(url);
        }
    }
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        shared: SurfaceShared,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body();

            let Some(kind) = classify_message(body) else {
                warn!(
                    surface_id = %shared.id,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            };

            if let SurfaceEventKind::InPageNavigation(url) = &kind {
                shared.commit(url);
            }
            debug!(surface_id = %shared.id, body_len = body.len(), "IPC message from JS");
            shared.emit(kind);
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        shared: SurfaceShared,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(surface_id = %shared.id, ?state, url = %url, "page load");
            match state {
                PageLoadState::Started => {
                    shared.loading.store(true, Ordering::SeqCst);
                    shared.commit(&url);
                }
                PageLoadState::Finished => shared.loading.store(false, Ordering::SeqCst),
            }
            for kind in page_load_events(state, &url) {
                shared.emit(kind);
            }
        })
    }

    pub(super) fn attach_title_handler<'a>(
        builder: WebViewBuilder<'a>,
        shared: SurfaceShared,
    ) -> WebViewBuilder<'a> {
        builder.with_document_title_changed_handler(move |title| {
            debug!(surface_id = %shared.id, title = %title, "title changed");
            shared.emit(SurfaceEventKind::TitleAvailable(title));
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        id: SurfaceId,
        extra: Option<String>,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url, extra.as_deref()) {
                warn!(surface_id = %id, url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
