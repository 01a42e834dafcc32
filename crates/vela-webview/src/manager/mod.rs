//! WebView lifecycle management.
//!
//! `WebViewManager` builds `wry::WebView` instances, one per shell surface,
//! and owns the event sink their callbacks write into.

use std::sync::{Arc, Mutex};

use vela_common::SurfaceEvent;

use crate::events::EventSink;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use handlers::is_navigation_allowed;
pub use types::WebViewOptions;

/// Builds webviews and collects their events.
///
/// Clones share one event sink, so the event loop can keep a clone for
/// draining while another builds surfaces.
#[derive(Clone)]
pub struct WebViewManager {
    /// Event sink: callbacks push here, the main event loop drains.
    pub(crate) events: EventSink,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<SurfaceEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
