//! `wry`-backed surfaces for the Vela shell.
//!
//! Every surface (tab strip, navigation bar, sidebar, one per tab) is a
//! child webview of the single application window:
//! - `WebViewManager` builds webviews and collects their events
//! - `WebViewHandle` implements `vela_common::Surface` over one webview
//! - `ipc` holds the bridge scripts injected into chrome and content pages
//! - `history` tracks back/forward state wry does not expose

pub mod bounds;
pub mod events;
pub mod history;
pub mod ipc;
pub mod manager;

pub use bounds::to_wry_rect;
pub use events::PageLoadState;
pub use history::NavigationHistory;
pub use manager::{is_navigation_allowed, WebViewHandle, WebViewManager, WebViewOptions};
