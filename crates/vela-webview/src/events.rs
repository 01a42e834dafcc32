//! Translation of wry callbacks into shell surface events.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use vela_common::{SurfaceEvent, SurfaceEventKind};

/// Events pushed by webview callbacks, drained by the main event loop.
pub type EventSink = Arc<Mutex<Vec<SurfaceEvent>>>;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded.
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Surface events produced by one page load callback.
///
/// A started load is both the start of loading and the commit of a new
/// main-frame URL; a finished load reports the URL the page settled on.
pub fn page_load_events(state: PageLoadState, url: &str) -> Vec<SurfaceEventKind> {
    match state {
        PageLoadState::Started => vec![
            SurfaceEventKind::LoadStarted,
            SurfaceEventKind::NavigationCommitted(url.to_string()),
        ],
        PageLoadState::Finished => vec![SurfaceEventKind::LoadStopped(url.to_string())],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn started_load_commits_url() {
        assert_eq!(
            page_load_events(PageLoadState::Started, "https://a.test/"),
            vec![
                SurfaceEventKind::LoadStarted,
                SurfaceEventKind::NavigationCommitted("https://a.test/".into()),
            ]
        );
    }

    #[test]
    fn finished_load_stops() {
        assert_eq!(
            page_load_events(PageLoadState::Finished, "https://a.test/"),
            vec![SurfaceEventKind::LoadStopped("https://a.test/".into())]
        );
    }
}
