//! Per-tab surface event handling.
//!
//! Each content surface is subscribed to its tab when the tab is created
//! and unsubscribed when it closes. Events carry the navigation sequence
//! the surface was last given; anything older than the tab's current
//! sequence belongs to a superseded navigation and is dropped.

use tracing::debug;
use vela_common::{SurfaceEvent, SurfaceEventKind};

use super::tab::{host_of, NEW_TAB_TITLE};
use super::TabManager;
use crate::bus::PushEvent;
use crate::coordinator::WindowCoordinator;

impl TabManager {
    /// Apply a content surface event. Returns `false` when the event was
    /// not for a subscribed surface or was stale.
    pub fn handle_surface_event(
        &mut self,
        event: &SurfaceEvent,
        coordinator: &WindowCoordinator,
    ) -> bool {
        let Some(tab_id) = self.subscriptions.get(&event.surface) else {
            return false;
        };
        let Some(tab) = self.tabs.iter_mut().find(|t| &t.id == tab_id) else {
            return false;
        };

        if event.seq < tab.seq {
            debug!(
                tab_id = %tab.id,
                seq = event.seq,
                current = tab.seq,
                "dropping stale surface event"
            );
            return false;
        }

        let active = tab.is_active;
        let mut pushes = Vec::new();

        match &event.kind {
            SurfaceEventKind::NavigationCommitted(url) => {
                tab.url = url.clone();
                if tab.has_placeholder_title() {
                    if let Some(host) = host_of(url) {
                        tab.title = host;
                    }
                }
                if active {
                    pushes.push(PushEvent::UrlChanged(url.clone()));
                }
            }
            SurfaceEventKind::InPageNavigation(url) => {
                tab.url = url.clone();
                if active {
                    pushes.push(PushEvent::UrlChanged(url.clone()));
                }
            }
            SurfaceEventKind::TitleAvailable(title) => {
                if title.trim().is_empty() {
                    return true;
                }
                tab.title = title.clone();
            }
            SurfaceEventKind::LoadStarted => {
                if active {
                    pushes.push(PushEvent::LoadingChanged(true));
                }
            }
            SurfaceEventKind::LoadStopped(url) => {
                if tab.has_placeholder_title() {
                    tab.title = host_of(url).unwrap_or_else(|| NEW_TAB_TITLE.to_string());
                }
                if active {
                    pushes.push(PushEvent::LoadingChanged(false));
                }
            }
            SurfaceEventKind::IpcMessage(_) => {
                debug!(tab_id = %tab.id, "ignoring ipc message from content surface");
                return false;
            }
        }

        debug!(tab_id = %tab.id, seq = event.seq, kind = ?event.kind, "surface event applied");

        for push in &pushes {
            coordinator.broadcast(push);
        }
        self.broadcast_tabs(coordinator);
        true
    }
}
