//! Tab lifecycle manager.
//!
//! Owns the ordered tab list and enforces two invariants at every
//! operation boundary: a non-empty list has exactly one active tab, and
//! closing the last tab creates a replacement before returning.

mod events;
mod tab;

use std::collections::HashMap;

use tracing::{info, warn};
use vela_common::{ShellError, SurfaceId, TabId};

use crate::bus::PushEvent;
use crate::coordinator::{ContentPlacement, WindowCoordinator};

pub(crate) use tab::Tab;
pub use tab::{TabSnapshot, LOADING_TITLE, NEW_TAB_TITLE};

pub struct TabManager {
    tabs: Vec<Tab>,
    /// Content surface id -> owning tab. Entries live exactly as long as the tab.
    subscriptions: HashMap<SurfaceId, TabId>,
    default_url: String,
}

impl TabManager {
    pub fn new(default_url: impl Into<String>) -> Self {
        Self {
            tabs: Vec::new(),
            subscriptions: HashMap::new(),
            default_url: default_url.into(),
        }
    }

    pub fn default_url(&self) -> &str {
        &self.default_url
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Open a tab on `url`, make it active and return its id.
    pub fn create_tab(
        &mut self,
        url: &str,
        coordinator: &mut WindowCoordinator,
        sidebar_expanded: bool,
    ) -> Result<TabId, ShellError> {
        let surface = coordinator.add_content_surface(url)?;
        let id = TabId::new();
        self.subscriptions.insert(surface.id(), id.clone());
        info!(tab_id = %id, surface_id = %surface.id(), url = %url, "tab created");
        self.tabs.push(Tab::new(id.clone(), surface, url));

        self.activate_tab(&id, coordinator, sidebar_expanded);
        Ok(id)
    }

    /// Close a tab and free its surface. Unknown ids are ignored.
    pub fn close_tab(
        &mut self,
        id: &TabId,
        coordinator: &mut WindowCoordinator,
        sidebar_expanded: bool,
    ) -> Result<(), ShellError> {
        let Some(index) = self.index_of(id) else {
            warn!(error = %ShellError::UnknownTabId(id.clone()), "close ignored");
            return Ok(());
        };

        // The replacement must exist before the last tab goes away; if it
        // cannot be created the closing tab stays open.
        let replaced = self.tabs.len() == 1;
        if replaced {
            let url = self.default_url.clone();
            self.create_tab(&url, coordinator, sidebar_expanded)?;
        }

        let tab = self.tabs.remove(index);
        self.subscriptions.remove(&tab.surface.id());
        let was_active = tab.is_active;
        coordinator.remove_content_surface(tab.surface);
        info!(tab_id = %id, index, remaining = self.tabs.len(), "tab closed");

        if replaced {
            self.broadcast_tabs(coordinator);
            return Ok(());
        }

        if was_active {
            let next = index.min(self.tabs.len() - 1);
            let next_id = self.tabs[next].id.clone();
            self.activate_tab(&next_id, coordinator, sidebar_expanded);
        } else {
            self.broadcast_tabs(coordinator);
        }
        Ok(())
    }

    /// Make `id` the only active tab. Unknown ids are ignored.
    ///
    /// Re-lays out content surfaces only, then pushes the tab list and the
    /// new active tab's URL and loading state.
    pub fn activate_tab(
        &mut self,
        id: &TabId,
        coordinator: &WindowCoordinator,
        sidebar_expanded: bool,
    ) {
        if self.index_of(id).is_none() {
            warn!(error = %ShellError::UnknownTabId(id.clone()), "activate ignored");
            return;
        }

        for tab in &mut self.tabs {
            tab.is_active = &tab.id == id;
        }
        info!(tab_id = %id, "tab activated");

        if let Some(layout) = coordinator.layout(sidebar_expanded) {
            WindowCoordinator::apply_content_layout(&layout, self.placements());
        }

        self.broadcast_tabs(coordinator);
        self.broadcast_active_state(coordinator);
    }

    /// Drop every tab and free its surface.
    pub fn shutdown(&mut self, coordinator: &mut WindowCoordinator) {
        self.subscriptions.clear();
        for tab in self.tabs.drain(..) {
            coordinator.remove_content_surface(tab.surface);
        }
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn tabs(&self) -> Vec<TabSnapshot> {
        self.tabs.iter().map(Tab::snapshot).collect()
    }

    pub fn active_id(&self) -> Option<TabId> {
        self.active().map(|t| t.id.clone())
    }

    pub fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| t.is_active)
    }

    pub(crate) fn active(&self) -> Option<&Tab> {
        self.tabs.iter().find(|t| t.is_active)
    }

    pub(crate) fn active_mut(&mut self) -> Option<&mut Tab> {
        self.tabs.iter_mut().find(|t| t.is_active)
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.index_of(id).is_some()
    }

    /// Tab owning a content surface, if any.
    pub fn tab_for_surface(&self, surface: SurfaceId) -> Option<&TabId> {
        self.subscriptions.get(&surface)
    }

    fn index_of(&self, id: &TabId) -> Option<usize> {
        self.tabs.iter().position(|t| &t.id == id)
    }

    /// Every content surface with its visibility, for layout passes.
    pub fn placements(&mut self) -> impl Iterator<Item = ContentPlacement<'_>> {
        self.tabs.iter_mut().map(|tab| ContentPlacement {
            visible: tab.is_active,
            surface: &mut tab.surface,
        })
    }

    // =========================================================================
    // BROADCAST
    // =========================================================================

    pub fn broadcast_tabs(&self, coordinator: &WindowCoordinator) {
        coordinator.broadcast(&PushEvent::TabsUpdated(self.tabs()));
    }

    /// Push the active tab's URL and loading state to the navigation bar.
    pub fn broadcast_active_state(&self, coordinator: &WindowCoordinator) {
        if let Some(tab) = self.active() {
            coordinator.broadcast(&PushEvent::UrlChanged(tab.url.clone()));
            coordinator.broadcast(&PushEvent::LoadingChanged(tab.surface.is_loading()));
        }
    }
}
