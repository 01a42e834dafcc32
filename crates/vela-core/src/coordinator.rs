//! Surface registry and window coordinator.
//!
//! `WindowCoordinator` owns the window capability and the three chrome
//! surfaces, allocates surface ids, applies computed layouts, and routes
//! push events to the chrome surfaces subscribed to them.

use std::collections::HashMap;

use tracing::{debug, info, warn};
use vela_common::{Rect, ShellError, Surface, SurfaceHost, SurfaceId, SurfaceRole};
use vela_config::schema::ChromeConfig;
use vela_layout::{LayoutEngine, ShellLayout};

use crate::bus::{BusReply, PushEvent, REPLY_CHANNEL};

/// A content surface together with whether it should be visible.
pub struct ContentPlacement<'a> {
    pub surface: &'a mut Box<dyn Surface>,
    pub visible: bool,
}

pub struct WindowCoordinator {
    host: Box<dyn SurfaceHost>,
    engine: LayoutEngine,
    chrome: HashMap<SurfaceRole, Box<dyn Surface>>,
    content: Vec<SurfaceId>,
    next_surface_id: u32,
}

impl WindowCoordinator {
    pub fn new(host: Box<dyn SurfaceHost>, engine: LayoutEngine) -> Self {
        Self {
            host,
            engine,
            chrome: HashMap::new(),
            content: Vec::new(),
            next_surface_id: 1,
        }
    }

    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    pub fn is_initialized(&self) -> bool {
        self.host.content_size().is_some()
    }

    fn allocate_id(&mut self) -> SurfaceId {
        let id = SurfaceId(self.next_surface_id);
        self.next_surface_id += 1;
        id
    }

    // =========================================================================
    // SURFACES
    // =========================================================================

    /// Create the tab strip, navigation bar and sidebar surfaces.
    ///
    /// Roles that already exist are left alone, so this is safe to call
    /// again after a partial failure.
    pub fn create_chrome_surfaces(&mut self, chrome: &ChromeConfig) -> Result<(), ShellError> {
        if !self.is_initialized() {
            return Err(ShellError::UninitializedWindow);
        }

        for role in SurfaceRole::CHROME {
            if self.chrome.contains_key(&role) {
                continue;
            }
            let Some(fragment) = role.chrome_fragment() else {
                continue;
            };
            let url = chrome.url_for(fragment);
            let id = self.allocate_id();
            let surface = self.host.create_surface(id, role, &url)?;
            info!(surface_id = %id, %role, url = %url, "chrome surface created");
            self.chrome.insert(role, surface);
        }
        Ok(())
    }

    /// Look up a chrome surface by role.
    pub fn surface(&self, role: SurfaceRole) -> Option<&dyn Surface> {
        self.chrome.get(&role).map(|s| &**s)
    }

    /// Role of a registered chrome surface.
    pub fn chrome_role(&self, id: SurfaceId) -> Option<SurfaceRole> {
        self.chrome
            .iter()
            .find(|(_, surface)| surface.id() == id)
            .map(|(role, _)| *role)
    }

    /// Create a content surface loading `url` and register it with the window.
    pub fn add_content_surface(&mut self, url: &str) -> Result<Box<dyn Surface>, ShellError> {
        if !self.is_initialized() {
            return Err(ShellError::UninitializedWindow);
        }
        let id = self.allocate_id();
        let surface = self.host.create_surface(id, SurfaceRole::Content, url)?;
        self.content.push(id);
        debug!(surface_id = %id, url = %url, "content surface added");
        Ok(surface)
    }

    /// Unregister a content surface and free it.
    pub fn remove_content_surface(&mut self, surface: Box<dyn Surface>) {
        let id = surface.id();
        self.content.retain(|c| *c != id);
        self.host.destroy_surface(surface);
        debug!(surface_id = %id, "content surface removed");
    }

    pub fn content_surface_ids(&self) -> &[SurfaceId] {
        &self.content
    }

    // =========================================================================
    // LAYOUT
    // =========================================================================

    /// Compute the layout for the current window size, or `None` (logged)
    /// when the window does not exist yet.
    pub fn layout(&self, sidebar_expanded: bool) -> Option<ShellLayout> {
        match self.host.content_size() {
            Some(size) => Some(self.engine.compute(size, sidebar_expanded)),
            None => {
                warn!(error = %ShellError::UninitializedWindow, "layout requested before window creation");
                None
            }
        }
    }

    /// Position every chrome surface and every given content surface in
    /// one pass.
    pub fn apply_layout<'a>(
        &mut self,
        layout: &ShellLayout,
        contents: impl IntoIterator<Item = ContentPlacement<'a>>,
    ) {
        for (role, surface) in self.chrome.iter_mut() {
            place(&mut **surface, layout.rect_for(*role));
        }
        Self::apply_content_layout(layout, contents);
    }

    /// Position content surfaces only: the visible one gets the full content
    /// rectangle, the rest are parked at zero height.
    pub fn apply_content_layout<'a>(
        layout: &ShellLayout,
        contents: impl IntoIterator<Item = ContentPlacement<'a>>,
    ) {
        for placement in contents {
            let rect = if placement.visible {
                layout.content
            } else {
                layout.hidden_content()
            };
            place(&mut **placement.surface, rect);
        }
    }

    // =========================================================================
    // PUSH / REPLY
    // =========================================================================

    /// Deliver a push event to every subscribed chrome surface.
    pub fn broadcast(&self, event: &PushEvent) {
        let channel = event.channel();
        let payload = event.payload();
        for role in event.subscribers() {
            let Some(surface) = self.chrome.get(role) else {
                debug!(%role, channel, "push skipped: chrome surface missing");
                continue;
            };
            if let Err(e) = surface.send(channel, &payload) {
                warn!(%role, channel, error = %e, "push delivery failed");
            }
        }
    }

    /// Answer a pull request on the surface that asked.
    pub fn reply(&self, to: SurfaceId, reply: &BusReply) {
        let Some(surface) = self.chrome.values().find(|s| s.id() == to) else {
            warn!(surface_id = %to, request_id = reply.id, "reply target is not a chrome surface");
            return;
        };
        if let Err(e) = surface.send(REPLY_CHANNEL, &reply.payload()) {
            warn!(surface_id = %to, error = %e, "reply delivery failed");
        }
    }

    /// Destroy the chrome surfaces. Content surfaces belong to their tabs.
    pub fn shutdown(&mut self) {
        for (role, surface) in self.chrome.drain() {
            debug!(%role, "chrome surface destroyed");
            self.host.destroy_surface(surface);
        }
    }
}

fn place(surface: &mut dyn Surface, rect: Rect) {
    debug!(
        surface_id = %surface.id(),
        x = rect.x,
        y = rect.y,
        width = rect.width,
        height = rect.height,
        "set bounds"
    );
    if let Err(e) = surface.set_bounds(rect) {
        warn!(surface_id = %surface.id(), error = %e, "failed to update surface bounds");
    }
}

// =============================================================================
// TESTS
// =============================================================================
