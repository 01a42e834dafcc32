//! Sidebar state controller and the chat log it displays.

use tracing::info;
use vela_common::ChatMessage;

use crate::bus::PushEvent;
use crate::coordinator::WindowCoordinator;
use crate::tabs::TabManager;

#[derive(Debug, Default, Clone)]
pub struct SidebarController {
    expanded: bool,
}

impl SidebarController {
    pub fn new(expanded: bool) -> Self {
        Self { expanded }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip the sidebar, re-lay out every surface in one pass and push the
    /// new state to the sidebar. Returns the new state.
    pub fn toggle(&mut self, coordinator: &mut WindowCoordinator, tabs: &mut TabManager) -> bool {
        self.expanded = !self.expanded;
        info!(expanded = self.expanded, "sidebar toggled");

        if let Some(layout) = coordinator.layout(self.expanded) {
            coordinator.apply_layout(&layout, tabs.placements());
        }
        coordinator.broadcast(&PushEvent::SidebarStateChanged(self.expanded));
        self.expanded
    }
}

/// Append-only conversation shown in the sidebar, in arrival order.
#[derive(Debug, Default, Clone)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: ChatMessage) -> &ChatMessage {
        self.messages.push(message);
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Call, FakeHost};
    use vela_common::{ChatSender, Size, SurfaceRole};
    use vela_config::schema::ChromeConfig;
    use vela_layout::LayoutEngine;

    fn setup() -> (FakeHost, WindowCoordinator, TabManager) {
        let host = FakeHost::with_size(Size::new(1024.0, 768.0));
        let mut coord = WindowCoordinator::new(Box::new(host.clone()), LayoutEngine::default());
        coord.create_chrome_surfaces(&ChromeConfig::default()).unwrap();
        let mut tabs = TabManager::new("https://www.google.com");
        tabs.create_tab("https://a.test/", &mut coord, false).unwrap();
        tabs.create_tab("https://b.test/", &mut coord, false).unwrap();
        (host, coord, tabs)
    }

    #[test]
    fn toggle_changes_content_width_by_sidebar_delta() {
        let (host, mut coord, mut tabs) = setup();
        let mut sidebar = SidebarController::new(false);
        let active = coord.content_surface_ids()[1];
        let before = host.bounds(active).unwrap().width;

        assert!(sidebar.toggle(&mut coord, &mut tabs));
        let expanded = host.bounds(active).unwrap().width;
        assert_eq!(before - expanded, 250.0);

        assert!(!sidebar.toggle(&mut coord, &mut tabs));
        assert_eq!(host.bounds(active).unwrap().width, before);
    }

    #[test]
    fn toggle_relays_out_every_surface_once() {
        let (host, mut coord, mut tabs) = setup();
        let mut sidebar = SidebarController::new(false);
        host.clear_log();

        sidebar.toggle(&mut coord, &mut tabs);
        let bounds_calls = host
            .log()
            .iter()
            .filter(|c| matches!(c, Call::SetBounds(..)))
            .count();
        // three chrome surfaces and two content surfaces
        assert_eq!(bounds_calls, 5);

        let hidden = coord.content_surface_ids()[0];
        assert_eq!(host.bounds(hidden).unwrap().height, 0.0);
        let side = coord.surface(SurfaceRole::Sidebar).unwrap().id();
        assert_eq!(host.bounds(side).unwrap().width, 300.0);
    }

    #[test]
    fn toggle_pushes_state_to_sidebar() {
        let (host, mut coord, mut tabs) = setup();
        let mut sidebar = SidebarController::default();
        sidebar.toggle(&mut coord, &mut tabs);

        let side = coord.surface(SurfaceRole::Sidebar).unwrap().id();
        assert_eq!(host.last_sent(side, "sidebar-state-changed").unwrap(), true);
        assert!(sidebar.is_expanded());
    }

    #[test]
    fn chat_log_keeps_arrival_order() {
        let mut log = ChatLog::new();
        log.push(ChatMessage::user("hi"));
        log.push(ChatMessage::assistant("hello"));
        assert_eq!(log.len(), 2);
        assert_eq!(log.messages()[0].sender, ChatSender::User);
        assert_eq!(log.messages()[1].content, "hello");
    }
}
