//! The `Shell` facade: one explicitly constructed owner of every core
//! component, driven by the embedder's event loop.

use serde_json::{json, Value};
use tracing::{debug, info, warn};
use vela_common::{
    ChatMessage, ShellError, SurfaceEvent, SurfaceEventKind, SurfaceHost, SurfaceId, TabId,
};
use vela_config::schema::{ChromeConfig, VelaConfig};
use vela_layout::LayoutEngine;

use crate::bus::{BusReply, BusRequest, PushEvent};
use crate::coordinator::WindowCoordinator;
use crate::navigation::{normalize_url, NavigationController};
use crate::sidebar::{ChatLog, SidebarController};
use crate::tabs::{TabManager, TabSnapshot};

/// Construction parameters for [`Shell`].
#[derive(Debug, Clone)]
pub struct ShellOptions {
    pub default_url: String,
    pub chrome: ChromeConfig,
    pub layout: LayoutEngine,
    pub sidebar_expanded: bool,
}

impl ShellOptions {
    pub fn from_config(config: &VelaConfig) -> Self {
        Self {
            default_url: config.browser.default_url.clone(),
            chrome: config.chrome.clone(),
            layout: LayoutEngine::from(&config.layout),
            sidebar_expanded: config.sidebar.expanded_on_start,
        }
    }
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self::from_config(&VelaConfig::default())
    }
}

/// A conversation handed to the assistant collaborator. The embedder runs
/// it off the event loop and reports back through [`Shell::complete_chat`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChatTurn {
    pub history: Vec<ChatMessage>,
}

pub struct Shell {
    coordinator: WindowCoordinator,
    tabs: TabManager,
    navigation: NavigationController,
    sidebar: SidebarController,
    chat: ChatLog,
    chrome: ChromeConfig,
}

impl Shell {
    pub fn new(host: Box<dyn SurfaceHost>, options: ShellOptions) -> Self {
        Self {
            coordinator: WindowCoordinator::new(host, options.layout),
            tabs: TabManager::new(options.default_url),
            navigation: NavigationController::new(),
            sidebar: SidebarController::new(options.sidebar_expanded),
            chat: ChatLog::new(),
            chrome: options.chrome,
        }
    }

    pub fn coordinator(&self) -> &WindowCoordinator {
        &self.coordinator
    }

    /// Create the chrome surfaces and the first tab, then lay out the window.
    pub fn start(&mut self, initial_url: Option<&str>) -> Result<TabId, ShellError> {
        self.coordinator.create_chrome_surfaces(&self.chrome)?;
        let id = self.create_tab(initial_url)?;
        self.resize();
        info!(tab_id = %id, "shell started");
        Ok(id)
    }

    // =========================================================================
    // TABS
    // =========================================================================

    pub fn create_tab(&mut self, url: Option<&str>) -> Result<TabId, ShellError> {
        let url = match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => normalize_url(url),
            None => self.tabs.default_url().to_string(),
        };
        self.tabs
            .create_tab(&url, &mut self.coordinator, self.sidebar.is_expanded())
    }

    pub fn close_tab(&mut self, id: &TabId) -> Result<(), ShellError> {
        self.tabs
            .close_tab(id, &mut self.coordinator, self.sidebar.is_expanded())
    }

    pub fn switch_tab(&mut self, id: &TabId) {
        self.tabs
            .activate_tab(id, &self.coordinator, self.sidebar.is_expanded());
    }

    pub fn tabs(&self) -> Vec<TabSnapshot> {
        self.tabs.tabs()
    }

    pub fn active_tab(&self) -> Option<TabId> {
        self.tabs.active_id()
    }

    // =========================================================================
    // NAVIGATION
    // =========================================================================

    pub fn navigate(&mut self, url: &str) -> Result<bool, ShellError> {
        self.navigation.navigate(&mut self.tabs, url)
    }

    pub fn go_back(&mut self) -> Result<bool, ShellError> {
        self.navigation.go_back(&mut self.tabs)
    }

    pub fn go_forward(&mut self) -> Result<bool, ShellError> {
        self.navigation.go_forward(&mut self.tabs)
    }

    pub fn reload(&mut self) -> Result<bool, ShellError> {
        self.navigation.reload(&mut self.tabs)
    }

    pub fn current_url(&self) -> String {
        self.navigation.current_url(&self.tabs)
    }

    // =========================================================================
    // SIDEBAR / CHAT
    // =========================================================================

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar.toggle(&mut self.coordinator, &mut self.tabs)
    }

    pub fn sidebar_state(&self) -> bool {
        self.sidebar.is_expanded()
    }

    pub fn chat_messages(&self) -> &[ChatMessage] {
        self.chat.messages()
    }

    /// Record a user message and return the conversation to hand to the
    /// assistant.
    pub fn send_chat_message(&mut self, text: &str) -> Result<ChatTurn, ShellError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ShellError::Ipc("chat message is empty".into()));
        }
        let message = self.chat.push(ChatMessage::user(text)).clone();
        debug!(message_id = %message.id, "chat message queued");
        self.coordinator
            .broadcast(&PushEvent::ChatMessageReceived(message));
        Ok(ChatTurn {
            history: self.chat.messages().to_vec(),
        })
    }

    /// Record the assistant's reply, or its failure, and push it.
    pub fn complete_chat(&mut self, reply: Result<String, ShellError>) {
        let content = match reply {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "assistant request failed");
                format!("Error: {e}")
            }
        };
        let message = self.chat.push(ChatMessage::assistant(content)).clone();
        self.coordinator
            .broadcast(&PushEvent::ChatMessageReceived(message));
    }

    // =========================================================================
    // WINDOW
    // =========================================================================

    /// Re-lay out every surface for the host's current window size.
    pub fn resize(&mut self) {
        if let Some(layout) = self.coordinator.layout(self.sidebar.is_expanded()) {
            debug!(
                width = layout.content.width,
                height = layout.content.height,
                "window relayout"
            );
            self.coordinator.apply_layout(&layout, self.tabs.placements());
        }
    }

    /// Route an event reported by the embedding environment.
    ///
    /// Chrome IPC messages are dispatched to the bus; a `ChatTurn` is
    /// returned when a chat message needs an assistant reply.
    pub fn handle_surface_event(&mut self, event: SurfaceEvent) -> Option<ChatTurn> {
        if let SurfaceEventKind::IpcMessage(body) = &event.kind {
            if self.coordinator.chrome_role(event.surface).is_none() {
                warn!(surface_id = %event.surface, "ipc from non-chrome surface rejected");
                return None;
            }
            return self.handle_ipc(event.surface, body);
        }
        self.tabs.handle_surface_event(&event, &self.coordinator);
        None
    }

    /// Destroy every surface. The shell is unusable afterwards.
    pub fn shutdown(&mut self) {
        self.tabs.shutdown(&mut self.coordinator);
        self.coordinator.shutdown();
        info!("shell shut down");
    }

    // =========================================================================
    // BUS
    // =========================================================================

    fn handle_ipc(&mut self, from: SurfaceId, raw: &str) -> Option<ChatTurn> {
        let (id, request) = match BusRequest::parse(raw) {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!(surface_id = %from, error = %e, "bus request rejected");
                if let Some(id) = request_id(raw) {
                    self.coordinator
                        .reply(from, &BusReply::failed(id, Value::Null, &e));
                }
                return None;
            }
        };

        debug!(surface_id = %from, request_id = id, kind = request.kind(), "bus request");
        let fallback = reply_fallback(&request);
        let (result, turn) = self.dispatch(request);
        let reply = match result {
            Ok(value) => BusReply::ok(id, value),
            Err(e) => {
                warn!(surface_id = %from, request_id = id, error = %e, "bus request failed");
                BusReply::failed(id, fallback, &e)
            }
        };
        self.coordinator.reply(from, &reply);
        turn
    }

    fn dispatch(&mut self, request: BusRequest) -> (Result<Value, ShellError>, Option<ChatTurn>) {
        let result = match request {
            BusRequest::CreateTab { url } => self.create_tab(url.as_deref()).map(|id| json!(id)),
            BusRequest::CloseTab { id } => self.close_tab(&id).map(|()| json!(true)),
            BusRequest::SwitchTab { id } => {
                self.switch_tab(&id);
                Ok(json!(true))
            }
            BusRequest::GetTabs => Ok(json!(self.tabs())),
            BusRequest::NavigateTo { url } => self.navigate(&url).map(Value::from),
            BusRequest::GoBack => self.go_back().map(Value::from),
            BusRequest::GoForward => self.go_forward().map(Value::from),
            BusRequest::Reload => self.reload().map(Value::from),
            BusRequest::GetCurrentUrl => Ok(json!(self.current_url())),
            BusRequest::ToggleSidebar => Ok(json!(self.toggle_sidebar())),
            BusRequest::GetSidebarState => Ok(json!(self.sidebar_state())),
            BusRequest::GetChatMessages => Ok(json!(self.chat_messages())),
            BusRequest::SendChatMessage { text } => {
                return match self.send_chat_message(&text) {
                    Ok(turn) => {
                        let sent = turn.history.last().map(|m| json!(m)).unwrap_or(Value::Null);
                        (Ok(sent), Some(turn))
                    }
                    Err(e) => (Err(e), None),
                };
            }
        };
        (result, None)
    }
}

/// Value a failed request resolves to on the chrome side.
fn reply_fallback(request: &BusRequest) -> Value {
    match request {
        BusRequest::NavigateTo { .. }
        | BusRequest::GoBack
        | BusRequest::GoForward
        | BusRequest::Reload
        | BusRequest::CloseTab { .. } => Value::Bool(false),
        _ => Value::Null,
    }
}

/// Correlation id of a request that failed to decode, if recoverable.
fn request_id(raw: &str) -> Option<u64> {
    serde_json::from_str::<Value>(raw)
        .ok()?
        .get("id")?
        .as_u64()
}
