//! Cross-surface message bus.
//!
//! Chrome surfaces run in isolated contexts and cannot see each other or
//! the core directly. They talk to the core over two kinds of messages:
//! - **Pull** (`BusRequest`): a JSON request `{id, kind, payload}` posted
//!   by script; answered from authoritative in-memory state with a
//!   `BusReply` on the `ipc-response` channel.
//! - **Push** (`PushEvent`): fire-and-forget, most-recent-wins updates.
//!   Nothing is buffered or replayed; a surface that missed pushes uses
//!   the matching pull request to resynchronize.

use serde::{Deserialize, Serialize};
use tracing::warn;
use vela_common::{ChatMessage, ShellError, SurfaceRole, TabId};

use crate::tabs::TabSnapshot;

/// Channel on which replies to pull requests are delivered.
pub const REPLY_CHANNEL: &str = "ipc-response";

// =============================================================================
// PUSH
// =============================================================================

/// A state change pushed to the chrome surfaces that render it.
#[derive(Debug, Clone, PartialEq)]
pub enum PushEvent {
    /// Full snapshot of the tab list.
    TabsUpdated(Vec<TabSnapshot>),
    /// The active tab's URL changed.
    UrlChanged(String),
    /// The active tab started or stopped loading.
    LoadingChanged(bool),
    SidebarStateChanged(bool),
    ChatMessageReceived(ChatMessage),
}

impl PushEvent {
    pub fn channel(&self) -> &'static str {
        match self {
            PushEvent::TabsUpdated(_) => "tabs-updated",
            PushEvent::UrlChanged(_) => "url-changed",
            PushEvent::LoadingChanged(_) => "loading-changed",
            PushEvent::SidebarStateChanged(_) => "sidebar-state-changed",
            PushEvent::ChatMessageReceived(_) => "chat-message-received",
        }
    }

    /// Chrome surfaces subscribed to this event.
    pub fn subscribers(&self) -> &'static [SurfaceRole] {
        match self {
            PushEvent::TabsUpdated(_) => &[SurfaceRole::TabStrip],
            PushEvent::UrlChanged(_) | PushEvent::LoadingChanged(_) => &[SurfaceRole::Navigation],
            PushEvent::SidebarStateChanged(_) | PushEvent::ChatMessageReceived(_) => {
                &[SurfaceRole::Sidebar]
            }
        }
    }

    pub fn payload(&self) -> serde_json::Value {
        match self {
            PushEvent::TabsUpdated(tabs) => to_value(tabs),
            PushEvent::UrlChanged(url) => serde_json::Value::from(url.as_str()),
            PushEvent::LoadingChanged(loading) => serde_json::Value::from(*loading),
            PushEvent::SidebarStateChanged(expanded) => serde_json::Value::from(*expanded),
            PushEvent::ChatMessageReceived(message) => to_value(message),
        }
    }
}

fn to_value<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        warn!(error = %e, "failed to serialize push payload");
        serde_json::Value::Null
    })
}

// =============================================================================
// PULL
// =============================================================================

/// Request kinds chrome surfaces may send. Anything else is rejected.
pub const ALLOWED_REQUEST_KINDS: &[&str] = &[
    "create-tab",
    "close-tab",
    "switch-tab",
    "get-tabs",
    "navigate-to",
    "go-back",
    "go-forward",
    "reload",
    "get-current-url",
    "toggle-sidebar",
    "get-sidebar-state",
    "send-chat-message",
    "get-chat-messages",
];

pub fn is_request_kind_allowed(kind: &str) -> bool {
    ALLOWED_REQUEST_KINDS.contains(&kind)
}

/// A decoded pull request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BusRequest {
    CreateTab { url: Option<String> },
    CloseTab { id: TabId },
    SwitchTab { id: TabId },
    GetTabs,
    NavigateTo { url: String },
    GoBack,
    GoForward,
    Reload,
    GetCurrentUrl,
    ToggleSidebar,
    GetSidebarState,
    SendChatMessage { text: String },
    GetChatMessages,
}

#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    id: u64,
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl BusRequest {
    /// Decode a raw JSON message into its correlation id and request.
    pub fn parse(raw: &str) -> Result<(u64, BusRequest), ShellError> {
        let msg: RawRequest = serde_json::from_str(raw)
            .map_err(|e| ShellError::Ipc(format!("malformed request: {e}")))?;

        if !is_request_kind_allowed(&msg.kind) {
            return Err(ShellError::Ipc(format!("unknown request kind: {}", msg.kind)));
        }

        let request = match msg.kind.as_str() {
            "create-tab" => BusRequest::CreateTab {
                url: optional_string(&msg.payload),
            },
            "close-tab" => BusRequest::CloseTab {
                id: TabId::from(required_string(&msg.kind, &msg.payload)?),
            },
            "switch-tab" => BusRequest::SwitchTab {
                id: TabId::from(required_string(&msg.kind, &msg.payload)?),
            },
            "get-tabs" => BusRequest::GetTabs,
            "navigate-to" => BusRequest::NavigateTo {
                url: required_string(&msg.kind, &msg.payload)?,
            },
            "go-back" => BusRequest::GoBack,
            "go-forward" => BusRequest::GoForward,
            "reload" => BusRequest::Reload,
            "get-current-url" => BusRequest::GetCurrentUrl,
            "toggle-sidebar" => BusRequest::ToggleSidebar,
            "get-sidebar-state" => BusRequest::GetSidebarState,
            "send-chat-message" => BusRequest::SendChatMessage {
                text: required_string(&msg.kind, &msg.payload)?,
            },
            "get-chat-messages" => BusRequest::GetChatMessages,
            other => return Err(ShellError::Ipc(format!("unhandled request kind: {other}"))),
        };

        Ok((msg.id, request))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            BusRequest::CreateTab { .. } => "create-tab",
            BusRequest::CloseTab { .. } => "close-tab",
            BusRequest::SwitchTab { .. } => "switch-tab",
            BusRequest::GetTabs => "get-tabs",
            BusRequest::NavigateTo { .. } => "navigate-to",
            BusRequest::GoBack => "go-back",
            BusRequest::GoForward => "go-forward",
            BusRequest::Reload => "reload",
            BusRequest::GetCurrentUrl => "get-current-url",
            BusRequest::ToggleSidebar => "toggle-sidebar",
            BusRequest::GetSidebarState => "get-sidebar-state",
            BusRequest::SendChatMessage { .. } => "send-chat-message",
            BusRequest::GetChatMessages => "get-chat-messages",
        }
    }
}

fn optional_string(payload: &serde_json::Value) -> Option<String> {
    payload
        .as_str()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
}

fn required_string(kind: &str, payload: &serde_json::Value) -> Result<String, ShellError> {
    payload
        .as_str()
        .map(String::from)
        .ok_or_else(|| ShellError::Ipc(format!("{kind} requires a string payload")))
}

/// Response to a pull request, delivered on [`REPLY_CHANNEL`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusReply {
    pub id: u64,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BusReply {
    pub fn ok(id: u64, result: serde_json::Value) -> Self {
        Self {
            id,
            ok: true,
            result: Some(result),
            error: None,
        }
    }

    /// A failed request. `result` carries the value the caller should fall
    /// back to (e.g. `false` for a failed navigation).
    pub fn failed(id: u64, fallback: serde_json::Value, error: &ShellError) -> Self {
        Self {
            id,
            ok: false,
            result: Some(fallback),
            error: Some(error.to_string()),
        }
    }

    pub fn payload(&self) -> serde_json::Value {
        to_value(self)
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn push_routing() {
        assert_eq!(
            PushEvent::TabsUpdated(vec![]).subscribers(),
            &[SurfaceRole::TabStrip]
        );
        assert_eq!(
            PushEvent::UrlChanged("a".into()).subscribers(),
            &[SurfaceRole::Navigation]
        );
        assert_eq!(
            PushEvent::LoadingChanged(true).subscribers(),
            &[SurfaceRole::Navigation]
        );
        assert_eq!(
            PushEvent::SidebarStateChanged(true).subscribers(),
            &[SurfaceRole::Sidebar]
        );
    }

    #[test]
    fn push_channels_match_wire_names() {
        assert_eq!(PushEvent::TabsUpdated(vec![]).channel(), "tabs-updated");
        assert_eq!(PushEvent::UrlChanged(String::new()).channel(), "url-changed");
        assert_eq!(PushEvent::LoadingChanged(false).channel(), "loading-changed");
        assert_eq!(
            PushEvent::SidebarStateChanged(false).channel(),
            "sidebar-state-changed"
        );
    }

    #[test]
    fn tabs_payload_uses_camel_case() {
        let event = PushEvent::TabsUpdated(vec![TabSnapshot {
            id: TabId::from("tab-1"),
            url: "https://example.com/".into(),
            title: "Example".into(),
            is_active: true,
        }]);
        assert_eq!(
            event.payload(),
            json!([{
                "id": "tab-1",
                "url": "https://example.com/",
                "title": "Example",
                "isActive": true
            }])
        );
    }

    #[test]
    fn parse_simple_requests() {
        let (id, req) = BusRequest::parse(r#"{"id":4,"kind":"get-tabs"}"#).unwrap();
        assert_eq!(id, 4);
        assert_eq!(req, BusRequest::GetTabs);

        let (_, req) = BusRequest::parse(r#"{"id":5,"kind":"toggle-sidebar","payload":null}"#)
            .unwrap();
        assert_eq!(req, BusRequest::ToggleSidebar);
    }

    #[test]
    fn parse_requests_with_payload() {
        let (_, req) =
            BusRequest::parse(r#"{"id":1,"kind":"navigate-to","payload":"example.com"}"#).unwrap();
        assert_eq!(
            req,
            BusRequest::NavigateTo {
                url: "example.com".into()
            }
        );

        let (_, req) =
            BusRequest::parse(r#"{"id":2,"kind":"close-tab","payload":"tab-9"}"#).unwrap();
        assert_eq!(
            req,
            BusRequest::CloseTab {
                id: TabId::from("tab-9")
            }
        );
    }

    #[test]
    fn create_tab_url_is_optional() {
        let (_, req) = BusRequest::parse(r#"{"id":1,"kind":"create-tab"}"#).unwrap();
        assert_eq!(req, BusRequest::CreateTab { url: None });

        let (_, req) = BusRequest::parse(r#"{"id":1,"kind":"create-tab","payload":"  "}"#).unwrap();
        assert_eq!(req, BusRequest::CreateTab { url: None });

        let (_, req) =
            BusRequest::parse(r#"{"id":1,"kind":"create-tab","payload":"https://a.test"}"#)
                .unwrap();
        assert_eq!(
            req,
            BusRequest::CreateTab {
                url: Some("https://a.test".into())
            }
        );
    }

    #[test]
    fn missing_required_payload_is_rejected() {
        let err = BusRequest::parse(r#"{"id":1,"kind":"switch-tab"}"#).unwrap_err();
        assert!(matches!(err, ShellError::Ipc(ref m) if m.contains("switch-tab")));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        for raw in [
            r#"{"id":1,"kind":"eval","payload":"alert(1)"}"#,
            r#"{"id":1,"kind":"GET-TABS"}"#,
            r#"{"id":1,"kind":""}"#,
        ] {
            assert!(matches!(BusRequest::parse(raw), Err(ShellError::Ipc(_))));
        }
    }

    #[test]
    fn malformed_json_is_rejected() {
        assert!(BusRequest::parse("not json").is_err());
        assert!(BusRequest::parse(r#"{"id":1}"#).is_err());
    }

    #[test]
    fn every_allowed_kind_parses() {
        for kind in ALLOWED_REQUEST_KINDS {
            let raw = json!({"id": 1, "kind": kind, "payload": "x"}).to_string();
            let (_, req) = BusRequest::parse(&raw).unwrap();
            assert_eq!(req.kind(), *kind);
        }
    }

    #[test]
    fn reply_wire_shape() {
        let ok = BusReply::ok(3, json!(true));
        assert_eq!(ok.payload(), json!({"id": 3, "ok": true, "result": true}));

        let failed = BusReply::failed(4, json!(false), &ShellError::NoActiveTab);
        assert_eq!(
            failed.payload(),
            json!({"id": 4, "ok": false, "result": false, "error": "no active tab"})
        );
    }
}
