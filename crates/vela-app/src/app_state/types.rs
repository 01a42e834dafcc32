//! Internal types and constants for the app state module.

use std::time::Duration;

use vela_assistant::AssistantError;

/// Outcome of one assistant request, sent back from the async task.
pub(super) type AssistantReply = Result<String, AssistantError>;

/// How often to poll for webview and assistant events (approx 120 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(8);
