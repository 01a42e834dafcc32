//! VelaApp struct definition and constructor.

use std::sync::mpsc::{Receiver, Sender};
use std::sync::Arc;
use std::time::Instant;

use vela_config::schema::VelaConfig;
use vela_core::{ChatTurn, Shell};
use vela_webview::WebViewManager;
use winit::window::Window;

use super::types::AssistantReply;

/// Top-level application state.
pub struct VelaApp {
    pub(super) config: VelaConfig,
    /// URL for the first tab, from the command line.
    pub(super) initial_url: Option<String>,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Shell core and the webview event sink it is fed from
    pub(super) shell: Option<Shell>,
    pub(super) webviews: Option<WebViewManager>,

    // Assistant
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) assistant_tx: Option<Sender<ChatTurn>>,
    pub(super) assistant_rx: Option<Receiver<AssistantReply>>,

    // Event loop timing
    pub(super) last_poll: Instant,
    pub(super) should_exit: bool,
}

impl VelaApp {
    pub fn new(config: VelaConfig, initial_url: Option<String>) -> Self {
        Self {
            config,
            initial_url,
            window: None,
            shell: None,
            webviews: None,
            tokio_runtime: None,
            assistant_tx: None,
            assistant_rx: None,
            last_poll: Instant::now(),
            should_exit: false,
        }
    }
}
