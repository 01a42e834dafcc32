//! Polling of webview and assistant events.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::VelaApp;
use super::types::POLL_INTERVAL;

impl VelaApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_assistant();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed queued webview events to the shell, in arrival order.
    fn poll_webview_events(&mut self) {
        let Some(ref manager) = self.webviews else {
            return;
        };
        let events = manager.drain_events();
        if events.is_empty() {
            return;
        }

        let mut turns = Vec::new();
        if let Some(ref mut shell) = self.shell {
            for event in events {
                if let Some(turn) = shell.handle_surface_event(event) {
                    turns.push(turn);
                }
            }
        }

        for turn in turns {
            self.request_assistant_reply(turn);
        }
    }
}
