//! IPC protocol between the shell and script running in webviews.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: chrome pages call `window.vela.ipc.request(kind, payload)`,
//!   which posts `{id, kind, payload}` through `window.ipc.postMessage` and
//!   resolves when the matching `ipc-response` arrives.
//! - **Rust -> JS**: the shell evaluates `window.vela.ipc._dispatch(channel,
//!   payload)` to deliver replies and push events.
//!
//! Content pages get a smaller script that only reports same-document
//! navigations, which wry has no callback for.

use vela_common::SurfaceEventKind;

/// Message kind posted by content pages on hash or history-API navigation.
pub const IN_PAGE_NAVIGATION_KIND: &str = "__in-page-navigation";

/// Injected into every chrome surface.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    window.vela = window.vela || {};
    var nextId = 1;
    var pending = {};
    var listeners = {};
    window.vela.ipc = {
        request: function(kind, payload) {
            var id = nextId++;
            return new Promise(function(resolve, reject) {
                pending[id] = { resolve: resolve, reject: reject };
                window.ipc.postMessage(JSON.stringify({
                    id: id,
                    kind: kind,
                    payload: payload === undefined ? null : payload
                }));
            });
        },
        on: function(channel, callback) {
            listeners[channel] = callback;
        },
        off: function(channel) {
            delete listeners[channel];
        },
        _dispatch: function(channel, payload) {
            if (channel === "ipc-response") {
                var waiter = pending[payload.id];
                if (!waiter) return;
                delete pending[payload.id];
                if (payload.ok) {
                    waiter.resolve(payload.result);
                } else {
                    waiter.reject(Object.assign(new Error(payload.error), { result: payload.result }));
                }
                return;
            }
            var listener = listeners[channel];
            if (listener) {
                listener(payload);
            }
        }
    };
})();
"#;

/// Injected into every content surface.
pub const CONTENT_INIT_SCRIPT: &str = r#"
(function() {
    function report() {
        window.ipc.postMessage(JSON.stringify({
            kind: "__in-page-navigation",
            payload: window.location.href
        }));
    }
    window.addEventListener("hashchange", report);
    window.addEventListener("popstate", report);
    ["pushState", "replaceState"].forEach(function(name) {
        var original = history[name];
        history[name] = function() {
            var result = original.apply(this, arguments);
            report();
            return result;
        };
    });
})();
"#;

/// Generate a JS snippet that dispatches a message to the page's IPC handler.
pub fn js_dispatch_message(channel: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.vela && window.vela.ipc._dispatch({}, {});",
        serde_json::to_string(channel).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

/// Classify a validated IPC body from a webview.
///
/// In-page navigation reports become `InPageNavigation`; everything else
/// is forwarded untouched for the shell's bus to decode.
pub fn classify_message(body: &str) -> Option<SurfaceEventKind> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    if value.get("kind").and_then(|k| k.as_str()) == Some(IN_PAGE_NAVIGATION_KIND) {
        let url = value.get("payload")?.as_str()?;
        return Some(SurfaceEventKind::InPageNavigation(url.to_string()));
    }
    Some(SurfaceEventKind::IpcMessage(body.to_string()))
}
