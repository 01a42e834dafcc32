//! Navigation controller: address-bar operations on the active tab.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info, warn};
use vela_common::ShellError;

use crate::tabs::TabManager;

/// `scheme://` prefix, RFC 3986 scheme characters.
static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z][a-zA-Z0-9+.\-]*://").unwrap());

/// Prefix `https://` unless the input already names a scheme.
///
/// `about:` URLs are kept as they are. Host-and-port input such as
/// `localhost:8080` has no `://` and is treated as schemeless.
pub fn normalize_url(input: &str) -> String {
    let trimmed = input.trim();
    if SCHEME_RE.is_match(trimmed) || trimmed.starts_with("about:") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

/// Stateless operation layer over the tab manager's active tab.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigationController;

impl NavigationController {
    pub fn new() -> Self {
        Self
    }

    /// Load `url` (normalized) into the active tab.
    pub fn navigate(&self, tabs: &mut TabManager, url: &str) -> Result<bool, ShellError> {
        let tab = tabs.active_mut().ok_or(ShellError::NoActiveTab)?;
        let url = normalize_url(url);
        let seq = tab.next_seq();
        tab.surface.load_url(&url, seq).map_err(|e| {
            warn!(tab_id = %tab.id, url = %url, error = %e, "navigation rejected");
            ShellError::Navigation(e.to_string())
        })?;
        info!(tab_id = %tab.id, url = %url, seq, "navigating");
        Ok(true)
    }

    /// Step back in the active tab's history. `false` at the boundary.
    pub fn go_back(&self, tabs: &mut TabManager) -> Result<bool, ShellError> {
        let tab = tabs.active_mut().ok_or(ShellError::NoActiveTab)?;
        if !tab.surface.can_go_back() {
            debug!(tab_id = %tab.id, "no history to go back to");
            return Ok(false);
        }
        let seq = tab.next_seq();
        tab.surface
            .go_back(seq)
            .map_err(|e| ShellError::Navigation(e.to_string()))?;
        Ok(true)
    }

    /// Step forward in the active tab's history. `false` at the boundary.
    pub fn go_forward(&self, tabs: &mut TabManager) -> Result<bool, ShellError> {
        let tab = tabs.active_mut().ok_or(ShellError::NoActiveTab)?;
        if !tab.surface.can_go_forward() {
            debug!(tab_id = %tab.id, "no history to go forward to");
            return Ok(false);
        }
        let seq = tab.next_seq();
        tab.surface
            .go_forward(seq)
            .map_err(|e| ShellError::Navigation(e.to_string()))?;
        Ok(true)
    }

    pub fn reload(&self, tabs: &mut TabManager) -> Result<bool, ShellError> {
        let tab = tabs.active_mut().ok_or(ShellError::NoActiveTab)?;
        let seq = tab.next_seq();
        tab.surface
            .reload(seq)
            .map_err(|e| ShellError::Navigation(e.to_string()))?;
        Ok(true)
    }

    /// The active tab's URL, or an empty string without one.
    pub fn current_url(&self, tabs: &TabManager) -> String {
        tabs.active().map(|t| t.url.clone()).unwrap_or_default()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinator::WindowCoordinator;
    use crate::testing::FakeHost;
    use vela_common::Size;
    use vela_layout::LayoutEngine;

    fn setup() -> (FakeHost, WindowCoordinator, TabManager) {
        let host = FakeHost::with_size(Size::new(1024.0, 768.0));
        let coord = WindowCoordinator::new(Box::new(host.clone()), LayoutEngine::default());
        (host, coord, TabManager::new("https://www.google.com"))
    }

    fn active_surface(coord: &WindowCoordinator, tabs: &TabManager) -> vela_common::SurfaceId {
        let index = tabs.active_index().unwrap();
        coord.content_surface_ids()[index]
    }

    #[test]
    fn normalize_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("  example.com/path "), "https://example.com/path");
        assert_eq!(normalize_url("localhost:8080"), "https://localhost:8080");
    }

    #[test]
    fn normalize_keeps_explicit_scheme() {
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
        assert_eq!(normalize_url("https://a.test/x"), "https://a.test/x");
        assert_eq!(normalize_url("ftp://files.test"), "ftp://files.test");
        assert_eq!(normalize_url("about:blank"), "about:blank");
    }

    #[test]
    fn navigate_normalizes_before_loading() {
        let (host, mut coord, mut tabs) = setup();
        tabs.create_tab("https://a.test/", &mut coord, false).unwrap();
        let nav = NavigationController::new();

        assert!(nav.navigate(&mut tabs, "example.com").unwrap());
        let surface = active_surface(&coord, &tabs);
        assert_eq!(host.url(surface).unwrap(), "https://example.com");
        assert_eq!(host.seq(surface), Some(1));
    }

    #[test]
    fn navigate_without_tab_fails() {
        let (_host, _coord, mut tabs) = setup();
        let nav = NavigationController::new();
        assert!(matches!(
            nav.navigate(&mut tabs, "example.com"),
            Err(ShellError::NoActiveTab)
        ));
        assert!(matches!(nav.go_back(&mut tabs), Err(ShellError::NoActiveTab)));
        assert!(matches!(nav.reload(&mut tabs), Err(ShellError::NoActiveTab)));
        assert_eq!(nav.current_url(&tabs), "");
    }

    #[test]
    fn rejected_load_becomes_navigation_error() {
        let (host, mut coord, mut tabs) = setup();
        tabs.create_tab("https://a.test/", &mut coord, false).unwrap();
        host.fail_next_load(active_surface(&coord, &tabs), "blocked");

        let err = NavigationController::new()
            .navigate(&mut tabs, "bad.test")
            .unwrap_err();
        assert!(matches!(err, ShellError::Navigation(ref m) if m.contains("blocked")));
    }

    #[test]
    fn back_and_forward_respect_history() {
        let (host, mut coord, mut tabs) = setup();
        tabs.create_tab("https://a.test/", &mut coord, false).unwrap();
        let nav = NavigationController::new();
        let surface = active_surface(&coord, &tabs);

        assert!(!nav.go_back(&mut tabs).unwrap());
        assert!(!nav.go_forward(&mut tabs).unwrap());

        nav.navigate(&mut tabs, "https://b.test/").unwrap();
        assert!(nav.go_back(&mut tabs).unwrap());
        assert_eq!(host.url(surface).unwrap(), "https://a.test/");
        assert!(nav.go_forward(&mut tabs).unwrap());
        assert_eq!(host.url(surface).unwrap(), "https://b.test/");
        assert_eq!(host.seq(surface), Some(3));
    }

    #[test]
    fn reload_bumps_sequence() {
        let (host, mut coord, mut tabs) = setup();
        tabs.create_tab("https://a.test/", &mut coord, false).unwrap();
        assert!(NavigationController::new().reload(&mut tabs).unwrap());
        assert_eq!(host.seq(active_surface(&coord, &tabs)), Some(1));
    }

    #[test]
    fn current_url_reads_tab_state() {
        let (_host, mut coord, mut tabs) = setup();
        tabs.create_tab("https://a.test/", &mut coord, false).unwrap();
        let nav = NavigationController::new();
        nav.navigate(&mut tabs, "https://b.test/").unwrap();
        // tab url only changes once the surface reports the commit
        assert_eq!(nav.current_url(&tabs), "https://a.test/");
    }
}
