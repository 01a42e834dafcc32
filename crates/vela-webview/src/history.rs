//! Back/forward bookkeeping for one webview.
//!
//! wry can ask the page to go back or forward but cannot say whether that
//! is possible, so each surface mirrors its session history here from the
//! URLs reported by load callbacks.

use url::Url;

/// Pending direction of a history traversal started by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Traversal {
    Back,
    Forward,
    Reload,
}

#[derive(Debug, Clone)]
pub struct NavigationHistory {
    entries: Vec<String>,
    index: usize,
    pending: Option<Traversal>,
    /// The only entry is the requested URL, not yet confirmed by a load.
    provisional: bool,
}

impl NavigationHistory {
    pub fn new(initial_url: impl Into<String>) -> Self {
        Self {
            entries: vec![initial_url.into()],
            index: 0,
            pending: None,
            provisional: true,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    pub fn can_go_back(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.index + 1 < self.entries.len()
    }

    pub fn begin_back(&mut self) {
        self.pending = Some(Traversal::Back);
    }

    pub fn begin_forward(&mut self) {
        self.pending = Some(Traversal::Forward);
    }

    pub fn begin_reload(&mut self) {
        self.pending = Some(Traversal::Reload);
    }

    /// A new load was requested explicitly; forget any traversal in flight.
    pub fn begin_load(&mut self) {
        self.pending = None;
    }

    /// Record the URL a navigation committed to.
    ///
    /// A pending traversal only applies when the committed URL is the entry
    /// it was heading for. Anything else is a fresh navigation.
    pub fn commit(&mut self, url: &str) {
        if self.provisional {
            self.provisional = false;
            self.pending = None;
            self.entries[self.index] = url.to_string();
            return;
        }

        match self.pending.take() {
            Some(Traversal::Back) if self.neighbour_is(self.index.checked_sub(1), url) => {
                self.index -= 1;
            }
            Some(Traversal::Forward) if self.neighbour_is(Some(self.index + 1), url) => {
                self.index += 1;
            }
            Some(Traversal::Reload) if same_url(self.current(), url) => {}
            _ => {
                if same_url(self.current(), url) {
                    return;
                }
                self.entries.truncate(self.index + 1);
                self.entries.push(url.to_string());
                self.index += 1;
            }
        }
        self.entries[self.index] = url.to_string();
    }

    fn neighbour_is(&self, index: Option<usize>, url: &str) -> bool {
        index
            .and_then(|i| self.entries.get(i))
            .is_some_and(|entry| same_url(entry, url))
    }
}

/// Compare URLs the way the engine reports them, so `https://a.test` and
/// `https://a.test/` are one entry.
fn same_url(a: &str, b: &str) -> bool {
    match (Url::parse(a), Url::parse(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// History whose initial load has already committed.
    fn loaded(url: &str) -> NavigationHistory {
        let mut h = NavigationHistory::new(url);
        h.commit(url);
        h
    }

    #[test]
    fn fresh_history_has_no_traversal() {
        let h = NavigationHistory::new("https://a.test/");
        assert_eq!(h.current(), "https://a.test/");
        assert!(!h.can_go_back());
        assert!(!h.can_go_forward());
    }

    #[test]
    fn first_load_replaces_requested_url() {
        let mut h = NavigationHistory::new("https://www.google.com");
        h.commit("https://www.google.com/");
        assert_eq!(h.current(), "https://www.google.com/");
        assert!(!h.can_go_back());
    }

    #[test]
    fn first_load_redirect_is_not_a_back_entry() {
        let mut h = NavigationHistory::new("http://a.test");
        h.commit("https://www.a.test/home");
        assert_eq!(h.current(), "https://www.a.test/home");
        assert!(!h.can_go_back());
    }

    #[test]
    fn trailing_slash_does_not_add_entries() {
        let mut h = loaded("https://a.test/");
        h.commit("https://a.test");
        assert!(!h.can_go_back());
    }

    #[test]
    fn commits_push_entries() {
        let mut h = loaded("https://a.test/");
        h.commit("https://b.test/");
        h.commit("https://c.test/");
        assert_eq!(h.current(), "https://c.test/");
        assert!(h.can_go_back());
        assert!(!h.can_go_forward());
    }

    #[test]
    fn back_then_forward() {
        let mut h = loaded("https://a.test/");
        h.commit("https://b.test/");

        h.begin_back();
        h.commit("https://a.test/");
        assert_eq!(h.current(), "https://a.test/");
        assert!(h.can_go_forward());

        h.begin_forward();
        h.commit("https://b.test/");
        assert_eq!(h.current(), "https://b.test/");
        assert!(!h.can_go_forward());
    }

    #[test]
    fn new_navigation_drops_forward_entries() {
        let mut h = loaded("https://a.test/");
        h.commit("https://b.test/");
        h.begin_back();
        h.commit("https://a.test/");

        h.begin_load();
        h.commit("https://c.test/");
        assert!(!h.can_go_forward());
        assert_eq!(h.current(), "https://c.test/");
    }

    #[test]
    fn reload_and_repeat_commits_do_not_grow_history() {
        let mut h = loaded("https://a.test/");
        h.begin_reload();
        h.commit("https://a.test/");
        h.commit("https://a.test/");
        assert!(!h.can_go_back());
    }

    #[test]
    fn unanswered_back_does_not_swallow_next_navigation() {
        let mut h = loaded("https://a.test/");
        h.commit("https://b.test/");
        h.commit("https://c.test/");

        h.begin_back();
        h.commit("https://d.test/");
        assert_eq!(h.current(), "https://d.test/");
        assert!(!h.can_go_forward());

        h.begin_back();
        h.commit("https://c.test/");
        assert_eq!(h.current(), "https://c.test/");
        assert!(h.can_go_forward());
    }

    #[test]
    fn unanswered_reload_does_not_replace_current_entry() {
        let mut h = loaded("https://a.test/");
        h.begin_reload();
        h.commit("https://b.test/");
        assert_eq!(h.current(), "https://b.test/");
        assert!(h.can_go_back());
    }
}
