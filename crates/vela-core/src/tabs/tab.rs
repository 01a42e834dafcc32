use serde::{Deserialize, Serialize};
use vela_common::{NavSeq, Surface, TabId};

/// Title shown while the first load of a tab is in flight.
pub const LOADING_TITLE: &str = "Loading…";

/// Title used when neither the page nor its URL yield anything better.
pub const NEW_TAB_TITLE: &str = "New Tab";

/// One open browsing context and the content surface backing it.
pub(crate) struct Tab {
    pub id: TabId,
    pub surface: Box<dyn Surface>,
    pub url: String,
    pub title: String,
    pub is_active: bool,
    /// Sequence of the most recent navigation started on `surface`.
    pub seq: NavSeq,
}

impl Tab {
    pub fn new(id: TabId, surface: Box<dyn Surface>, url: &str) -> Self {
        Self {
            id,
            surface,
            url: url.to_string(),
            title: LOADING_TITLE.to_string(),
            is_active: false,
            seq: 0,
        }
    }

    /// Advance the navigation sequence and return the new value.
    pub fn next_seq(&mut self) -> NavSeq {
        self.seq += 1;
        self.seq
    }

    pub fn has_placeholder_title(&self) -> bool {
        self.title.is_empty() || self.title == LOADING_TITLE
    }

    pub fn snapshot(&self) -> TabSnapshot {
        TabSnapshot {
            id: self.id.clone(),
            url: self.url.clone(),
            title: self.title.clone(),
            is_active: self.is_active,
        }
    }
}

/// Read-only projection of a tab handed to chrome surfaces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabSnapshot {
    pub id: TabId,
    pub url: String,
    pub title: String,
    pub is_active: bool,
}

/// Host component of `url`, if it parses and has a non-empty one.
pub(crate) fn host_of(url: &str) -> Option<String> {
    url::Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .filter(|h| !h.is_empty())
}
