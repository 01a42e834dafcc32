use serde::{Deserialize, Serialize};
use std::fmt;

/// Axis-aligned rectangle in logical window coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Same origin and width, zero height. Used to park hidden surfaces.
    pub fn collapsed(&self) -> Self {
        Self {
            height: 0.0,
            ..*self
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// True when the two rectangles share any interior area.
    pub fn overlaps(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Window content size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The role a surface plays in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceRole {
    TabStrip,
    Navigation,
    Sidebar,
    Content,
}

impl SurfaceRole {
    pub const CHROME: [SurfaceRole; 3] = [
        SurfaceRole::TabStrip,
        SurfaceRole::Navigation,
        SurfaceRole::Sidebar,
    ];

    pub fn is_chrome(self) -> bool {
        !matches!(self, SurfaceRole::Content)
    }

    /// Fragment appended to the chrome base URL to select the widget.
    pub fn chrome_fragment(self) -> Option<&'static str> {
        match self {
            SurfaceRole::TabStrip => Some("tabs"),
            SurfaceRole::Navigation => Some("navigation"),
            SurfaceRole::Sidebar => Some("sidebar"),
            SurfaceRole::Content => None,
        }
    }
}

impl fmt::Display for SurfaceRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SurfaceRole::TabStrip => "tab-strip",
            SurfaceRole::Navigation => "navigation",
            SurfaceRole::Sidebar => "sidebar",
            SurfaceRole::Content => "content",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatSender {
    User,
    Assistant,
}

/// One entry of the sidebar conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: ChatSender,
    /// Unix timestamp in milliseconds.
    pub timestamp: i64,
}

impl ChatMessage {
    pub fn new(sender: ChatSender, content: impl Into<String>) -> Self {
        Self {
            id: crate::id::new_message_id(),
            content: content.into(),
            sender,
            timestamp: chrono::Utc::now().timestamp_millis(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatSender::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatSender::Assistant, content)
    }
}
