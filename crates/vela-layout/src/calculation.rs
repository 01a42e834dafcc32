//! Layout calculation: window size to per-role rectangles.

use vela_common::{Rect, Size};

use super::types::{LayoutEngine, ShellLayout};

impl LayoutEngine {
    /// Compute the rectangle of every surface.
    ///
    /// Tab strip, navigation bar and content are stacked top to bottom in
    /// the left column; the sidebar takes the rightmost `sidebar_width` for
    /// the full height. Every dimension is clamped at zero, so a window
    /// narrower than the sidebar yields a zero-width content column.
    pub fn compute(&self, window: Size, sidebar_expanded: bool) -> ShellLayout {
        let width = window.width.max(0.0);
        let height = window.height.max(0.0);

        let content_width = (width - self.sidebar_width(sidebar_expanded)).max(0.0);
        let sidebar_width = width - content_width;

        let tab_height = self.tab_bar_height.max(0.0).min(height);
        let nav_height = self.nav_bar_height.max(0.0).min(height - tab_height);
        let content_top = tab_height + nav_height;
        let content_height = (height - content_top).max(0.0);

        ShellLayout {
            tab_strip: Rect::new(0.0, 0.0, content_width, tab_height),
            navigation: Rect::new(0.0, tab_height, content_width, nav_height),
            sidebar: Rect::new(content_width, 0.0, sidebar_width, height),
            content: Rect::new(0.0, content_top, content_width, content_height),
        }
    }
}
