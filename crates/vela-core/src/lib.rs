//! View-composition and tab-lifecycle core of the Vela browser shell.
//!
//! Owns the authoritative tab list, the sidebar state and the chat log,
//! computes surface geometry through `vela-layout`, and talks to the
//! embedding environment only through the `vela_common::surface` traits:
//! - `WindowCoordinator`: chrome surfaces, layout application, push routing
//! - `TabManager`: tab lifecycle, active-tab invariant, per-tab event wiring
//! - `NavigationController`: navigate / back / forward on the active tab
//! - `SidebarController`: expanded/collapsed state and chat log
//! - `bus`: pull requests and push events exchanged with chrome surfaces
//! - `Shell`: the single entry point the embedder drives

pub mod bus;
pub mod coordinator;
pub mod navigation;
pub mod shell;
pub mod sidebar;
pub mod tabs;

#[cfg(test)]
pub(crate) mod testing;

pub use bus::{BusReply, BusRequest, PushEvent};
pub use coordinator::{ContentPlacement, WindowCoordinator};
pub use navigation::{normalize_url, NavigationController};
pub use shell::{ChatTurn, Shell, ShellOptions};
pub use sidebar::{ChatLog, SidebarController};
pub use tabs::{TabManager, TabSnapshot, LOADING_TITLE, NEW_TAB_TITLE};
