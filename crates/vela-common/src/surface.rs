//! Capability contract between the shell core and the embedding environment.
//!
//! The core never renders anything itself. It asks a [`SurfaceHost`] for
//! opaque [`Surface`]s, positions them, loads URLs into them, and consumes
//! the [`SurfaceEvent`]s the environment reports back.

use crate::errors::SurfaceError;
use crate::id::SurfaceId;
use crate::types::{Rect, Size, SurfaceRole};

/// Per-surface navigation sequence number.
///
/// Every navigation the core starts carries a fresh sequence; the surface
/// tags the events it emits afterwards with the latest one it was given.
pub type NavSeq = u64;

/// A renderable, navigable region of the window.
pub trait Surface {
    fn id(&self) -> SurfaceId;

    fn role(&self) -> SurfaceRole;

    /// Position the surface within the window. Dimensions are never negative.
    fn set_bounds(&mut self, bounds: Rect) -> Result<(), SurfaceError>;

    /// Start loading `url`. Events produced by this load carry `seq`.
    fn load_url(&mut self, url: &str, seq: NavSeq) -> Result<(), SurfaceError>;

    /// The URL the surface currently displays.
    fn url(&self) -> String;

    fn is_loading(&self) -> bool;

    fn can_go_back(&self) -> bool;

    fn can_go_forward(&self) -> bool;

    fn go_back(&mut self, seq: NavSeq) -> Result<(), SurfaceError>;

    fn go_forward(&mut self, seq: NavSeq) -> Result<(), SurfaceError>;

    fn reload(&mut self, seq: NavSeq) -> Result<(), SurfaceError>;

    /// Push a message to script running inside the surface.
    fn send(&self, channel: &str, payload: &serde_json::Value) -> Result<(), SurfaceError>;
}

/// The top-level window that owns every surface.
pub trait SurfaceHost {
    /// Create a surface as a child of the window and start loading `url`.
    fn create_surface(
        &mut self,
        id: SurfaceId,
        role: SurfaceRole,
        url: &str,
    ) -> Result<Box<dyn Surface>, SurfaceError>;

    /// Detach a surface from the window and free it.
    fn destroy_surface(&mut self, surface: Box<dyn Surface>);

    /// Current content size of the window, or `None` before the window exists.
    fn content_size(&self) -> Option<Size>;
}

/// What happened on a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEventKind {
    /// A main-frame navigation committed to `url`.
    NavigationCommitted(String),
    /// Fragment or history-API navigation within the same document.
    InPageNavigation(String),
    /// The document reported a title.
    TitleAvailable(String),
    LoadStarted,
    /// Loading finished; carries the URL the surface settled on.
    LoadStopped(String),
    /// Raw JSON message posted by script inside a chrome surface.
    IpcMessage(String),
}

/// An event reported by the embedding environment for one surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceEvent {
    pub surface: SurfaceId,
    pub seq: NavSeq,
    pub kind: SurfaceEventKind,
}

impl SurfaceEvent {
    pub fn new(surface: SurfaceId, seq: NavSeq, kind: SurfaceEventKind) -> Self {
        Self { surface, seq, kind }
    }
}
