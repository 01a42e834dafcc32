//! Bridge between the shell core and wry webviews.
//!
//! Provides the window-backed `SurfaceHost` the shell creates its
//! surfaces through.

mod host;

pub(super) use host::WryHost;
