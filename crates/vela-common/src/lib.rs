pub mod errors;
pub mod id;
pub mod surface;
pub mod types;

pub use errors::{ConfigError, ShellError, SurfaceError};
pub use id::{new_message_id, SurfaceId, TabId};
pub use surface::{NavSeq, Surface, SurfaceEvent, SurfaceEventKind, SurfaceHost};
pub use types::{ChatMessage, ChatSender, Rect, Size, SurfaceRole};

pub type Result<T> = std::result::Result<T, ShellError>;
