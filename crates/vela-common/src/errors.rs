use std::path::PathBuf;

use crate::id::TabId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by the embedding environment's surface capability.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface creation failed: {0}")]
    Creation(String),

    #[error("surface navigation failed: {0}")]
    Navigation(String),

    #[error("surface bounds update failed: {0}")]
    Bounds(String),

    #[error("surface ipc failed: {0}")]
    Ipc(String),

    #[error("surface already destroyed")]
    Closed,
}

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("no active tab")]
    NoActiveTab,

    #[error("unknown tab id: {0}")]
    UnknownTabId(TabId),

    #[error("navigation error: {0}")]
    Navigation(String),

    #[error("window not initialized")]
    UninitializedWindow,

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error("ipc error: {0}")]
    Ipc(String),

    #[error("assistant error: {0}")]
    Assistant(String),
}
