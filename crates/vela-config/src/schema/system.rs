//! Assistant and logging settings.

use serde::{Deserialize, Serialize};

/// Placeholder assistant behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    /// Simulated thinking time before a reply, in milliseconds (valid range: 0-60000).
    pub reply_delay_ms: u64,
    /// Text placed before the echoed message.
    pub reply_prefix: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: 1000,
            reply_prefix: "AI Response: I received your message: ".to_string(),
        }
    }
}

/// Log verbosity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}

impl LoggingConfig {
    /// `tracing-subscriber` filter directive scoped to the vela crates.
    pub fn directive(&self) -> String {
        format!("vela={}", self.level.as_str())
    }
}
