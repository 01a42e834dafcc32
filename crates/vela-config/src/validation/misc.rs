//! Window, browser and assistant validation.

use crate::schema::VelaConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &VelaConfig) {
    validate_range(errors, "window.width", config.window.width, 200, 10000);
    validate_range(errors, "window.height", config.window.height, 200, 10000);
}

pub(crate) fn validate_browser(errors: &mut Vec<String>, config: &VelaConfig) {
    if config.browser.default_url.trim().is_empty() {
        errors.push("browser.default_url must not be empty".to_string());
    }
    if config.chrome.base_url.trim().is_empty() {
        errors.push("chrome.base_url must not be empty".to_string());
    }
}

pub(crate) fn validate_assistant(errors: &mut Vec<String>, config: &VelaConfig) {
    validate_range(
        errors,
        "assistant.reply_delay_ms",
        config.assistant.reply_delay_ms,
        0,
        60_000,
    );
}
