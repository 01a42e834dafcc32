use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&VelaConfig::default()).is_ok());
}

#[test]
fn bar_height_out_of_range() {
    let mut config = VelaConfig::default();
    config.layout.nav_bar_height = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.nav_bar_height = 500"));
}

#[test]
fn collapsed_wider_than_expanded_is_rejected() {
    let mut config = VelaConfig::default();
    config.layout.sidebar_collapsed_width = 400;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exceeds layout.sidebar_expanded_width"));
}

#[test]
fn empty_default_url_is_rejected() {
    let mut config = VelaConfig::default();
    config.browser.default_url = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("browser.default_url"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = VelaConfig::default();
    config.window.width = 10;
    config.window.height = 20_000;
    config.assistant.reply_delay_ms = 120_000;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.width"));
    assert!(err.contains("window.height"));
    assert!(err.contains("assistant.reply_delay_ms"));
    assert_eq!(err.matches("; ").count(), 2);
}
