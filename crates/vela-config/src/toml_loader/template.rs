//! Default TOML config template with inline documentation comments.

pub(crate) fn default_config_toml() -> &'static str {
    r##"# Vela Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[layout]
# tab_bar_height = 35            # 0-200
# nav_bar_height = 50            # 0-200
# sidebar_expanded_width = 300   # 0-2000
# sidebar_collapsed_width = 50   # 0-2000, <= sidebar_expanded_width

[browser]
# default_url = "https://www.google.com"
# user_agent = "Vela/0.1"
# devtools = false

[window]
# title = "Vela"
# width = 1024                   # 200-10000
# height = 768                   # 200-10000

[sidebar]
# expanded_on_start = false

[chrome]
# base_url = "http://localhost:5173/"

[assistant]
# reply_delay_ms = 1000          # 0-60000
# reply_prefix = "AI Response: I received your message: "

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
}
