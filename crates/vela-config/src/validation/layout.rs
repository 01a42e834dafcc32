//! Layout validation (bar heights, sidebar widths).

use crate::schema::VelaConfig;

use super::helpers::validate_range;

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &VelaConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.tab_bar_height", layout.tab_bar_height, 0, 200);
    validate_range(errors, "layout.nav_bar_height", layout.nav_bar_height, 0, 200);
    validate_range(
        errors,
        "layout.sidebar_expanded_width",
        layout.sidebar_expanded_width,
        0,
        2000,
    );
    validate_range(
        errors,
        "layout.sidebar_collapsed_width",
        layout.sidebar_collapsed_width,
        0,
        2000,
    );
    if layout.sidebar_collapsed_width > layout.sidebar_expanded_width {
        errors.push(format!(
            "layout.sidebar_collapsed_width = {} exceeds layout.sidebar_expanded_width = {}",
            layout.sidebar_collapsed_width, layout.sidebar_expanded_width
        ));
    }
}
