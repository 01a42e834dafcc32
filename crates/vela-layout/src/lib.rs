//! Geometry engine: maps window size and sidebar state to one rectangle per
//! surface role. Pure; no state beyond the configured metrics.

mod calculation;
mod types;

pub use types::{LayoutEngine, ShellLayout};
