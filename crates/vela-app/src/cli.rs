use clap::Parser;

/// Vela: a tabbed browser shell with an assistant sidebar.
#[derive(Parser, Debug)]
#[command(name = "vela", version, about)]
pub struct Args {
    /// URL for the first tab (defaults to `[browser] default_url`).
    #[arg(long)]
    pub url: Option<String>,

    /// Start with the sidebar expanded.
    #[arg(long)]
    pub sidebar: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log filter override, e.g. `vela=debug`.
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
