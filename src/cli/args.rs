//! CLI argument definitions using clap derive

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "inventory")]
#[command(author, version, about = "Part Inventory")]
#[command(
    long_about = "An interactive console for managing part specifications, the suppliers that can fulfill them, and the requisition requests raised against them. Everything is kept in memory and discarded on exit."
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug, Default)]
pub struct GlobalOpts {
    /// Only log errors
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable debug logging on stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Config file to use instead of the global one
    #[arg(long, env = "INVENTORY_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}
