use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

/// Replay a message script through the demo dashboard and print every step
#[derive(Parser, Debug, Default)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// json5 file holding an array of messages (reads stdin when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Counter step (overrides config)
    #[arg(long, value_name = "N")]
    pub step: Option<i64>,

    /// Counter limit (overrides config)
    #[arg(long, value_name = "N")]
    pub limit: Option<i64>,

    /// Maximum display width of the title (overrides config)
    #[arg(long, value_name = "N")]
    pub max_title_width: Option<usize>,

    /// Pretty-print each step report
    #[arg(short, long)]
    pub pretty: bool,
}
