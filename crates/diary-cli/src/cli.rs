use clap::Parser;

use diary_core::VERSION;

/// Diary - a single-user, CLI-first personal journal
///
/// Run without arguments to open the interactive menu.
#[derive(Parser, Debug, Default)]
#[command(name = "diary")]
#[command(author, version = VERSION, about, long_about = None)]
pub struct Cli {
    /// Path to the diary database
    #[arg(short, long, env = "DIARY_PATH", value_name = "PATH")]
    pub diary: Option<String>,

    /// Path to the configuration file
    #[arg(long, env = "DIARY_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Entries shown per page when browsing
    #[arg(long, value_name = "N")]
    pub page_size: Option<usize>,
}
