//! Diary CLI - a single-user, CLI-first personal journal
//!
//! Opens (or creates) the diary database and runs the interactive menu on
//! stdin and stdout.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;
mod menu;
mod ui;

use clap::Parser;
use tracing::info;

use app::AppContext;
use cli::Cli;
use menu::{run_menu, Session};
use ui::{Console, UiContext};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging();

    let ctx = AppContext::new(&cli);
    let page_size = ctx.page_size()?;
    let mut storage = ctx.open_storage()?;
    info!(path = %ctx.diary_path()?.display(), page_size, "diary opened");

    let mut console = Console::stdio(UiContext::from_env());
    let mut session = Session {
        storage: &mut storage,
        console: &mut console,
        page_size,
    };
    run_menu(&mut session)
}
