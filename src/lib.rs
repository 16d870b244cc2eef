//! tutorboard library root.
//! Exposes the CLI parser, the high-level run() function, and the schedule
//! core (source parsing, caching, shift engine) used by the board renderer.

pub mod cli;
pub mod config;
pub mod errors;
pub mod models;
pub mod schedule;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Today => cli::commands::today::handle(cli, cfg),
        Commands::Onshift => cli::commands::onshift::handle(cli, cfg),
        Commands::Next { .. } => cli::commands::next::handle(cli, cfg),
        Commands::Refresh => cli::commands::refresh::handle(cfg),
        Commands::Board => cli::commands::board::handle(cli, cfg),
        Commands::Watch { .. } => cli::commands::watch::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once, then apply command-line overrides.
    let mut cfg = Config::load();
    if let Some(source) = &cli.source {
        cfg.source_dir = source.clone();
    }
    if let Some(data_dir) = &cli.data_dir {
        cfg.data_dir = data_dir.clone();
    }

    dispatch(&cli, &cfg)
}
