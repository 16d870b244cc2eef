use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cli: &Cli) -> AppResult<()> {
    let source_dir = match &cli.command {
        Commands::Init { source_dir } => source_dir.clone(),
        _ => None,
    };

    Config::init_all(source_dir, cli.test)?;
    success("tutorboard initialized");
    Ok(())
}
