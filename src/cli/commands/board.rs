use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::schedule::cache;
use crate::ui::board::render_board;
use crate::utils::time::resolve_now;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (date, time) = resolve_now(cli.on.as_deref(), cli.at.as_deref())?;
    let snapshot = cache::load_or_refresh(cfg)?;
    print!("{}", render_board(cfg, &snapshot, date, time)?);
    Ok(())
}
