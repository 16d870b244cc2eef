use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::schedule::{cache, slot};
use crate::ui::board::render_board;
use crate::utils::time::resolve_now;
use std::thread;
use std::time::Duration;

/// Kiosk loop: render the board, then sleep to the next half-hour boundary
/// and render again. The timer re-arms itself after every redraw rather than
/// repeating at a fixed interval, so redraws stay aligned to slot edges.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cycles = match &cli.command {
        Commands::Watch { cycles } => *cycles,
        _ => None,
    };

    let mut drawn: u32 = 0;
    loop {
        let (date, time) = resolve_now(cli.on.as_deref(), cli.at.as_deref())?;
        let snapshot = cache::load_or_refresh(cfg)?;

        // Clear the terminal between redraws.
        print!("\x1b[2J\x1b[H");
        print!("{}", render_board(cfg, &snapshot, date, time)?);

        drawn += 1;
        if cycles.is_some_and(|n| drawn >= n) {
            return Ok(());
        }

        let wait = slot::secs_until_next_boundary(time);
        thread::sleep(Duration::from_secs(wait.max(1)));
    }
}
