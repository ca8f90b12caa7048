//! Barrow - a turn-based dungeon crawl
//!
//! Main entry point for the game.

use std::io;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;
use crossterm::{
    event,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use barrow_core::Game;
use barrow_core::dungeon::MapConfig;
use barrow_tui::{App, Theme};

/// Barrow - explore the dungeon!
#[derive(Parser, Debug)]
#[command(name = "barrow")]
#[command(author, version, about = "Barrow - explore the dungeon!", long_about = None)]
struct Args {
    /// World seed; the same seed generates the same dungeon
    #[arg(short, long)]
    seed: Option<u64>,

    /// Map width in tiles
    #[arg(long, default_value_t = barrow_core::MAP_WIDTH)]
    width: i32,

    /// Map height in tiles
    #[arg(long, default_value_t = barrow_core::MAP_HEIGHT)]
    height: i32,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(clock_seed);
    let config = MapConfig {
        width: args.width,
        height: args.height,
        ..MapConfig::default()
    };
    let game = Game::new(&config, seed).map_err(io::Error::other)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, Theme::dark());

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            if let Some(command) = app.handle_event(event) {
                app.execute(command);
            }
            if app.should_quit() {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Seed from the wall clock when none was given.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
