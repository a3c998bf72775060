mod banner;
mod config;
mod models;
mod storage;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::banner::BannerKind;
use crate::config::{Config, load_config};
use crate::models::Roster;
use crate::storage::load_roster;
use crate::ui::{App, render};

/// Data directory path (~/.local/share/courtside/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no user data directory"))?
        .join("courtside");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> io::Result<()> {
    // startup notices become auto-dismissing banners
    let mut notices: Vec<(String, BannerKind)> = Vec::new();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            notices.push((format!("Config unreadable, using defaults: {e}"), BannerKind::Danger));
            Config::default()
        }
    };

    // roster file path (~/.local/share/courtside/roster.toml)
    let roster_path = get_data_dir()?.join("roster.toml");

    let roster = match load_roster(&roster_path) {
        Ok(roster) => {
            notices.push((
                format!("Roster ready: {} players", roster.len()),
                BannerKind::Success,
            ));
            roster
        }
        Err(e) => {
            notices.push((
                format!("Could not read {}: {e}", roster_path.display()),
                BannerKind::Danger,
            ));
            Roster::sample()
        }
    };

    let tick = Duration::from_millis(config.tick_ms);
    let mut app = App::new(roster, &config, notices);

    // terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // main loop
    let result = run_app(&mut terminal, &mut app, tick);

    // restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    tick: Duration,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // bounded poll so banner deadlines fire without input
        if crossterm::event::poll(tick)? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                if key.kind == crossterm::event::KeyEventKind::Press {
                    if ui::handle_key_event(app, key.code)? {
                        break;
                    }
                }
            }
        }

        app.sweep_banners(Instant::now());
    }
    Ok(())
}
