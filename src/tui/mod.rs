//! Terminal front end: renders the session and forwards key presses.

mod app;
mod input;
mod ui;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;
use tracing::{debug, error, info, instrument};

use crate::session::GameSession;
use crate::settings::SettingsStore;

pub use app::App;
pub use input::{Command, command_for, move_cursor};

/// Runs the interactive game until the user quits.
#[instrument(skip(session))]
pub fn run_tui<S: SettingsStore>(session: GameSession<S>) -> Result<()> {
    info!("Starting terminal front end");
    let mut app = App::new(session);

    let mut terminal = ratatui::init();
    let res = run_app(&mut terminal, &mut app);
    ratatui::restore();

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!(stats = %app.stats(), "Terminal front end closed");
    res
}

/// Draw, read one key, apply it; repeat.
fn run_app<S: SettingsStore>(terminal: &mut DefaultTerminal, app: &mut App<S>) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && let Some(command) = command_for(app.cursor(), key.code)
        {
            debug!(?command, "Key mapped to command");
            app.handle(command);
        }
    }
    Ok(())
}
