//! Stateless UI rendering for the board, status and stats lines.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::games::tictactoe::{Player, Position, Square};
use crate::settings::{SettingsStore, Theme};

/// Colours for one theme.
#[derive(Debug, Clone, Copy)]
struct Palette {
    background: Color,
    text: Color,
    accent: Color,
    muted: Color,
    x: Color,
    o: Color,
    cursor: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                accent: Color::Blue,
                muted: Color::Gray,
                x: Color::Blue,
                o: Color::Red,
                cursor: Color::LightYellow,
            },
            Theme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                accent: Color::Cyan,
                muted: Color::DarkGray,
                x: Color::LightBlue,
                o: Color::LightRed,
                cursor: Color::DarkGray,
            },
        }
    }

    fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

/// Draws the whole screen.
pub fn draw<S: SettingsStore>(frame: &mut Frame, app: &App<S>) {
    let palette = Palette::for_theme(app.theme());
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.base()), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(3), // Stats
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = format!(
        "Tic Tac Toe  [{}]  {} {}",
        app.mode(),
        app.theme().toggle_icon(),
        app.theme()
    );
    let title = Paragraph::new(title)
        .style(palette.base().fg(palette.accent).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app, &palette);

    let status_text = if app.status_message().is_empty() {
        app.turn_line()
    } else {
        format!("{}  ·  {}", app.turn_line(), app.status_message())
    };
    let status = Paragraph::new(status_text)
        .style(palette.base())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, chunks[2]);

    let stats = Paragraph::new(app.stats().to_string())
        .style(palette.base())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Stats"));
    frame.render_widget(stats, chunks[3]);

    let help = Paragraph::new(
        "arrows/1-9: move | enter: place | r: restart | b: bot | f: friend | t: theme | q: quit",
    )
    .style(palette.base().fg(palette.muted))
    .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn draw_board<S: SettingsStore>(frame: &mut Frame, area: Rect, app: &App<S>, palette: &Palette) {
    let board_area = center_rect(area, 29, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, chunk) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
                Constraint::Length(1),
                Constraint::Length(9),
            ])
            .split(chunk);

        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            if let Some(pos) = Position::from_index(row * 3 + col) {
                draw_cell(frame, cell_area, app, pos, palette);
            }
        }
        for sep in [cols[1], cols[3]] {
            let bar = Paragraph::new("│\n│\n│").style(palette.base().fg(palette.muted));
            frame.render_widget(bar, sep);
        }
    }

    for sep in [rows[1], rows[3]] {
        let line = Paragraph::new("─".repeat(29)).style(palette.base().fg(palette.muted));
        frame.render_widget(line, sep);
    }
}

fn draw_cell<S: SettingsStore>(
    frame: &mut Frame,
    area: Rect,
    app: &App<S>,
    pos: Position,
    palette: &Palette,
) {
    let (symbol, style) = match app.game().board().at(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            palette.base().fg(palette.muted),
        ),
        Square::Occupied(player) => {
            let color = match player {
                Player::X => palette.x,
                Player::O => palette.o,
            };
            (player.to_string(), palette.base().fg(color).add_modifier(Modifier::BOLD))
        }
    };

    let style = if pos == app.cursor() {
        style.bg(palette.cursor)
    } else {
        style
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(format!("   {}   ", symbol), style)),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{GameMode, GameSession};
    use crate::settings::MemoryStore;
    use crate::tui::input::Command;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App<MemoryStore>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_marks_and_stats() {
        let mut app = App::new(GameSession::new(GameMode::PlayerVsPlayer, MemoryStore::new()));
        app.handle(Command::Tap(0));

        let screen = rendered(&app);
        assert!(screen.contains('X'));
        assert!(screen.contains("X wins: 0 | O wins: 0 | Draws: 0"));
        assert!(screen.contains("O to move"));
    }
}
