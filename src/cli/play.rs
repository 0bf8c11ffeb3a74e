//! Play command implementation - interactive puzzle TUI.

// Display layout and seed derivation use intentional casts
#![allow(clippy::cast_possible_truncation)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use seesaw::game::{Digit, GameState, Intent, Operator, Side};
use seesaw::prefs::Prefs;
use seesaw::share::{NullSharer, SharePayload, Sharer};
use std::io::stdout;
use std::time::Duration;

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the TUI fails.
pub(crate) fn execute(seed: Option<u64>) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let prefs = Prefs::load();
    let app = App::new(seed, prefs, Box::new(NullSharer));
    run_tui(app)
}

/// What the next key press is interpreted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    /// `u` was pressed: the next digit picks the ledger entry to remove.
    RemoveIndex,
}

/// App state for the TUI.
struct App {
    state: GameState,
    seed: u64,
    /// The side digit and removal keys address. Selecting a digit makes it
    /// the core's active side.
    focus: Side,
    mode: InputMode,
    prefs: Prefs,
    sharer: Box<dyn Sharer>,
    show_how_to_play: bool,
    status: String,
}

impl App {
    fn new(seed: u64, prefs: Prefs, sharer: Box<dyn Sharer>) -> Self {
        Self {
            state: GameState::new(seed),
            seed,
            focus: Side::Left,
            mode: InputMode::Normal,
            show_how_to_play: !prefs.hide_how_to_play,
            prefs,
            sharer,
            status: "Press ? for help".to_string(),
        }
    }

    /// Handle one key press. Returns `true` when the app should quit.
    fn handle_key(&mut self, code: KeyCode) -> bool {
        if self.show_how_to_play {
            self.handle_how_to_play_key(code);
            return false;
        }
        if self.state.show_balance_result() {
            return self.handle_result_key(code);
        }
        if self.mode == InputMode::RemoveIndex {
            self.handle_remove_key(code);
            return false;
        }
        self.handle_game_key(code)
    }

    fn handle_how_to_play_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('d') => {
                self.show_how_to_play = false;
                self.prefs.hide_how_to_play = true;
                if let Err(e) = self.prefs.save() {
                    self.status = format!("Could not save preferences: {e}");
                }
            }
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
                self.show_how_to_play = false;
            }
            _ => {}
        }
    }

    fn handle_result_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Enter | KeyCode::Esc => self.state.apply(Intent::DismissResult),
            KeyCode::Char('g') => self.state.apply(Intent::GiveUp),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.share(),
            _ => {}
        }
        false
    }

    fn handle_remove_key(&mut self, code: KeyCode) {
        self.mode = InputMode::Normal;
        let KeyCode::Char(c @ '1'..='9') = code else {
            self.status = "Removal cancelled".to_string();
            return;
        };
        let index = c.to_digit(10).unwrap_or(1) as usize - 1;
        let side = self.focus;
        let id = self
            .state
            .side(side)
            .ledger()
            .entries()
            .get(index)
            .map(|op| op.id);
        if let Some(id) = id {
            self.state.apply(Intent::Remove { id, side });
            self.status = format!("Removed entry {} on the {side} side", index + 1);
        } else {
            self.status = format!("No entry {} on the {side} side", index + 1);
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Tab => self.focus = self.focus.other(),
            KeyCode::Left => self.focus = Side::Left,
            KeyCode::Right => self.focus = Side::Right,
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(value) = c
                    .to_digit(10)
                    .and_then(|n| u8::try_from(n).ok())
                    .and_then(Digit::new)
                {
                    self.state.apply(Intent::SelectNumber {
                        value,
                        side: self.focus,
                    });
                }
            }
            KeyCode::Char(c @ ('+' | '-' | '*' | '/')) => {
                if let Some(op) = Operator::from_symbol(c) {
                    self.state.apply(Intent::SelectOperator(op));
                }
            }
            KeyCode::Enter => self.state.apply(Intent::Commit(self.state.active_side())),
            KeyCode::Char('x') => self.remove_newest(),
            KeyCode::Char('u') => {
                self.mode = InputMode::RemoveIndex;
                self.status = format!("Remove which {} entry? (1-9, Esc cancels)", self.focus);
            }
            KeyCode::Char('b') => {
                if self.state.game_complete() {
                    self.status = "Game over - press n for a new puzzle".to_string();
                } else {
                    self.state.apply(Intent::CheckBalance);
                }
            }
            KeyCode::Char('g') => self.state.apply(Intent::GiveUp),
            KeyCode::Char('n') => self.new_game(),
            KeyCode::Char('s') => self.share(),
            KeyCode::Char('?') => self.show_how_to_play = true,
            _ => {}
        }
        false
    }

    fn remove_newest(&mut self) {
        let side = self.focus;
        let id = self
            .state
            .side(side)
            .ledger()
            .entries()
            .last()
            .map(|op| op.id);
        if let Some(id) = id {
            self.state.apply(Intent::Remove { id, side });
            self.status = format!("Removed newest entry on the {side} side");
        } else {
            self.status = format!("Nothing to remove on the {side} side");
        }
    }

    fn new_game(&mut self) {
        self.state.apply(Intent::NewGame);
        self.focus = Side::Left;
        self.status = "New puzzle dealt".to_string();
    }

    fn share(&mut self) {
        let (left, right) = self.state.totals();
        let payload = SharePayload::from_totals(left, right);
        match self.sharer.share(&payload) {
            Ok(()) => self.status = "Shared the current totals".to_string(),
            Err(e) => self.status = format!("Share failed (ignored): {e}"),
        }
    }
}

fn run_tui(mut app: App) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    loop {
        terminal
            .draw(|f| ui(f, &app))
            .map_err(|e| CliError::new(e.to_string()))?;

        // Handle input with timeout
        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code)
        {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(12),    // Sides
            Constraint::Length(3),  // Balance beam
            Constraint::Length(4),  // Footer
        ])
        .split(f.area());

    render_header(f, chunks[0], app);

    let side_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_side(f, side_chunks[0], app, Side::Left);
    render_side(f, side_chunks[1], app, Side::Right);

    render_beam(f, chunks[2], app);
    render_footer(f, chunks[3], app);

    if app.show_how_to_play {
        render_how_to_play(f);
    } else if app.state.show_balance_result() {
        render_result(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let status = if app.state.game_complete() {
        "COMPLETE"
    } else {
        "PLAYING"
    };

    let title = format!(" Seesaw | Seed {} | {} ", app.seed, status);

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_side(f: &mut Frame, area: Rect, app: &App, side: Side) {
    let side_state = app.state.side(side);
    let is_active = app.state.active_side() == side;
    let selection = app.state.selection();

    let mut lines: Vec<Line> = Vec::new();

    // Pool digits, highlighting every occurrence of a selected value
    let mut spans = vec![Span::raw("Pool:   ")];
    for digit in side_state.pool().digits() {
        let style = if is_active && selection.holds(*digit) {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{digit} "), style));
    }
    lines.push(Line::from(spans));

    // Pending operation, only meaningful on the active side
    let pending = if is_active {
        format!(
            "Next:   {} {} {}",
            opt_digit(selection.operand1),
            selection.operator.map_or('?', Operator::symbol),
            opt_digit(selection.operand2),
        )
    } else {
        "Next:   _ ? _".to_string()
    };
    lines.push(Line::from(pending));
    lines.push(Line::from(""));

    for (i, op) in side_state.ledger().entries().iter().enumerate() {
        lines.push(Line::from(format!("{}: {op}", i + 1)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Total:  {}", side_state.ledger().total()),
        Style::default().add_modifier(Modifier::BOLD),
    )));

    let border_style = if app.focus == side {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let title = format!(" {side} side ");

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(widget, area);
}

fn opt_digit(digit: Option<Digit>) -> String {
    digit.map_or_else(|| "_".to_string(), |d| d.to_string())
}

fn render_beam(f: &mut Frame, area: Rect, app: &App) {
    let (left, right) = app.state.totals();

    let (glyph, color) = if app.state.is_balanced() {
        ("=", Color::Green)
    } else if left < right {
        ("<", Color::Red)
    } else {
        (">", Color::Red)
    };

    let line = Line::from(vec![
        Span::raw(format!(" Left {left}  ")),
        Span::styled(glyph, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  Right {right} ")),
    ]);

    let beam = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Balance "));

    f.render_widget(beam, area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.state.game_complete() {
        " [n] New  [u/x] Remove  [s] Share  [?] Help  [q] Quit "
    } else {
        " [1-9] Pick  [Tab/arrows] Side  [+-*/] Op  [Enter] Commit  [u/x] Remove  [b] Balance  [g] Give up  [n] New  [s] Share  [?] Help  [q] Quit "
    };

    let footer = Paragraph::new(vec![
        Line::from(app.status.as_str()),
        Line::from(Span::styled(controls, Style::default().fg(Color::Gray))),
    ])
    .block(Block::default().borders(Borders::ALL))
    .wrap(Wrap { trim: false });

    f.render_widget(footer, area);
}

fn render_how_to_play(f: &mut Frame) {
    let area = centered_rect(64, 60, f.area());
    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from("Each side of the scale is dealt six digits."),
        Line::from("Pick two digits and an operator, then press Enter to"),
        Line::from("combine them. The results on each side add up to that"),
        Line::from("side's total. Make both totals equal to win."),
        Line::from(""),
        Line::from("Removing a ledger entry (u + its number, or x for the"),
        Line::from("newest) puts its digits back in the pool."),
        Line::from(""),
        Line::from("Check the balance with b when you think you have it."),
        Line::from(""),
        Line::from(Span::styled(
            " [d] Don't show this again   [Esc] Close ",
            Style::default().fg(Color::Gray),
        )),
    ];

    let overlay = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" How to play "))
        .wrap(Wrap { trim: false });

    f.render_widget(overlay, area);
}

fn render_result(f: &mut Frame, app: &App) {
    let area = centered_rect(50, 30, f.area());
    f.render_widget(Clear, area);

    let (left, right) = app.state.totals();
    let mut lines = vec![Line::from("")];

    if app.state.is_balanced() {
        lines.push(Line::from(Span::styled(
            format!("Balanced! Both sides total {left}."),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            format!("Not balanced: Left {left} vs Right {right}."),
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(""));

    let keys = if app.state.is_balanced() {
        " [Enter] Close  [n] New game  [s] Share "
    } else {
        " [Enter] Close  [g] Give up  [n] New game  [s] Share "
    };
    lines.push(Line::from(Span::styled(
        keys,
        Style::default().fg(Color::Gray),
    )));

    let overlay = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Balance result "))
        .wrap(Wrap { trim: false });

    f.render_widget(overlay, area);
}

/// Centered sub-rectangle taking the given percentages of `r`.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
