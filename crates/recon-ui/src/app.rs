//! Application state and TUI event loop for the yard reconciler.
//!
//! [`App`] owns the theme, the current screen mode and the clipboard sink.
//! Key presses are turned into [`Command`]s by [`App::handle_key`] and
//! executed against the [`ReconSession`] by [`App::apply`]; the event loop in
//! [`App::run`] only glues the two to the terminal.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use recon_core::tiles::Tile;
use recon_runtime::clipboard::ClipboardSink;
use recon_runtime::session::{DetailLookup, ReconSession, Slot};

use crate::dashboard::{self, DashboardView, TILE_COLUMNS};
use crate::detail_view;
use crate::prompt::{self, PathPrompt, PromptAction};
use crate::themes::Theme;

pub const COPIED: &str = "Summary copied to clipboard.";
pub const NOTHING_TO_COPY: &str = "Nothing to copy yet. Reconcile first.";
pub const NO_CLIPBOARD: &str = "Clipboard is disabled.";
pub const YMS_FIRST: &str = "Load the YMS file first.";

// ── Mode / Command ────────────────────────────────────────────────────────────

/// Which screen has keyboard focus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Dashboard,
    /// Detail table for a tile, scrolled to `offset`.
    Detail { tile: Tile, offset: usize },
    Prompt(PathPrompt),
}

/// Work requested by a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Load(Slot, PathBuf),
    Reconcile,
    CopySummary,
    Quit,
}

// ── App ───────────────────────────────────────────────────────────────────────

pub struct App {
    pub theme: Theme,
    /// Shown in the header.
    pub version: String,
    pub mode: Mode,
    pub selected: Tile,
    pub notice: Option<String>,
    /// Send the summary to the clipboard after each successful run.
    pub copy_on_reconcile: bool,
    pub should_quit: bool,
    clipboard: Option<Box<dyn ClipboardSink>>,
}

impl App {
    pub fn new(theme_name: &str, version: impl Into<String>) -> Self {
        Self {
            theme: Theme::from_name(theme_name),
            version: version.into(),
            mode: Mode::Dashboard,
            selected: Tile::ALL[0],
            notice: None,
            copy_on_reconcile: true,
            should_quit: false,
            clipboard: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: Box<dyn ClipboardSink>) -> Self {
        self.clipboard = Some(clipboard);
        self
    }

    pub fn with_copy_on_reconcile(mut self, enabled: bool) -> Self {
        self.copy_on_reconcile = enabled;
        self
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the dashboard until the user quits, returning the final session.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so the loop stays
    /// on the current thread; file loads are awaited inline.
    pub async fn run(mut self, mut session: ReconSession) -> io::Result<ReconSession> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            if let Err(e) = terminal.draw(|frame| self.render(frame, &session)) {
                break Err(e);
            }

            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                        if let Some(command) = self.handle_key(key, &session) {
                            self.apply(command, &mut session).await;
                        }
                    }
                    Ok(_) => {}
                    Err(e) => break Err(e),
                },
                Ok(false) => {}
                Err(e) => break Err(e),
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result.map(|()| session)
    }

    // ── Input ─────────────────────────────────────────────────────────────────

    /// Update UI state for `key` and return any work for the session.
    pub fn handle_key(&mut self, key: KeyEvent, session: &ReconSession) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        match &mut self.mode {
            Mode::Prompt(prompt) => match prompt.handle_key(key) {
                PromptAction::Pending => None,
                PromptAction::Cancel => {
                    self.mode = Mode::Dashboard;
                    None
                }
                PromptAction::Submit(path) => {
                    let slot = prompt.slot;
                    self.mode = Mode::Dashboard;
                    Some(Command::Load(slot, path))
                }
            },
            Mode::Detail { tile, offset } => {
                let len = match session.detail(*tile) {
                    DetailLookup::Records(records) => records.len(),
                    DetailLookup::NoRecords => 0,
                };
                match key.code {
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
                        self.mode = Mode::Dashboard;
                    }
                    KeyCode::Up => *offset = offset.saturating_sub(1),
                    KeyCode::Down => *offset = (*offset + 1).min(len.saturating_sub(1)),
                    KeyCode::PageUp => *offset = offset.saturating_sub(10),
                    KeyCode::PageDown => *offset = (*offset + 10).min(len.saturating_sub(1)),
                    KeyCode::Home => *offset = 0,
                    KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
                    _ => {}
                }
                None
            }
            Mode::Dashboard => self.handle_dashboard_key(key, session),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent, session: &ReconSession) -> Option<Command> {
        self.notice = None;
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                self.mode = Mode::Prompt(PathPrompt::new(Slot::Yms));
            }
            KeyCode::Char('d') | KeyCode::Char('D') => {
                if session.slot(Slot::Yms).is_loaded() {
                    self.mode = Mode::Prompt(PathPrompt::new(Slot::DockDash));
                } else {
                    self.notice = Some(YMS_FIRST.to_string());
                }
            }
            KeyCode::Char('r') | KeyCode::Char('R') => return Some(Command::Reconcile),
            KeyCode::Char('c') | KeyCode::Char('C') => return Some(Command::CopySummary),
            KeyCode::Right | KeyCode::Tab => self.selected = self.selected.next(),
            KeyCode::Left | KeyCode::BackTab => self.selected = self.selected.previous(),
            KeyCode::Up => {
                let idx = self.selected.index();
                if idx >= TILE_COLUMNS {
                    self.selected = Tile::ALL[idx - TILE_COLUMNS];
                }
            }
            KeyCode::Down => {
                let idx = (self.selected.index() + TILE_COLUMNS).min(Tile::ALL.len() - 1);
                self.selected = Tile::ALL[idx];
            }
            KeyCode::Enter => {
                self.mode = Mode::Detail {
                    tile: self.selected,
                    offset: 0,
                };
            }
            _ => {}
        }
        None
    }

    // ── Commands ──────────────────────────────────────────────────────────────

    /// Execute `command` against `session`.  Failures end up in the session
    /// status or the notice line; nothing here is fatal.
    pub async fn apply(&mut self, command: Command, session: &mut ReconSession) {
        match command {
            Command::Quit => self.should_quit = true,
            Command::Load(slot, path) => {
                // The upload card reports the outcome.
                let _ = session.load(slot, &path).await;
            }
            Command::Reconcile => {
                if session.reconcile().is_ok() && self.copy_on_reconcile {
                    self.copy_summary(session);
                }
            }
            Command::CopySummary => self.copy_summary(session),
        }
    }

    fn copy_summary(&mut self, session: &ReconSession) {
        let Some(sink) = self.clipboard.as_mut() else {
            self.notice = Some(NO_CLIPBOARD.to_string());
            return;
        };
        self.notice = Some(match session.copy_last_summary(&mut **sink) {
            Ok(true) => COPIED.to_string(),
            Ok(false) => NOTHING_TO_COPY.to_string(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy summary to clipboard");
                format!("Clipboard copy failed: {e}")
            }
        });
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, session: &ReconSession) {
        let area = frame.area();
        let view = DashboardView {
            version: &self.version,
            selected: self.selected,
            notice: self.notice.as_deref(),
            theme: &self.theme,
        };
        dashboard::render_dashboard(frame, area, session, &view);

        match &self.mode {
            Mode::Dashboard => {}
            Mode::Detail { tile, offset } => {
                let overlay = inset(area, 4, 2);
                detail_view::render_detail_view(
                    frame,
                    overlay,
                    *tile,
                    session.detail(*tile),
                    *offset,
                    &self.theme,
                );
            }
            Mode::Prompt(path_prompt) => {
                prompt::render_prompt(frame, area, path_prompt, &self.theme);
            }
        }
    }
}

fn inset(area: ratatui::layout::Rect, dx: u16, dy: u16) -> ratatui::layout::Rect {
    let dx = dx.min(area.width / 2);
    let dy = dy.min(area.height / 2);
    ratatui::layout::Rect {
        x: area.x + dx,
        y: area.y + dy,
        width: area.width - 2 * dx,
        height: area.height - 2 * dy,
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
