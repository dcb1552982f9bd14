use ratatui::style::Style;
use ratatui::text::{Line, Span};
use recon_runtime::session::{Slot, SlotState};

use crate::themes::Theme;

/// Visual state of an upload card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardState {
    Neutral,
    Success,
    Error,
}

/// One of the two file slots shown above the tiles.
pub struct UploadCard<'a> {
    pub slot: Slot,
    pub state: &'a SlotState,
    pub theme: &'a Theme,
}

impl<'a> UploadCard<'a> {
    pub fn new(slot: Slot, state: &'a SlotState, theme: &'a Theme) -> Self {
        Self { slot, state, theme }
    }

    pub fn card_state(&self) -> CardState {
        if self.state.is_loaded() {
            CardState::Success
        } else if self.state.error().is_some() {
            CardState::Error
        } else {
            CardState::Neutral
        }
    }

    /// Block title, e.g. `" YMS Data "`.
    pub fn title(&self) -> String {
        format!(" {} Data ", self.slot.label())
    }

    pub fn border_style(&self) -> Style {
        match self.card_state() {
            CardState::Neutral => self.theme.card_border,
            CardState::Success => self.theme.card_success,
            CardState::Error => self.theme.card_error,
        }
    }

    /// Key that opens the path prompt for this slot.
    pub fn shortcut(&self) -> char {
        match self.slot {
            Slot::Yms => 'y',
            Slot::DockDash => 'd',
        }
    }

    pub fn status_text(&self) -> String {
        if let Some(loaded) = self.state.loaded() {
            loaded.status_line()
        } else if let Some(err) = self.state.error() {
            format!("Failed to load file: {err}")
        } else {
            "No file selected.".to_string()
        }
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let (icon, style) = match self.card_state() {
            CardState::Neutral => ("•", self.theme.dim),
            CardState::Success => ("✔", self.theme.success),
            CardState::Error => ("✖", self.theme.error),
        };

        let mut lines = vec![Line::from(vec![
            Span::styled(format!("{icon} "), style),
            Span::styled(self.status_text(), self.theme.text),
        ])];

        if let Some(loaded) = self.state.loaded() {
            lines.push(Line::from(Span::styled(
                format!("Loaded at {}", loaded.loaded_at.format("%H:%M:%S")),
                self.theme.dim,
            )));
        }

        lines.push(Line::from(vec![
            Span::styled("Press ", self.theme.dim),
            Span::styled(format!("'{}'", self.shortcut()), self.theme.bold),
            Span::styled(" to select a CSV", self.theme.dim),
        ]));
        lines
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
