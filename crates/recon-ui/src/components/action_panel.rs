use ratatui::text::{Line, Span};
use recon_runtime::status::{ActionStatus, Tone};

use crate::themes::Theme;

/// Status line under the upload cards.
pub struct ActionPanel<'a> {
    pub status: &'a ActionStatus,
    pub theme: &'a Theme,
}

impl<'a> ActionPanel<'a> {
    pub fn new(status: &'a ActionStatus, theme: &'a Theme) -> Self {
        Self { status, theme }
    }

    pub fn icon(&self) -> &'static str {
        match self.status.tone() {
            Tone::Neutral => "ℹ",
            Tone::Success => "✅",
            Tone::Critical => "🚨",
            Tone::Error => "❌",
        }
    }

    pub fn to_line(&self) -> Line<'a> {
        let style = self.theme.tone_style(self.status.tone());
        Line::from(vec![
            Span::raw(format!("{} ", self.icon())),
            Span::styled(self.status.message(), style),
        ])
    }
}
