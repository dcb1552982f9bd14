use ratatui::style::Style;
use ratatui::text::{Line, Span};
use recon_core::models::MetricsReport;
use recon_core::tiles::Tile;

use crate::themes::Theme;

/// Placeholder value before the first reconciliation.
pub const NO_VALUE: &str = "--";

/// A single metric tile: label on top, big value below.
pub struct TileCard<'a> {
    pub tile: Tile,
    pub report: Option<&'a MetricsReport>,
    pub selected: bool,
    pub theme: &'a Theme,
}

impl<'a> TileCard<'a> {
    pub fn new(
        tile: Tile,
        report: Option<&'a MetricsReport>,
        selected: bool,
        theme: &'a Theme,
    ) -> Self {
        Self {
            tile,
            report,
            selected,
            theme,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.report.is_some_and(|r| self.tile.is_critical(r))
    }

    pub fn value_text(&self) -> String {
        match self.report {
            Some(report) => self.tile.value_text(report),
            None => NO_VALUE.to_string(),
        }
    }

    pub fn border_style(&self) -> Style {
        self.theme
            .tile_border_style(self.selected, self.is_critical())
    }

    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let value_style = if self.is_critical() {
            self.theme.tile_critical
        } else {
            self.theme.tile_value
        };
        let marker = if self.selected { "▸ " } else { "" };

        vec![
            Line::from(vec![
                Span::styled(marker, self.theme.tile_selected),
                Span::styled(self.tile.label(), self.theme.label),
            ])
            .centered(),
            Line::from(Span::styled(self.value_text(), value_style)).centered(),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
