use ratatui::style::{Color, Modifier, Style};
use recon_runtime::status::Tone;

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`.  Background values
/// 0–6 are considered dark; 7–15 are considered light.  If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Every style used by the dashboard widgets.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_accent: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub success: Style,
    pub warning: Style,
    pub error: Style,

    // ── Upload cards ─────────────────────────────────────────────────────────
    pub card_border: Style,
    pub card_success: Style,
    pub card_error: Style,

    // ── Tiles ────────────────────────────────────────────────────────────────
    pub tile_border: Style,
    /// Border of the tile under the cursor.
    pub tile_selected: Style,
    /// Value and border of a tile flagged critical.
    pub tile_critical: Style,
    pub tile_value: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,

    // ── Prompt ───────────────────────────────────────────────────────────────
    pub prompt_border: Style,
    pub prompt_input: Style,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            card_border: Style::default().fg(Color::DarkGray),
            card_success: Style::default().fg(Color::Green),
            card_error: Style::default().fg(Color::Red),

            tile_border: Style::default().fg(Color::DarkGray),
            tile_selected: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            tile_critical: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            tile_value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),

            prompt_border: Style::default().fg(Color::Yellow),
            prompt_input: Style::default().fg(Color::White),
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text and bright accent colours so that content
    /// remains legible against a white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_accent: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            card_border: Style::default().fg(Color::Gray),
            card_success: Style::default().fg(Color::Green),
            card_error: Style::default().fg(Color::Red),

            tile_border: Style::default().fg(Color::Gray),
            tile_selected: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            tile_critical: Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
            tile_value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),

            prompt_border: Style::default().fg(Color::Magenta),
            prompt_input: Style::default().fg(Color::Black),
        }
    }

    /// Classic terminal theme using only the basic 8-colour ANSI palette.
    ///
    /// No bold modifiers, for minimal terminal emulators.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_accent: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            success: Style::default().fg(Color::Green),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            card_border: Style::default().fg(Color::DarkGray),
            card_success: Style::default().fg(Color::Green),
            card_error: Style::default().fg(Color::Red),

            tile_border: Style::default().fg(Color::DarkGray),
            tile_selected: Style::default().fg(Color::Cyan),
            tile_critical: Style::default().fg(Color::Red),
            tile_value: Style::default().fg(Color::White),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),

            prompt_border: Style::default().fg(Color::Yellow),
            prompt_input: Style::default().fg(Color::White),
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name.  Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Style for action-panel text of the given tone.
    pub fn tone_style(&self, tone: Tone) -> Style {
        match tone {
            Tone::Neutral => self.info,
            Tone::Success => self.success,
            Tone::Critical => self.tile_critical,
            Tone::Error => self.error,
        }
    }

    /// Border style of a tile.  Critical wins over selection so the alert
    /// stays visible while the cursor sits on it.
    pub fn tile_border_style(&self, selected: bool, critical: bool) -> Style {
        if critical {
            self.tile_critical
        } else if selected {
            self.tile_selected
        } else {
            self.tile_border
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        assert_eq!(t.header.fg, Some(Color::Cyan));
        assert_eq!(t.success.fg, Some(Color::Green));
        assert_eq!(t.error.fg, Some(Color::Red));
        assert_eq!(t.tile_critical.fg, Some(Color::Red));
        assert_eq!(t.tile_selected.fg, Some(Color::Cyan));
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.header.fg, Some(Color::Blue));
        assert_eq!(t.text.fg, Some(Color::Black));
        assert_eq!(t.table_row.fg, Some(Color::Black));
        assert_eq!(t.tile_selected.fg, Some(Color::Blue));
    }

    #[test]
    fn test_classic_theme_has_no_bold() {
        let t = Theme::classic();
        assert!(!t.bold.add_modifier.contains(Modifier::BOLD));
        assert!(!t.header.add_modifier.contains(Modifier::BOLD));
        assert!(!t.tile_critical.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark").header.fg, Some(Color::Cyan));
        assert_eq!(Theme::from_name("light").header.fg, Some(Color::Blue));
        assert!(Theme::from_name("does-not-exist").header.fg.is_some());
    }

    #[test]
    fn test_tone_style() {
        let t = Theme::dark();
        assert_eq!(t.tone_style(Tone::Neutral).fg, Some(Color::Cyan));
        assert_eq!(t.tone_style(Tone::Success).fg, Some(Color::Green));
        assert_eq!(t.tone_style(Tone::Critical).fg, Some(Color::Red));
        assert_eq!(t.tone_style(Tone::Error).fg, Some(Color::Red));
    }

    #[test]
    fn test_tile_border_style_precedence() {
        let t = Theme::dark();
        assert_eq!(t.tile_border_style(false, false), t.tile_border);
        assert_eq!(t.tile_border_style(true, false), t.tile_selected);
        assert_eq!(t.tile_border_style(true, true), t.tile_critical);
        assert_eq!(t.tile_border_style(false, true), t.tile_critical);
    }
}
