use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative marks placed either side of the application title.
pub const ACCENT: &str = "▪ ▫ ▪";

/// Dashboard header rendering three lines:
///
/// 1. Application title with accents (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. `Version: x.y.z`.
pub struct Header<'a> {
    /// Packaged version string, e.g. `"1.2.0"`.
    pub version: &'a str,
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    pub fn new(version: &'a str, theme: &'a Theme) -> Self {
        Self { version, theme }
    }

    /// Render the header as exactly three lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(ACCENT, self.theme.header_accent),
                Span::styled(" YARD RECONCILER ", self.theme.header),
                Span::styled(ACCENT, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("Version: ", self.theme.label),
                Span::styled(self.version, self.theme.dim),
            ]),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_header_to_lines_count() {
        let theme = Theme::dark();
        let lines = Header::new("1.2.0", &theme).to_lines();
        assert_eq!(lines.len(), 3, "header must produce exactly 3 lines");
    }

    #[test]
    fn test_header_title_line_content() {
        let theme = Theme::dark();
        let lines = Header::new("1.2.0", &theme).to_lines();
        let title = line_text(&lines[0]);
        assert!(title.contains("YARD RECONCILER"), "got: {title}");
        assert!(title.starts_with(ACCENT));
    }

    #[test]
    fn test_header_separator_line() {
        let theme = Theme::dark();
        let lines = Header::new("1.2.0", &theme).to_lines();
        let sep = line_text(&lines[1]);
        assert_eq!(sep.chars().count(), 60);
        assert!(sep.chars().all(|c| c == '='));
    }

    #[test]
    fn test_header_version_line() {
        let theme = Theme::light();
        let lines = Header::new("0.9.1", &theme).to_lines();
        assert_eq!(line_text(&lines[2]), "Version: 0.9.1");
    }
}
