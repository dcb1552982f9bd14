//! Single-line path prompt used to pick an export file.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use recon_runtime::session::Slot;
use unicode_width::UnicodeWidthStr;

use crate::themes::Theme;

/// What the prompt wants the caller to do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Keep editing.
    Pending,
    /// Close without loading anything.
    Cancel,
    Submit(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPrompt {
    pub slot: Slot,
    pub input: String,
}

impl PathPrompt {
    pub fn new(slot: Slot) -> Self {
        Self {
            slot,
            input: String::new(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PromptAction {
        match key.code {
            KeyCode::Esc => PromptAction::Cancel,
            KeyCode::Enter => {
                let trimmed = self.input.trim();
                if trimmed.is_empty() {
                    PromptAction::Cancel
                } else {
                    PromptAction::Submit(PathBuf::from(trimmed))
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                PromptAction::Pending
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                PromptAction::Pending
            }
            _ => PromptAction::Pending,
        }
    }

    pub fn title(&self) -> String {
        format!(" Select {} CSV ", self.slot.label())
    }

    /// Display width of the typed text, used to place the cursor.
    pub fn cursor_offset(&self) -> u16 {
        u16::try_from(self.input.width()).unwrap_or(u16::MAX)
    }
}

/// Draw the prompt as a three-row box centred horizontally in `area`.
pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: &PathPrompt, theme: &Theme) {
    let width = area.width.saturating_sub(4).clamp(20, 80).min(area.width);
    let height = 4.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(Span::styled(prompt.input.clone(), theme.prompt_input)),
        Line::from(Span::styled("Enter to load, Esc to cancel", theme.dim)),
    ];

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.prompt_border)
                .title(prompt.title()),
        ),
        popup,
    );

    let inner_width = popup.width.saturating_sub(2);
    if inner_width > 0 && popup.height > 2 {
        let x = popup.x + 1 + prompt.cursor_offset().min(inner_width - 1);
        frame.set_cursor_position((x, popup.y + 1));
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_text(prompt: &mut PathPrompt, text: &str) {
        for c in text.chars() {
            assert_eq!(prompt.handle_key(key(KeyCode::Char(c))), PromptAction::Pending);
        }
    }

    #[test]
    fn test_typing_and_submit() {
        let mut prompt = PathPrompt::new(Slot::Yms);
        type_text(&mut prompt, " /tmp/yms.csv ");
        assert_eq!(
            prompt.handle_key(key(KeyCode::Enter)),
            PromptAction::Submit(PathBuf::from("/tmp/yms.csv"))
        );
    }

    #[test]
    fn test_backspace() {
        let mut prompt = PathPrompt::new(Slot::DockDash);
        type_text(&mut prompt, "abc");
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.input, "ab");
        prompt.handle_key(key(KeyCode::Backspace));
        prompt.handle_key(key(KeyCode::Backspace));
        prompt.handle_key(key(KeyCode::Backspace));
        assert_eq!(prompt.input, "");
    }

    #[test]
    fn test_escape_and_empty_enter_cancel() {
        let mut prompt = PathPrompt::new(Slot::Yms);
        type_text(&mut prompt, "x.csv");
        assert_eq!(prompt.handle_key(key(KeyCode::Esc)), PromptAction::Cancel);

        let mut prompt = PathPrompt::new(Slot::Yms);
        type_text(&mut prompt, "   ");
        assert_eq!(prompt.handle_key(key(KeyCode::Enter)), PromptAction::Cancel);
    }

    #[test]
    fn test_cursor_offset_uses_display_width() {
        let mut prompt = PathPrompt::new(Slot::Yms);
        type_text(&mut prompt, "資料.csv");
        assert_eq!(prompt.cursor_offset(), 8);
    }

    #[test]
    fn test_title() {
        assert_eq!(PathPrompt::new(Slot::DockDash).title(), " Select Dock Dash CSV ");
    }

    #[test]
    fn test_render_prompt_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let theme = Theme::dark();
        let mut prompt = PathPrompt::new(Slot::Yms);
        type_text(&mut prompt, "/very/long/path/".repeat(10).as_str());
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_prompt(frame, area, &prompt, &theme);
            })
            .unwrap();
    }

    #[test]
    fn test_render_prompt_tiny_area_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 2)).unwrap();
        let theme = Theme::classic();
        let prompt = PathPrompt::new(Slot::Yms);
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_prompt(frame, area, &prompt, &theme);
            })
            .unwrap();
    }
}
