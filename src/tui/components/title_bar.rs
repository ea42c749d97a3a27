//! # TitleBar Component
//!
//! Single-line top bar: application name and status on the left, key
//! hints for the current screen on the right.
//!
//! Stateless: it receives all data as props and renders what it's given.
//! The status text can contain emoji (the comfort messages do), so the
//! right-alignment padding is computed from display width, not `len()`.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub struct TitleBar {
    pub status_message: String,
    pub key_hints: &'static str,
    pub theme: Theme,
}

impl TitleBar {
    pub fn new(status_message: String, key_hints: &'static str, theme: Theme) -> Self {
        Self {
            status_message,
            key_hints,
            theme,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let left = format!("Sakina | {}", self.status_message);
        let left_width = left.width();
        let hints_width = self.key_hints.width();

        let total = area.width as usize;
        let line = if left_width + hints_width + 1 <= total {
            let pad = total - left_width - hints_width;
            Line::from(vec![
                Span::styled(
                    left,
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" ".repeat(pad)),
                Span::styled(self.key_hints, Style::default().add_modifier(Modifier::DIM)),
            ])
        } else {
            // Too narrow for hints: keep the status, drop the rest
            Line::from(Span::styled(
                left,
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ))
        };

        frame.render_widget(line, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_title_bar_shows_status_and_hints() {
        let backend = TestBackend::new(80, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = TitleBar::new(
            "Welcome to Sakina!".to_string(),
            "q quit",
            Theme::default(),
        );
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Sakina | Welcome to Sakina!"));
        assert!(text.contains("q quit"));
    }

    #[test]
    fn test_title_bar_drops_hints_when_narrow() {
        let backend = TestBackend::new(30, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = TitleBar::new(
            "Feeling Stressed".to_string(),
            "↑↓ move · Enter select · Esc back · q quit",
            Theme::default(),
        );
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Feeling Stressed"));
        assert!(!text.contains("Enter select"));
    }

    #[test]
    fn test_emoji_status_fits_width_budget() {
        // 💖 is two cells wide; padding must account for that
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut bar = TitleBar::new("Comfort 💖".to_string(), "q quit", Theme::default());
        terminal.draw(|f| bar.render(f, f.area())).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Comfort"));
        assert!(text.trim_end().ends_with("q quit"));
    }
}
