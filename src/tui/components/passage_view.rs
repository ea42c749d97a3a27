//! # Passage View Component
//!
//! Third screen: the passage for the chosen (emotion, category) pair,
//! under a `"{category} — {emotion}"` header. The body is wrapped to the
//! viewport width and scrollable; some passages carry several lines of
//! Arabic, transliteration and attribution.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `PassageViewState` (scroll offset) lives in `TuiState` and is reset
//!   whenever a new passage is entered
//! - `PassageView` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Scroll state for the passage body.
#[derive(Default)]
pub struct PassageViewState {
    pub scroll_state: ScrollViewState,
}

impl PassageViewState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for PassageViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<()> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => return None,
        }
        None
    }
}

/// Transient render wrapper for the passage screen.
pub struct PassageView<'a> {
    state: &'a mut PassageViewState,
    header: &'a str,
    body: &'a str,
    theme: Theme,
}

impl<'a> PassageView<'a> {
    pub fn new(state: &'a mut PassageViewState, header: &'a str, body: &'a str, theme: Theme) -> Self {
        Self {
            state,
            header,
            body,
            theme,
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area] =
            Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(area);

        let header = Paragraph::new(self.header)
            .centered()
            .style(
                Style::default()
                    .fg(self.theme.accent)
                    .add_modifier(Modifier::BOLD),
            );
        frame.render_widget(header, header_area);

        // Reserve one column for the scrollbar
        let content_width = body_area.width.saturating_sub(1);
        if content_width == 0 || body_area.height == 0 {
            return;
        }

        let lines: Vec<Line> = self
            .body
            .lines()
            .flat_map(|raw| {
                if raw.is_empty() {
                    vec![Line::raw("")]
                } else {
                    textwrap::wrap(raw, content_width as usize)
                        .into_iter()
                        .map(|cow| Line::raw(cow.into_owned()))
                        .collect()
                }
            })
            .collect();

        let height = lines.len() as u16;
        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Always)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let body = Paragraph::new(lines).style(Style::default().fg(self.theme.text));
        scroll_view.render_widget(body, Rect::new(0, 0, content_width, height));

        frame.render_stateful_widget(scroll_view, body_area, &mut self.state.scroll_state);
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
    fn test_render_shows_header_and_body() {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PassageViewState::new();
        terminal
            .draw(|f| {
                PassageView::new(
                    &mut state,
                    "Hadiths — Sad",
                    "Patience is light.",
                    Theme::default(),
                )
                .render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Hadiths — Sad"));
        assert!(text.contains("Patience is light."));
    }

    #[test]
    fn test_long_body_wraps_instead_of_truncating() {
        let backend = TestBackend::new(30, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PassageViewState::new();
        let body = "a phrase repeated over and over until it can no longer fit on one line";
        terminal
            .draw(|f| {
                PassageView::new(&mut state, "Stories — Lonely", body, Theme::default())
                    .render(f, f.area());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        // The tail of the sentence survives wrapping
        assert!(text.contains("one line"));
    }

    #[test]
    fn test_scroll_events_move_offset() {
        let mut state = PassageViewState::new();
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.scroll_state.offset().y, 1);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.scroll_state.offset().y, 0);
        // Scrolling above the top saturates
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.scroll_state.offset().y, 0);
    }

    #[test]
    fn test_zero_sized_area_is_harmless() {
        let backend = TestBackend::new(1, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = PassageViewState::new();
        terminal
            .draw(|f| {
                PassageView::new(&mut state, "h", "b", Theme::default()).render(f, f.area());
            })
            .unwrap();
    }
}
