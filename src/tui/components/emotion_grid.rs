//! # Emotion Grid Component
//!
//! The first screen's selection surface: the eight emotions in a
//! two-column grid of bordered cells, navigated with the arrow keys
//! (or picked directly with 1-8).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `EmotionGridState` lives in `TuiState`
//! - `EmotionGrid` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::content::Emotion;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

const COLUMNS: usize = 2;
const CELL_WIDTH: u16 = 18;
const CELL_HEIGHT: u16 = 3;

/// Persistent cursor state for the emotion grid.
pub struct EmotionGridState {
    pub selected: usize,
}

impl Default for EmotionGridState {
    fn default() -> Self {
        Self::new()
    }
}

impl EmotionGridState {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    fn move_left(&mut self) {
        if self.selected % COLUMNS > 0 {
            self.selected -= 1;
        }
    }

    fn move_right(&mut self) {
        if self.selected % COLUMNS < COLUMNS - 1 && self.selected + 1 < Emotion::ALL.len() {
            self.selected += 1;
        }
    }

    fn move_up(&mut self) {
        if self.selected >= COLUMNS {
            self.selected -= COLUMNS;
        }
    }

    fn move_down(&mut self) {
        if self.selected + COLUMNS < Emotion::ALL.len() {
            self.selected += COLUMNS;
        }
    }
}

impl EventHandler for EmotionGridState {
    type Event = EmotionGridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<EmotionGridEvent> {
        match event {
            TuiEvent::CursorLeft => {
                self.move_left();
                None
            }
            TuiEvent::CursorRight => {
                self.move_right();
                None
            }
            TuiEvent::CursorUp => {
                self.move_up();
                None
            }
            TuiEvent::CursorDown => {
                self.move_down();
                None
            }
            TuiEvent::Digit(d) => {
                let index = (*d as usize).checked_sub(1)?;
                let emotion = *Emotion::ALL.get(index)?;
                self.selected = index;
                Some(EmotionGridEvent::Choose(emotion))
            }
            TuiEvent::Submit => Some(EmotionGridEvent::Choose(Emotion::ALL[self.selected])),
            _ => None,
        }
    }
}

/// Events emitted by the emotion grid.
pub enum EmotionGridEvent {
    Choose(Emotion),
}

/// Transient render wrapper for the emotion grid.
pub struct EmotionGrid<'a> {
    state: &'a mut EmotionGridState,
    theme: Theme,
}

impl<'a> EmotionGrid<'a> {
    pub fn new(state: &'a mut EmotionGridState, theme: Theme) -> Self {
        Self { state, theme }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let row_count = Emotion::ALL.len().div_ceil(COLUMNS);
        let rows = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); row_count])
            .flex(Flex::Center)
            .split(area);

        for (row_index, row_area) in rows.iter().enumerate() {
            let cells = Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); COLUMNS])
                .flex(Flex::Center)
                .split(*row_area);

            for (col_index, cell_area) in cells.iter().enumerate() {
                let index = row_index * COLUMNS + col_index;
                let Some(emotion) = Emotion::ALL.get(index) else {
                    continue;
                };

                let is_selected = index == self.state.selected;
                let (label_style, border_style) = if is_selected {
                    (
                        Style::default()
                            .fg(self.theme.highlight)
                            .add_modifier(Modifier::BOLD),
                        Style::default().fg(self.theme.highlight),
                    )
                } else {
                    (
                        Style::default(),
                        Style::default()
                            .fg(self.theme.accent)
                            .add_modifier(Modifier::DIM),
                    )
                };

                let cell = Paragraph::new(emotion.label())
                    .centered()
                    .style(label_style)
                    .block(Block::bordered().border_style(border_style));
                frame.render_widget(cell, *cell_area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_cursor_moves_within_grid() {
        let mut state = EmotionGridState::new();
        state.handle_event(&TuiEvent::CursorRight);
        assert_eq!(state.selected, 1);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, 3);
        state.handle_event(&TuiEvent::CursorLeft);
        assert_eq!(state.selected, 2);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_cursor_clamps_at_edges() {
        let mut state = EmotionGridState::new();
        state.handle_event(&TuiEvent::CursorLeft);
        state.handle_event(&TuiEvent::CursorUp);
        assert_eq!(state.selected, 0);

        state.selected = Emotion::ALL.len() - 1;
        state.handle_event(&TuiEvent::CursorRight);
        state.handle_event(&TuiEvent::CursorDown);
        assert_eq!(state.selected, Emotion::ALL.len() - 1);
    }

    #[test]
    fn test_submit_chooses_selected_emotion() {
        let mut state = EmotionGridState::new();
        state.selected = 2;
        let event = state.handle_event(&TuiEvent::Submit);
        assert!(matches!(
            event,
            Some(EmotionGridEvent::Choose(Emotion::Grateful))
        ));
    }

    #[test]
    fn test_digit_quick_select() {
        let mut state = EmotionGridState::new();
        let event = state.handle_event(&TuiEvent::Digit(8));
        assert!(matches!(
            event,
            Some(EmotionGridEvent::Choose(Emotion::Hopeful))
        ));
        assert_eq!(state.selected, 7);

        // A digit past the grid is ignored
        assert!(state.handle_event(&TuiEvent::Digit(9)).is_none());
    }

    #[test]
    fn test_render_shows_all_emotions() {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = EmotionGridState::new();
        terminal
            .draw(|f| {
                EmotionGrid::new(&mut state, Theme::default()).render(f, f.area());
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        for emotion in Emotion::ALL {
            assert!(text.contains(emotion.label()), "missing {emotion}");
        }
    }
}
