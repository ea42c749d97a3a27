//! # Category Menu Component
//!
//! Second screen: pick what kind of text to read for the chosen emotion.
//! A three-entry list rendered in a centered box, below the comfort
//! message header drawn by `ui::draw_ui`.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `CategoryMenuState` lives in `TuiState`
//! - `CategoryMenu` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding};

use crate::content::Category;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Persistent state for the category menu.
pub struct CategoryMenuState {
    pub selected: usize,
    pub list_state: ListState,
}

impl Default for CategoryMenuState {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryMenuState {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            selected: 0,
            list_state,
        }
    }
}

impl EventHandler for CategoryMenuState {
    type Event = CategoryMenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<CategoryMenuEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::CursorDown => {
                self.selected = (self.selected + 1).min(Category::ALL.len() - 1);
                self.list_state.select(Some(self.selected));
                None
            }
            TuiEvent::Digit(d) => {
                let index = (*d as usize).checked_sub(1)?;
                let category = *Category::ALL.get(index)?;
                self.selected = index;
                self.list_state.select(Some(index));
                Some(CategoryMenuEvent::Choose(category))
            }
            TuiEvent::Submit => Some(CategoryMenuEvent::Choose(Category::ALL[self.selected])),
            _ => None,
        }
    }
}

/// Events emitted by the category menu.
pub enum CategoryMenuEvent {
    Choose(Category),
}

/// Transient render wrapper for the category menu.
pub struct CategoryMenu<'a> {
    state: &'a mut CategoryMenuState,
    theme: Theme,
}

impl<'a> CategoryMenu<'a> {
    pub fn new(state: &'a mut CategoryMenuState, theme: Theme) -> Self {
        Self { state, theme }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let box_height = Category::ALL.len() as u16 + 2; // entries + borders
        let [box_area] = Layout::vertical([Constraint::Length(box_height)])
            .flex(Flex::Center)
            .areas(area);
        let [box_area] = Layout::horizontal([Constraint::Length(44)])
            .flex(Flex::Center)
            .areas(box_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(" What would you like to read? ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter Select  Esc Back ").centered())
            .padding(Padding::horizontal(1));

        let items: Vec<ListItem> = Category::ALL
            .iter()
            .enumerate()
            .map(|(i, category)| {
                let style = if i == self.state.selected {
                    Style::default()
                        .fg(self.theme.highlight)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default()
                };
                let name = format!("{:<10}", category.label());
                let spans = vec![
                    Span::styled(name, style),
                    Span::styled(
                        category.description(),
                        if i == self.state.selected {
                            style
                        } else {
                            Style::default().add_modifier(Modifier::DIM)
                        },
                    ),
                ];
                ListItem::new(Line::from(spans))
            })
            .collect();

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, box_area, &mut self.state.list_state);
    }
}
