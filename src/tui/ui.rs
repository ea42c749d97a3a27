//! # Screen Layout
//!
//! Top-level frame composition: one title bar line, then the surface for
//! whichever screen the core says we are on. All data comes from `&App`;
//! this module decides only where things go.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::core::state::{App, Screen, WELCOME_TEXT};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CategoryMenu, EmotionGrid, PassageView, TitleBar};

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [title_area, main_area] = layout.areas(frame.area());

    TitleBar::new(app.status_message.clone(), key_hints(app.screen), tui.theme)
        .render(frame, title_area);

    match app.screen {
        Screen::EmotionSelect => draw_emotion_select(frame, main_area, app, tui),
        Screen::OptionSelect => draw_option_select(frame, main_area, app, tui),
        Screen::ContentView => draw_content_view(frame, main_area, app, tui),
    }
}

/// Key hints shown in the title bar, per screen.
fn key_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::EmotionSelect => "↑↓←→ move · 1-8 pick · Enter select · q quit",
        Screen::OptionSelect => "↑↓ move · Enter select · Esc back · q quit",
        Screen::ContentView => "↑↓ scroll · Esc back · q quit",
    }
}

fn draw_emotion_select(frame: &mut Frame, area: Rect, _app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [welcome_area, subtitle_area, grid_area] =
        Layout::vertical([Length(2), Length(2), Min(0)]).areas(area);

    let welcome = Paragraph::new("Welcome to Sakina").centered().style(
        Style::default()
            .fg(tui.theme.accent)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(welcome, welcome_area);

    let subtitle = Paragraph::new(WELCOME_TEXT)
        .centered()
        .wrap(Wrap { trim: true })
        .style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(subtitle, subtitle_area);

    EmotionGrid::new(&mut tui.emotion_grid, tui.theme).render(frame, grid_area);
}

fn draw_option_select(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [comfort_area, menu_area] = Layout::vertical([Length(3), Min(0)]).areas(area);

    // The comfort message for the chosen emotion, front and center
    let comfort = Paragraph::new(app.comfort_text())
        .centered()
        .wrap(Wrap { trim: true })
        .style(
            Style::default()
                .fg(tui.theme.accent)
                .add_modifier(Modifier::BOLD),
        );
    frame.render_widget(comfort, comfort_area);

    CategoryMenu::new(&mut tui.category_menu, tui.theme).render(frame, menu_area);
}

fn draw_content_view(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let header = app.content_header().unwrap_or_default();
    PassageView::new(&mut tui.passage_view, &header, app.content_body(), tui.theme)
        .render(frame, area);
}
