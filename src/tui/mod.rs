//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! Swapping it out for a different adapter would leave the core untouched.
//!
//! ## Event Loop
//!
//! The loop uses conditional redraw: draw once, then sleep in
//! `poll_event` (up to 250ms) until something happens. When an event
//! arrives, all pending events are drained before the next draw, so a
//! burst of key presses costs one frame, not one frame each. Every
//! event is handled to completion before the next is looked at, so
//! state transitions stay strictly sequential.

mod component;
mod components;
mod event;
mod theme;
mod ui;

use log::info;

use crate::content::library;
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    CategoryMenuEvent, CategoryMenuState, EmotionGridEvent, EmotionGridState, PassageViewState,
};
use crate::tui::event::{TuiEvent, poll_event, poll_event_immediate};
pub use crate::tui::theme::Theme;

/// TUI-specific presentation state (not part of core business logic)
#[derive(Default)]
pub struct TuiState {
    pub theme: Theme,
    // Persistent component states
    pub emotion_grid: EmotionGridState,
    pub category_menu: CategoryMenuState,
    pub passage_view: PassageViewState,
}

impl TuiState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            emotion_grid: EmotionGridState::new(),
            category_menu: CategoryMenuState::new(),
            passage_view: PassageViewState::new(),
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut app = App::new(library::builtin());
    let mut tui = TuiState::new(Theme::from_config(&config));

    let mut terminal = ratatui::init();
    info!("Terminal initialized");

    let mut needs_redraw = true; // Force first frame

    loop {
        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event();
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // Quit works on every screen
            if matches!(event, TuiEvent::Quit) {
                if update(&mut app, Action::Quit) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // Back retraces the screen cycle; a no-op on the first screen
            if matches!(event, TuiEvent::Back) {
                update(&mut app, Action::GoBack);
                continue;
            }

            // Everything else goes to the focused screen component
            match app.screen {
                Screen::EmotionSelect => {
                    if let Some(EmotionGridEvent::Choose(emotion)) =
                        tui.emotion_grid.handle_event(&event)
                    {
                        update(&mut app, Action::SelectEmotion(emotion));
                        // Fresh cursor for the next screen
                        tui.category_menu = CategoryMenuState::new();
                    }
                }
                Screen::OptionSelect => {
                    if let Some(CategoryMenuEvent::Choose(category)) =
                        tui.category_menu.handle_event(&event)
                    {
                        update(&mut app, Action::SelectCategory(category));
                        // Every passage starts scrolled to the top
                        tui.passage_view = PassageViewState::new();
                    }
                }
                Screen::ContentView => {
                    let _ = tui.passage_view.handle_event(&event);
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    info!("Terminal restored, exiting");
    Ok(())
}
