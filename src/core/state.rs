//! # Application State
//!
//! Core business state for Sakina. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── repository: ContentRepository       // compiled-in passages & messages
//! ├── screen: Screen                      // where the user is
//! ├── selected_emotion: Option<Emotion>   // set on EmotionSelect → OptionSelect
//! ├── selected_category: Option<Category> // set on OptionSelect → ContentView
//! └── status_message: String              // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.
//!
//! The session lives for the whole process: one `App` is created at startup,
//! owned by the event loop, and mutated one action at a time. `ContentView`
//! is only reachable with both selections set; `update` enforces this.

use crate::content::repository::DEFAULT_COMFORT_MESSAGE;
use crate::content::{Category, ContentRepository, Emotion};

/// Welcome text shown on the emotion selection screen.
pub const WELCOME_TEXT: &str =
    "Find comfort through Qur'an, Hadith and Stories — choose how you're feeling";

/// The three screens the user moves between.
///
/// Forward: `EmotionSelect → OptionSelect → ContentView`.
/// Backward transitions retrace the same path, so the machine is a cycle,
/// not a one-way flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    EmotionSelect,
    OptionSelect,
    ContentView,
}

pub struct App {
    pub repository: ContentRepository,
    pub screen: Screen,
    pub selected_emotion: Option<Emotion>,
    pub selected_category: Option<Category>,
    pub status_message: String,
}

impl App {
    pub fn new(repository: ContentRepository) -> Self {
        Self {
            repository,
            screen: Screen::EmotionSelect,
            selected_emotion: None,
            selected_category: None,
            status_message: String::from("Welcome to Sakina!"),
        }
    }

    /// Comfort message for the selected emotion.
    ///
    /// Total: falls back to the repository default when no emotion is
    /// selected, although the view only shows this on `OptionSelect`
    /// where an emotion is always set.
    pub fn comfort_text(&self) -> &'static str {
        match self.selected_emotion {
            Some(e) => self.repository.comfort_message(e),
            None => DEFAULT_COMFORT_MESSAGE,
        }
    }

    /// Header for the content screen: `"{category} — {emotion}"`.
    ///
    /// `None` unless both selections are set (i.e. outside `ContentView`).
    pub fn content_header(&self) -> Option<String> {
        match (self.selected_emotion, self.selected_category) {
            (Some(e), Some(c)) => Some(format!("{c} — {e}")),
            _ => None,
        }
    }

    /// Passage body for the current selection pair.
    ///
    /// Total: the repository substitutes its default for unmapped pairs,
    /// and an incomplete selection (unreachable from `ContentView`) gets
    /// the same fallback.
    pub fn content_body(&self) -> &'static str {
        match (self.selected_emotion, self.selected_category) {
            (Some(e), Some(c)) => self.repository.passage(e, c),
            _ => crate::content::repository::DEFAULT_PASSAGE,
        }
    }

    /// Everything the current screen displays, as one string.
    ///
    /// The TUI renders header and body separately; this combined form is
    /// the screen's canonical text content.
    pub fn display_text(&self) -> String {
        match self.screen {
            Screen::EmotionSelect => WELCOME_TEXT.to_string(),
            Screen::OptionSelect => self.comfort_text().to_string(),
            Screen::ContentView => match self.content_header() {
                Some(header) => format!("{header}\n\n{}", self.content_body()),
                None => self.content_body().to_string(),
            },
        }
    }
}
