//! # Actions
//!
//! Everything that can happen in Sakina becomes an `Action`.
//! User picks "Sad"? That's `Action::SelectEmotion(Emotion::Sad)`.
//! User presses Esc? That's `Action::GoBack`.
//!
//! The `update()` function takes the current state and an action, then
//! mutates the state. No side effects here. I/O happens elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State
//! ```
//!
//! This makes everything testable: drive the whole navigation flow with
//! plain function calls, no terminal required.
//!
//! ## Transition table
//!
//! | Screen        | Action            | Next screen   | Side effect                 |
//! |---------------|-------------------|---------------|-----------------------------|
//! | any           | SelectEmotion(e)  | OptionSelect  | set emotion, clear category |
//! | OptionSelect  | SelectCategory(c) | ContentView   | set category                |
//! | OptionSelect  | GoBack            | EmotionSelect | clear emotion               |
//! | ContentView   | GoBack            | OptionSelect  | clear category              |
//! | EmotionSelect | GoBack            | EmotionSelect | none                        |

use log::{debug, warn};

use crate::content::{Category, Emotion};
use crate::core::state::{App, Screen};

/// A state transition request, dispatched by the view layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// The user picked an emotion. Valid from any screen.
    SelectEmotion(Emotion),
    /// The user picked a content category. Only meaningful once an
    /// emotion is selected.
    SelectCategory(Category),
    /// One step back along the screen cycle. No-op on the first screen.
    GoBack,
    /// Leave the application.
    Quit,
}

/// What the event loop should do after a state update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

/// Apply an action to the state. The only place `App` is mutated.
pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?} on {:?}", action, app.screen);
    match action {
        Action::SelectEmotion(emotion) => {
            app.selected_emotion = Some(emotion);
            app.selected_category = None;
            app.screen = Screen::OptionSelect;
            app.status_message = format!("Feeling {emotion}");
            Effect::None
        }
        Action::SelectCategory(category) => {
            // The view never offers categories before an emotion is picked,
            // so this branch is a caller bug. Stay put rather than enter
            // ContentView with half a selection.
            if app.selected_emotion.is_none() {
                warn!("SelectCategory({category}) with no emotion selected; ignoring");
                return Effect::None;
            }
            app.selected_category = Some(category);
            app.screen = Screen::ContentView;
            Effect::None
        }
        Action::GoBack => {
            match app.screen {
                Screen::ContentView => {
                    app.selected_category = None;
                    app.screen = Screen::OptionSelect;
                }
                Screen::OptionSelect => {
                    app.selected_emotion = None;
                    app.screen = Screen::EmotionSelect;
                    app.status_message = String::from("Welcome to Sakina!");
                }
                Screen::EmotionSelect => {}
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}
