//! # Content Repository
//!
//! Two lookup tables served behind a total-function contract:
//!
//! ```text
//! (Emotion, Category) → passage text      (sparse allowed)
//! Emotion             → comfort message   (total for the built-in set)
//! ```
//!
//! Both reads are pure and infallible. A miss returns a fixed default
//! string instead of an error; the view never has to handle a lookup
//! failure. Tables are filled once at construction; nothing downstream
//! of [`App`](crate::core::state::App) can mutate them.

use std::collections::HashMap;

use crate::content::{Category, Emotion};

/// Returned for an (emotion, category) pair with no stored passage.
pub const DEFAULT_PASSAGE: &str = "Content coming soon, inshā'Allāh.";

/// Returned for an emotion with no stored comfort message.
pub const DEFAULT_COMFORT_MESSAGE: &str = "Choose an option";

/// Immutable store of passages and comfort messages.
///
/// All content is `&'static str`: the built-in set is compiled in, and
/// test fixtures use string literals. Lookups borrow, never allocate.
#[derive(Debug, Default)]
pub struct ContentRepository {
    passages: HashMap<(Emotion, Category), &'static str>,
    comfort_messages: HashMap<Emotion, &'static str>,
}

impl ContentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the passage for an (emotion, category) pair.
    pub fn set_passage(&mut self, emotion: Emotion, category: Category, text: &'static str) {
        self.passages.insert((emotion, category), text);
    }

    /// Store the comfort message shown right after an emotion is picked.
    pub fn set_comfort_message(&mut self, emotion: Emotion, text: &'static str) {
        self.comfort_messages.insert(emotion, text);
    }

    /// The passage for a pair, or [`DEFAULT_PASSAGE`] if none is stored.
    pub fn passage(&self, emotion: Emotion, category: Category) -> &'static str {
        self.passages
            .get(&(emotion, category))
            .copied()
            .unwrap_or(DEFAULT_PASSAGE)
    }

    /// The comfort message for an emotion, or [`DEFAULT_COMFORT_MESSAGE`].
    pub fn comfort_message(&self, emotion: Emotion) -> &'static str {
        self.comfort_messages
            .get(&emotion)
            .copied()
            .unwrap_or(DEFAULT_COMFORT_MESSAGE)
    }

    /// Number of stored passages.
    pub fn passage_count(&self) -> usize {
        self.passages.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_repository_serves_defaults() {
        let repo = ContentRepository::new();
        assert_eq!(repo.passage(Emotion::Sad, Category::Ayats), DEFAULT_PASSAGE);
        assert_eq!(repo.comfort_message(Emotion::Sad), DEFAULT_COMFORT_MESSAGE);
    }

    #[test]
    fn test_stored_passage_is_returned() {
        let mut repo = ContentRepository::new();
        repo.set_passage(Emotion::Angry, Category::Stories, "a story about patience");
        assert_eq!(
            repo.passage(Emotion::Angry, Category::Stories),
            "a story about patience"
        );
        // Sibling pairs of the same emotion still fall back
        assert_eq!(repo.passage(Emotion::Angry, Category::Ayats), DEFAULT_PASSAGE);
    }

    #[test]
    fn test_sparse_lookup_never_fails() {
        let mut repo = ContentRepository::new();
        repo.set_passage(Emotion::Hopeful, Category::Ayats, "verse");
        for e in Emotion::ALL {
            for c in Category::ALL {
                // Every pair resolves to something non-empty
                assert!(!repo.passage(e, c).is_empty());
            }
        }
    }

    #[test]
    fn test_comfort_message_overwrite_keeps_latest() {
        let mut repo = ContentRepository::new();
        repo.set_comfort_message(Emotion::Lonely, "first");
        repo.set_comfort_message(Emotion::Lonely, "second");
        assert_eq!(repo.comfort_message(Emotion::Lonely), "second");
    }
}
