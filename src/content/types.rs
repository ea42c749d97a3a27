//! # Content Domain Types
//!
//! The two closed enumerations everything else is keyed on. Both sets are
//! fixed at compile time: the view renders one button per variant, the
//! repository is keyed on the pair, and the reducer carries them in actions.

use std::fmt;

/// A user-selectable emotional state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emotion {
    Sad,
    Stressed,
    Grateful,
    Depressed,
    Anxious,
    Angry,
    Lonely,
    Hopeful,
}

impl Emotion {
    /// All emotions, in the order the selection grid presents them.
    pub const ALL: [Emotion; 8] = [
        Emotion::Sad,
        Emotion::Stressed,
        Emotion::Grateful,
        Emotion::Depressed,
        Emotion::Anxious,
        Emotion::Angry,
        Emotion::Lonely,
        Emotion::Hopeful,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Emotion::Sad => "Sad",
            Emotion::Stressed => "Stressed",
            Emotion::Grateful => "Grateful",
            Emotion::Depressed => "Depressed",
            Emotion::Anxious => "Anxious",
            Emotion::Angry => "Angry",
            Emotion::Lonely => "Lonely",
            Emotion::Hopeful => "Hopeful",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A content category: what kind of text the user wants to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Qur'anic verses.
    Ayats,
    /// Sayings of the Prophet ﷺ.
    Hadiths,
    /// Short narratives from the tradition.
    Stories,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 3] = [Category::Ayats, Category::Hadiths, Category::Stories];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Ayats => "Ayats",
            Category::Hadiths => "Hadiths",
            Category::Stories => "Stories",
        }
    }

    /// One-line gloss shown next to the label in the category menu.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Ayats => "verses from the Qur'an",
            Category::Hadiths => "sayings of the Prophet ﷺ",
            Category::Stories => "narratives from the tradition",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emotion_all_is_distinct() {
        for (i, a) in Emotion::ALL.iter().enumerate() {
            for b in &Emotion::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_labels_are_nonempty() {
        for e in Emotion::ALL {
            assert!(!e.label().is_empty());
        }
        for c in Category::ALL {
            assert!(!c.label().is_empty());
        }
    }

    #[test]
    fn test_display_matches_label() {
        assert_eq!(Emotion::Sad.to_string(), "Sad");
        assert_eq!(Category::Hadiths.to_string(), "Hadiths");
    }
}
