//! # TUI Components
//!
//! One component per screen surface, plus the title bar. Components
//! follow two patterns, both borrowed from the rest of the codebase:
//!
//! - **Stateless (props-based)**: `TitleBar` receives everything it
//!   renders as fields and holds no state between frames.
//! - **Stateful (persistent state + transient wrapper)**: the screen
//!   components keep a small `*State` struct alive in `TuiState`
//!   (cursor position, scroll offset) and build a short-lived wrapper
//!   around it each frame for rendering.
//!
//! Each component file co-locates its state type, event enum, rendering
//! and tests, so one file tells the whole story of one screen.
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (top bar: status + key hints)
//! ├── emotion_grid.rs   (screen 1: pick an emotion)
//! ├── category_menu.rs  (screen 2: pick what to read)
//! └── passage_view.rs   (screen 3: read the passage)
//! ```

pub mod category_menu;
pub mod emotion_grid;
pub mod passage_view;
pub mod title_bar;

pub use category_menu::{CategoryMenu, CategoryMenuEvent, CategoryMenuState};
pub use emotion_grid::{EmotionGrid, EmotionGridEvent, EmotionGridState};
pub use passage_view::{PassageView, PassageViewState};
pub use title_bar::TitleBar;
