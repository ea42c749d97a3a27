//! # Content Layer
//!
//! Static text content and the types it is keyed on. The repository is
//! populated once at startup from the built-in library and served to the
//! core behind a total-function contract: every lookup returns text, a
//! miss falls back to a fixed default instead of an error.
//!
//! ## Modules
//!
//! - [`types`]: the `Emotion` and `Category` enumerations
//! - [`repository`]: the two lookup tables and their defaults
//! - [`library`]: the compiled-in content set (8 messages, 24 passages)

pub mod library;
pub mod repository;
pub mod types;

pub use repository::ContentRepository;
pub use types::{Category, Emotion};
