//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::content::library;
use crate::core::state::App;

/// Creates a test App backed by the full built-in content set.
pub fn test_app() -> App {
    App::new(library::builtin())
}
