//! # Theme
//!
//! Terminal colors for the three configurable roles: accent (headings,
//! borders), highlight (selected item) and text (passage body). Values
//! come from `[theme]` in the config file as `#RRGGBB` strings; anything
//! unparseable falls back to the built-in palette with a warning.

use log::warn;
use ratatui::style::Color;

use crate::core::config::{DEFAULT_ACCENT, DEFAULT_HIGHLIGHT, DEFAULT_TEXT, ResolvedConfig};

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub accent: Color,
    pub highlight: Color,
    pub text: Color,
}

impl Theme {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        Self {
            accent: color_or_default(&config.accent, DEFAULT_ACCENT),
            highlight: color_or_default(&config.highlight, DEFAULT_HIGHLIGHT),
            text: color_or_default(&config.text, DEFAULT_TEXT),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        // The defaults are compile-time constants and always parse.
        Self {
            accent: parse_hex_color(DEFAULT_ACCENT).unwrap_or(Color::Magenta),
            highlight: parse_hex_color(DEFAULT_HIGHLIGHT).unwrap_or(Color::LightMagenta),
            text: parse_hex_color(DEFAULT_TEXT).unwrap_or(Color::White),
        }
    }
}

fn color_or_default(value: &str, default: &str) -> Color {
    match parse_hex_color(value) {
        Some(color) => color,
        None => {
            warn!("Invalid theme color {:?}, using {}", value, default);
            parse_hex_color(default).unwrap_or(Color::Reset)
        }
    }
}

/// Parse `#RRGGBB` into an RGB color. Returns `None` for anything else.
pub fn parse_hex_color(s: &str) -> Option<Color> {
    let hex = s.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#FFC0CB"), Some(Color::Rgb(0xFF, 0xC0, 0xCB)));
        assert_eq!(parse_hex_color("#000000"), Some(Color::Rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_hex_color("FFC0CB"), None); // missing '#'
        assert_eq!(parse_hex_color("#FFF"), None); // short form unsupported
        assert_eq!(parse_hex_color("#GGGGGG"), None);
        assert_eq!(parse_hex_color(""), None);
    }

    #[test]
    fn test_invalid_config_color_falls_back() {
        let config = ResolvedConfig {
            log_file: "sakina.log".into(),
            log_level: log::LevelFilter::Info,
            accent: "pinkish".to_string(),
            highlight: "#FFB6C1".to_string(),
            text: "#FFF5F7".to_string(),
        };
        let theme = Theme::from_config(&config);
        assert_eq!(theme.accent, parse_hex_color(DEFAULT_ACCENT).unwrap());
        assert_eq!(theme.highlight, Color::Rgb(0xFF, 0xB6, 0xC1));
    }
}
