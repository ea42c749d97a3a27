//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sakina/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SakinaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

/// Colors as `#RRGGBB` strings. Parsing into terminal colors happens in
/// the TUI layer; unparseable values fall back there with a warning.
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub accent: Option<String>,
    pub highlight: Option<String>,
    pub text: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "sakina.log";
pub const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;

// Heritage palette: deep purple headings on soft pink.
pub const DEFAULT_ACCENT: &str = "#690069";
pub const DEFAULT_HIGHLIGHT: &str = "#FFC0CB";
pub const DEFAULT_TEXT: &str = "#FFF5F7";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_file: PathBuf,
    pub log_level: log::LevelFilter,
    pub accent: String,
    pub highlight: String,
    pub text: String,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sakina/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sakina").join("config.toml"))
}

/// Load config from `~/.sakina/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SakinaConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SakinaConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(SakinaConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(SakinaConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: SakinaConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r##"# Sakina Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_file = "sakina.log"
# log_level = "info"          # "error", "warn", "info", "debug", "trace", "off"

# [theme]
# accent = "#690069"          # headings and borders
# highlight = "#FFC0CB"       # selected item
# text = "#FFF5F7"            # passage body text
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_log_level` and `cli_log_file` are from CLI flags (None = not specified).
pub fn resolve(
    config: &SakinaConfig,
    cli_log_level: Option<&str>,
    cli_log_file: Option<&str>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("SAKINA_LOG").ok())
        .or_else(|| config.general.log_level.clone())
        .map(|s| parse_level(&s))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli_log_file
        .map(|s| s.to_string())
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig {
        log_file: PathBuf::from(log_file),
        log_level,
        accent: config
            .theme
            .accent
            .clone()
            .unwrap_or_else(|| DEFAULT_ACCENT.to_string()),
        highlight: config
            .theme
            .highlight
            .clone()
            .unwrap_or_else(|| DEFAULT_HIGHLIGHT.to_string()),
        text: config
            .theme
            .text
            .clone()
            .unwrap_or_else(|| DEFAULT_TEXT.to_string()),
    }
}

/// Parse a level name, falling back to the default on anything unknown.
fn parse_level(s: &str) -> log::LevelFilter {
    match s.to_ascii_lowercase().as_str() {
        "off" => log::LevelFilter::Off,
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        other => {
            warn!("Unknown log level {:?}, using {}", other, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = SakinaConfig::default();
        assert!(config.general.log_file.is_none());
        assert!(config.theme.accent.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = SakinaConfig::default();
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(resolved.accent, DEFAULT_ACCENT);
        assert_eq!(resolved.highlight, DEFAULT_HIGHLIGHT);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = SakinaConfig {
            general: GeneralConfig {
                log_file: Some("custom.log".to_string()),
                log_level: Some("debug".to_string()),
            },
            theme: ThemeConfig {
                accent: Some("#112233".to_string()),
                ..Default::default()
            },
        };
        let resolved = resolve(&config, None, None);
        assert_eq!(resolved.log_file, PathBuf::from("custom.log"));
        assert_eq!(resolved.log_level, log::LevelFilter::Debug);
        assert_eq!(resolved.accent, "#112233");
        // Untouched theme fields keep their defaults
        assert_eq!(resolved.highlight, DEFAULT_HIGHLIGHT);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = SakinaConfig {
            general: GeneralConfig {
                log_file: Some("from-config.log".to_string()),
                log_level: Some("debug".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("trace"), Some("from-cli.log"));
        assert_eq!(resolved.log_level, log::LevelFilter::Trace);
        assert_eq!(resolved.log_file, PathBuf::from("from-cli.log"));
    }

    #[test]
    fn test_unknown_level_falls_back() {
        let config = SakinaConfig::default();
        let resolved = resolve(&config, Some("loud"), None);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r##"
[general]
log_file = "elsewhere.log"
log_level = "warn"

[theme]
accent = "#AA00AA"
highlight = "#FFB6C1"
"##;
        let config: SakinaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.log_file.as_deref(), Some("elsewhere.log"));
        assert_eq!(config.general.log_level.as_deref(), Some("warn"));
        assert_eq!(config.theme.accent.as_deref(), Some("#AA00AA"));
        assert_eq!(config.theme.text, None);
    }

    #[test]
    fn test_sparse_toml_parses() {
        // Only override one thing — everything else stays default
        let toml_str = r##"
[theme]
highlight = "#123456"
"##;
        let config: SakinaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.theme.highlight.as_deref(), Some("#123456"));
        assert!(config.theme.accent.is_none());
        assert!(config.general.log_file.is_none());
    }
}
