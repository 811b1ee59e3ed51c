//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub behavior: BehaviorConfig,
    #[serde(default)]
    pub seed: SeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// UI appearance settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// `"auto"` follows the terminal background; otherwise `"light"` or
    /// `"dark"`, with anything unrecognized treated as light.
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_true")]
    pub show_separators: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            show_separators: true,
        }
    }
}

/// Editing behavior.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BehaviorConfig {
    /// Reject blank or over-long titles instead of accepting anything.
    #[serde(default)]
    pub strict_titles: bool,
}

/// Where the initial list comes from. Without a file the built-in list is used.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Diagnostic log settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
            level: default_level(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_theme() -> String {
    "auto".to_string()
}

fn default_log_dir() -> String {
    "~/.local/share/crabtodo/logs".to_string()
}

fn default_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        let cfg: AppConfig = toml::from_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.ui.theme, "auto");
        assert!(cfg.ui.show_separators);
        assert!(!cfg.behavior.strict_titles);
        assert!(cfg.seed.file.is_none());
        assert!(!cfg.logging.enabled);
    }

    #[test]
    fn test_partial_sections() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [ui]
            theme = "dark"

            [behavior]
            strict_titles = true

            [seed]
            file = "/tmp/todos.toml"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(cfg.ui.theme, "dark");
        assert!(cfg.ui.show_separators);
        assert!(cfg.behavior.strict_titles);
        assert_eq!(cfg.seed.file, Some(PathBuf::from("/tmp/todos.toml")));
        assert!(cfg.logging.enabled);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut cfg = AppConfig::default();
        cfg.ui.theme = "light".to_string();
        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn test_unknown_theme_is_kept_verbatim() {
        let cfg: AppConfig = toml::from_str("[ui]\ntheme = \"sepia\"").unwrap();
        assert_eq!(cfg.ui.theme, "sepia");
    }
}
