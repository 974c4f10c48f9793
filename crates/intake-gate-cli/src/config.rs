//! Configuration file support for intake-gate.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/intake-gate/config.toml` (lowest priority)
//! - Project-local: `.intake-gate.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Gate threshold overrides.
    pub gate: GateSection,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Gate threshold overrides.
///
/// Anything left unset falls back to the canonical gate defaults.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GateSection {
    /// Minimum width in pixels.
    pub min_width: Option<u32>,
    /// Minimum height in pixels.
    pub min_height: Option<u32>,
    /// Blur threshold (0.0-1.0).
    pub blur_threshold: Option<f64>,
    /// Acceptance threshold (0.0-1.0).
    pub accept_threshold: Option<f64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/intake-gate/config.toml`
    /// 2. Project-local: `.intake-gate.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as
    /// warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(t) = self.gate.blur_threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("gate.blur_threshold must be 0.0-1.0, got {t}"));
            }
        }
        if let Some(t) = self.gate.accept_threshold {
            if !(0.0..=1.0).contains(&t) {
                return Err(format!("gate.accept_threshold must be 0.0-1.0, got {t}"));
            }
        }
        if let Some(w) = self.gate.min_width {
            if w == 0 {
                return Err(String::from("gate.min_width must be positive"));
            }
        }
        if let Some(h) = self.gate.min_height {
            if h == 0 {
                return Err(String::from("gate.min_height must be positive"));
            }
        }
        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Gate
        self.gate.min_width = other.gate.min_width.or(self.gate.min_width);
        self.gate.min_height = other.gate.min_height.or(self.gate.min_height);
        self.gate.blur_threshold = other.gate.blur_threshold.or(self.gate.blur_threshold);
        self.gate.accept_threshold = other.gate.accept_threshold.or(self.gate.accept_threshold);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("intake-gate").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.intake-gate.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".intake-gate.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.gate.min_width.is_none());
        assert!(config.gate.blur_threshold.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: AppConfig = toml::from_str("").expect("parse empty config");
        assert!(config.general.recursive.is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r"
[general]
recursive = true

[gate]
min_width = 800
min_height = 600
blur_threshold = 0.25
accept_threshold = 0.8

[output]
format = 'json'
pretty = true
progress = false
";
        let config: AppConfig = toml::from_str(toml).expect("parse full config");

        assert_eq!(config.general.recursive, Some(true));
        assert_eq!(config.gate.min_width, Some(800));
        assert_eq!(config.gate.min_height, Some(600));
        assert_eq!(config.gate.blur_threshold, Some(0.25));
        assert_eq!(config.gate.accept_threshold, Some(0.8));
        assert_eq!(config.output.format, Some("json".to_string()));
        assert_eq!(config.output.pretty, Some(true));
    }

    #[test]
    fn test_partial_gate_section() {
        let config: AppConfig = toml::from_str(
            "
[gate]
blur_threshold = 0.4
",
        )
        .expect("parse partial gate");

        assert_eq!(config.gate.blur_threshold, Some(0.4));
        assert!(config.gate.min_width.is_none());
        assert!(config.gate.accept_threshold.is_none());
    }

    #[test]
    fn test_merge_configs() {
        let mut base: AppConfig = toml::from_str(
            "
[gate]
min_width = 700
blur_threshold = 0.2
",
        )
        .expect("parse base");

        let override_config: AppConfig = toml::from_str(
            "
[gate]
min_width = 900

[output]
format = 'jsonl'
",
        )
        .expect("parse override");

        base.merge(override_config);

        // min_width overridden, blur preserved, output added
        assert_eq!(base.gate.min_width, Some(900));
        assert_eq!(base.gate.blur_threshold, Some(0.2));
        assert_eq!(base.output.format, Some("jsonl".to_string()));
    }

    #[test]
    fn test_merge_empty_override_preserves_base() {
        let mut base: AppConfig = toml::from_str(
            "
[gate]
accept_threshold = 0.9
",
        )
        .expect("parse base");

        base.merge(AppConfig::default());
        assert_eq!(base.gate.accept_threshold, Some(0.9));
    }

    #[test]
    fn test_invalid_toml_syntax_handled() {
        let toml = "
[gate
min_width = 800
"; // Missing closing bracket
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "invalid TOML should return error");
    }

    #[test]
    fn test_invalid_field_type_handled() {
        let toml = r#"
[gate]
blur_threshold = "fuzzy"
"#;
        let result: Result<AppConfig, _> = toml::from_str(toml);
        assert!(result.is_err(), "type mismatch should return error");
    }

    #[test]
    fn test_validate_blur_threshold_out_of_range() {
        let mut config = AppConfig::default();
        config.gate.blur_threshold = Some(1.5);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("gate.blur_threshold"));
    }

    #[test]
    fn test_validate_accept_threshold_out_of_range() {
        let mut config = AppConfig::default();
        config.gate.accept_threshold = Some(-0.1);

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("gate.accept_threshold"));
    }

    #[test]
    fn test_validate_zero_dimensions_rejected() {
        let mut config = AppConfig::default();
        config.gate.min_width = Some(0);
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.gate.min_height = Some(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_output_format_invalid() {
        let mut config = AppConfig::default();
        config.output.format = Some("xml".to_string());

        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("output.format"));
    }

    #[test]
    fn test_validate_all_valid_passes() {
        let config: AppConfig = toml::from_str(
            "
[gate]
min_width = 640
blur_threshold = 0.3
accept_threshold = 0.7

[output]
format = 'json'
",
        )
        .expect("parse valid config");

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_find_config_in_parents() {
        let temp = tempfile::tempdir().expect("tempdir");
        let nested = temp.path().join("a").join("b");
        std::fs::create_dir_all(&nested).expect("create dirs");
        std::fs::write(temp.path().join(".intake-gate.toml"), "").expect("write config");

        let found = find_config_in_parents(&nested).expect("config found");
        assert!(found.ends_with(".intake-gate.toml"));
    }
}
