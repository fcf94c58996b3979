//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.wildlife/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::slider::SliderSettings;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WildlifeConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub slider: SliderConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub storage_dir: Option<String>,
    pub load_delay_ms: Option<u64>,
    pub per_page: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SliderConfig {
    pub auto_play_interval_ms: Option<u64>,
    pub transition_duration_ms: Option<u64>,
    pub enable_keyboard_navigation: Option<bool>,
    pub show_progress_bar: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOAD_DELAY_MS: u64 = 1000;
pub const DEFAULT_PER_PAGE: usize = 5;
pub const DEFAULT_AUTO_PLAY_INTERVAL_MS: u64 = 5000;
pub const DEFAULT_TRANSITION_DURATION_MS: u64 = 500;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub storage_dir: PathBuf,
    pub load_delay: Duration,
    pub per_page: usize,
    pub slider: SliderSettings,
    /// `--no-autoplay`: overrides the stored autoplay preference for this session.
    pub no_autoplay: bool,
    /// `--animal <id>`: open the detail view for this record once loaded.
    pub initial_animal: Option<String>,
}

/// Values taken from command-line flags. `None`/`false` means "not given".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub storage_dir: Option<PathBuf>,
    pub animal: Option<String>,
    pub no_autoplay: bool,
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

fn wildlife_home() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".wildlife"))
}

/// Returns the path to `~/.wildlife/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    wildlife_home().map(|dir| dir.join("config.toml"))
}

/// Load config from `~/.wildlife/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WildlifeConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<WildlifeConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(WildlifeConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(WildlifeConfig::default());
    }

    load_config_from(&path)
}

/// Parses a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<WildlifeConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WildlifeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Wildlife Showcase Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# storage_dir = "/home/me/.wildlife/storage"   # Or WILDLIFE_STORAGE_DIR, or --storage-dir
# load_delay_ms = 1000                         # Or WILDLIFE_LOAD_DELAY_MS
# per_page = 5

# [slider]
# auto_play_interval_ms = 5000
# transition_duration_ms = 500
# enable_keyboard_navigation = true
# show_progress_bar = true
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &WildlifeConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &WildlifeConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Storage dir: CLI → env → config → default
    let storage_dir = cli
        .storage_dir
        .clone()
        .or_else(|| env("WILDLIFE_STORAGE_DIR").map(PathBuf::from))
        .or_else(|| config.general.storage_dir.as_ref().map(PathBuf::from))
        .unwrap_or_else(default_storage_dir);

    // Load delay: env → config → default
    let load_delay_ms = match env("WILDLIFE_LOAD_DELAY_MS") {
        Some(raw) => match raw.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!("Ignoring WILDLIFE_LOAD_DELAY_MS={:?}: {}", raw, e);
                None
            }
        },
        None => None,
    }
    .or(config.general.load_delay_ms)
    .unwrap_or(DEFAULT_LOAD_DELAY_MS);

    let per_page = match config.general.per_page {
        Some(0) => {
            warn!("per_page must be at least 1, using {}", DEFAULT_PER_PAGE);
            DEFAULT_PER_PAGE
        }
        Some(n) => n,
        None => DEFAULT_PER_PAGE,
    };

    let auto_play_interval_ms = match config.slider.auto_play_interval_ms {
        Some(0) => {
            warn!(
                "auto_play_interval_ms must be at least 1, using {}",
                DEFAULT_AUTO_PLAY_INTERVAL_MS
            );
            DEFAULT_AUTO_PLAY_INTERVAL_MS
        }
        Some(ms) => ms,
        None => DEFAULT_AUTO_PLAY_INTERVAL_MS,
    };

    let defaults = SliderSettings::default();
    let slider = SliderSettings {
        auto_play: !cli.no_autoplay,
        auto_play_interval: Duration::from_millis(auto_play_interval_ms),
        transition_duration: Duration::from_millis(
            config
                .slider
                .transition_duration_ms
                .unwrap_or(DEFAULT_TRANSITION_DURATION_MS),
        ),
        enable_keyboard_navigation: config
            .slider
            .enable_keyboard_navigation
            .unwrap_or(defaults.enable_keyboard_navigation),
        show_progress_bar: config
            .slider
            .show_progress_bar
            .unwrap_or(defaults.show_progress_bar),
    };

    ResolvedConfig {
        storage_dir,
        load_delay: Duration::from_millis(load_delay_ms),
        per_page,
        slider,
        no_autoplay: cli.no_autoplay,
        initial_animal: cli.animal.clone(),
    }
}

fn default_storage_dir() -> PathBuf {
    wildlife_home()
        .map(|dir| dir.join("storage"))
        .unwrap_or_else(|| PathBuf::from(".wildlife-storage"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = WildlifeConfig::default();
        assert!(config.general.storage_dir.is_none());
        assert!(config.slider.auto_play_interval_ms.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&WildlifeConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.load_delay, Duration::from_millis(DEFAULT_LOAD_DELAY_MS));
        assert_eq!(resolved.per_page, DEFAULT_PER_PAGE);
        assert_eq!(resolved.slider, SliderSettings::default());
        assert!(!resolved.no_autoplay);
        assert!(resolved.initial_animal.is_none());
        assert!(resolved.storage_dir.ends_with("storage"));
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = WildlifeConfig {
            general: GeneralConfig {
                storage_dir: Some("/tmp/wild".to_string()),
                load_delay_ms: Some(0),
                per_page: Some(3),
            },
            slider: SliderConfig {
                auto_play_interval_ms: Some(2000),
                transition_duration_ms: Some(250),
                enable_keyboard_navigation: Some(false),
                show_progress_bar: Some(false),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.storage_dir, PathBuf::from("/tmp/wild"));
        assert_eq!(resolved.load_delay, Duration::ZERO);
        assert_eq!(resolved.per_page, 3);
        assert_eq!(resolved.slider.auto_play_interval, Duration::from_millis(2000));
        assert_eq!(resolved.slider.transition_duration, Duration::from_millis(250));
        assert!(!resolved.slider.enable_keyboard_navigation);
        assert!(!resolved.slider.show_progress_bar);
    }

    #[test]
    fn test_env_overrides_config() {
        let config = WildlifeConfig {
            general: GeneralConfig {
                storage_dir: Some("/from/config".to_string()),
                load_delay_ms: Some(50),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |name: &str| match name {
            "WILDLIFE_STORAGE_DIR" => Some("/from/env".to_string()),
            "WILDLIFE_LOAD_DELAY_MS" => Some("10".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.storage_dir, PathBuf::from("/from/env"));
        assert_eq!(resolved.load_delay, Duration::from_millis(10));
    }

    #[test]
    fn test_malformed_env_delay_falls_back() {
        let config = WildlifeConfig {
            general: GeneralConfig {
                load_delay_ms: Some(50),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |name: &str| (name == "WILDLIFE_LOAD_DELAY_MS").then(|| "soon".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.load_delay, Duration::from_millis(50));
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = WildlifeConfig {
            general: GeneralConfig {
                storage_dir: Some("/from/config".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let cli = CliOverrides {
            storage_dir: Some(PathBuf::from("/from/cli")),
            animal: Some("3".to_string()),
            no_autoplay: true,
        };
        let env = |name: &str| (name == "WILDLIFE_STORAGE_DIR").then(|| "/from/env".to_string());
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.storage_dir, PathBuf::from("/from/cli"));
        assert_eq!(resolved.initial_animal.as_deref(), Some("3"));
        assert!(resolved.no_autoplay);
        assert!(!resolved.slider.auto_play);
    }

    #[test]
    fn test_zero_per_page_uses_default() {
        let config = WildlifeConfig {
            general: GeneralConfig {
                per_page: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.per_page, DEFAULT_PER_PAGE);
    }

    #[test]
    fn test_zero_autoplay_interval_uses_default() {
        let config = WildlifeConfig {
            slider: SliderConfig {
                auto_play_interval_ms: Some(0),
                ..Default::default()
            },
            ..Default::default()
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(
            resolved.slider.auto_play_interval,
            Duration::from_millis(DEFAULT_AUTO_PLAY_INTERVAL_MS)
        );

        // The resolved interval actually advances the slider
        let t0 = std::time::Instant::now();
        let mut slider = crate::core::slider::SliderController::new(7, resolved.slider);
        slider.tick(t0);
        assert!(slider.next_deadline().is_some_and(|d| d > t0));
        assert!(slider.tick(t0 + resolved.slider.auto_play_interval));
        assert_eq!(slider.current_index(), 1);
    }

    #[test]
    fn test_toml_parses_all_sections() {
        let toml_str = r#"
[general]
storage_dir = "/srv/wildlife"
load_delay_ms = 250
per_page = 10

[slider]
auto_play_interval_ms = 3000
show_progress_bar = false
"#;
        let config: WildlifeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.storage_dir.as_deref(), Some("/srv/wildlife"));
        assert_eq!(config.general.load_delay_ms, Some(250));
        assert_eq!(config.general.per_page, Some(10));
        assert_eq!(config.slider.auto_play_interval_ms, Some(3000));
        assert_eq!(config.slider.show_progress_bar, Some(false));
        assert!(config.slider.transition_duration_ms.is_none());
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[slider]
transition_duration_ms = 100
"#;
        let config: WildlifeConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.slider.transition_duration_ms, Some(100));
        assert!(config.general.per_page.is_none());
    }

    #[test]
    fn test_generated_template_is_valid_toml() {
        let config: WildlifeConfig = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
        assert!(config.general.storage_dir.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_error() {
        let dir = crate::test_support::temp_store_dir();
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[general\nper_page = ").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        fs::write(&path, "[general]\nper_page = 2\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap().general.per_page, Some(2));
        let _ = fs::remove_dir_all(&dir);
    }
}
