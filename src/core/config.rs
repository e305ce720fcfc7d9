//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.nasa-gallery/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::api::client::DEFAULT_SEARCH_URL;
use crate::core::state::{Category, DEFAULT_ASSUMED_TOTAL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GalleryConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_category: Option<Category>,
    pub assumed_total: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
}

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable that overrides the search endpoint.
pub const BASE_URL_ENV: &str = "NASA_IMAGES_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub category: Category,
    pub assumed_total: usize,
    pub base_url: String,
    pub timeout_secs: u64,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub category: Option<Category>,
    pub base_url: Option<String>,
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

/// Returns the path to `~/.nasa-gallery/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".nasa-gallery").join("config.toml"))
}

/// Load config from `~/.nasa-gallery/config.toml`.
pub fn load_config() -> Result<GalleryConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(GalleryConfig::default())
        }
    }
}

/// Load config from an explicit path.
///
/// If the file doesn't exist, generates a commented-out default there and
/// returns `GalleryConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config_from(path: &Path) -> Result<GalleryConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(GalleryConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: GalleryConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# NASA Gallery Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_category = "earth"        # "sun", "earth", "moon", "mars", "jupiter"
# assumed_total = 100               # progress bar denominator

# [api]
# base_url = "https://images-api.nasa.gov/search"   # Or set NASA_IMAGES_BASE_URL
# timeout_secs = 30
"#;

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
pub fn resolve(config: &GalleryConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, std::env::var(BASE_URL_ENV).ok())
}

/// Same as [`resolve`], with the environment value passed in.
pub fn resolve_with_env(
    config: &GalleryConfig,
    cli: &CliOverrides,
    env_base_url: Option<String>,
) -> ResolvedConfig {
    let category = cli
        .category
        .or(config.general.default_category)
        .unwrap_or_default();

    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or(env_base_url)
        .or_else(|| config.api.base_url.clone())
        .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

    // A zero timeout would fail every request immediately.
    let timeout_secs = match config.api.timeout_secs {
        Some(0) => {
            warn!(
                "timeout_secs = 0 is not usable, falling back to {}s",
                DEFAULT_TIMEOUT_SECS
            );
            DEFAULT_TIMEOUT_SECS
        }
        Some(secs) => secs,
        None => DEFAULT_TIMEOUT_SECS,
    };

    ResolvedConfig {
        category,
        assumed_total: config
            .general
            .assumed_total
            .unwrap_or(DEFAULT_ASSUMED_TOTAL),
        base_url,
        timeout_secs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&GalleryConfig::default(), &CliOverrides::default(), None);
        assert_eq!(resolved.category, Category::Earth);
        assert_eq!(resolved.assumed_total, DEFAULT_ASSUMED_TOTAL);
        assert_eq!(resolved.base_url, DEFAULT_SEARCH_URL);
        assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = GalleryConfig {
            general: GeneralConfig {
                default_category: Some(Category::Jupiter),
                assumed_total: Some(250),
            },
            api: ApiConfig {
                base_url: Some("http://localhost:8080/search".to_string()),
                timeout_secs: Some(5),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.category, Category::Jupiter);
        assert_eq!(resolved.assumed_total, 250);
        assert_eq!(resolved.base_url, "http://localhost:8080/search");
        assert_eq!(resolved.timeout_secs, 5);
    }

    #[test]
    fn test_zero_timeout_falls_back_to_default() {
        let config: GalleryConfig = toml::from_str("[api]\ntimeout_secs = 0\n").unwrap();
        let resolved = resolve_with_env(&config, &CliOverrides::default(), None);
        assert_eq!(resolved.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_env_beats_config_and_cli_beats_env() {
        let config = GalleryConfig {
            api: ApiConfig {
                base_url: Some("http://from-config".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let resolved = resolve_with_env(
            &config,
            &CliOverrides::default(),
            Some("http://from-env".to_string()),
        );
        assert_eq!(resolved.base_url, "http://from-env");

        let cli = CliOverrides {
            category: Some(Category::Sun),
            base_url: Some("http://from-cli".to_string()),
        };
        let resolved = resolve_with_env(&config, &cli, Some("http://from-env".to_string()));
        assert_eq!(resolved.base_url, "http://from-cli");
        assert_eq!(resolved.category, Category::Sun);
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
default_category = "mars"
"#;
        let config: GalleryConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.default_category, Some(Category::Mars));
        assert!(config.general.assumed_total.is_none());
        assert!(config.api.base_url.is_none());
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let toml_str = r#"
[general]
default_category = "pluto"
"#;
        assert!(toml::from_str::<GalleryConfig>(toml_str).is_err());
    }

    #[test]
    fn test_load_config_from_generates_default_then_parses() {
        let dir = std::env::temp_dir().join(format!("nasa-gallery-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_dir_all(&dir);

        let first = load_config_from(&path).unwrap();
        assert!(first.general.default_category.is_none());
        assert!(path.exists());

        // The generated file is all comments, so it parses to defaults.
        let second = load_config_from(&path).unwrap();
        assert!(second.api.base_url.is_none());

        fs::write(&path, "[general\nbroken").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
