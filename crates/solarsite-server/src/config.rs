//! Configuration loading and typed config structures for the SolarSite server.
//!
//! The canonical configuration lives in `solarsite-config.yaml` next to the
//! binary (override the path with `SOLARSITE_CONFIG`). Every field has a
//! default, so a missing file yields a working development setup that
//! talks to the public OpenTopoData API.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use solarsite_terrain::JitterMode;

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "SOLARSITE_CONFIG";

/// Configuration file used when [`CONFIG_PATH_ENV`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "solarsite-config.yaml";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// An environment override held an unusable value.
    #[error("invalid value for {name}: {reason}")]
    InvalidOverride {
        /// The environment variable name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level server configuration.
///
/// Mirrors the structure of `solarsite-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Elevation provider settings.
    #[serde(default)]
    pub elevation: ElevationConfig,

    /// Terrain generator settings.
    #[serde(default)]
    pub terrain: TerrainConfig,

    /// Static asset and dataset locations.
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from the file named by [`CONFIG_PATH_ENV`] (or
    /// [`DEFAULT_CONFIG_PATH`]) and apply environment overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or
    /// parsed, or an override is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Apply environment overrides using `lookup` to read variables.
    ///
    /// - `HOST` overrides `server.host`
    /// - `PORT` overrides `server.port`
    /// - `ELEVATION_API_URL` overrides `elevation.base_url`
    /// - `ELEVATION_TIMEOUT_MS` overrides `elevation.timeout_ms`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOverride`] if a numeric override does
    /// not parse.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port.parse().map_err(|e| ConfigError::InvalidOverride {
                name: "PORT",
                reason: format!("{e}"),
            })?;
        }
        if let Some(url) = lookup("ELEVATION_API_URL") {
            self.elevation.base_url = url;
        }
        if let Some(ms) = lookup("ELEVATION_TIMEOUT_MS") {
            self.elevation.timeout_ms =
                ms.parse().map_err(|e| ConfigError::InvalidOverride {
                    name: "ELEVATION_TIMEOUT_MS",
                    reason: format!("{e}"),
                })?;
        }
        Ok(())
    }
}

/// HTTP listener configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// The host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// The TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Which elevation provider answers `resolve_elevation` first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElevationProviderKind {
    /// The OpenTopoData HTTP API (or any service with the same response shape).
    #[default]
    OpenTopoData,
    /// No live lookups; always use the deterministic fallback.
    Offline,
    /// A constant elevation, for demos and integration tests.
    Fixed,
}

/// Elevation provider configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElevationConfig {
    /// Provider used for live lookups.
    #[serde(default)]
    pub provider: ElevationProviderKind,
    /// Base URL; queried as `{base_url}?locations={lat},{lon}`.
    #[serde(default = "default_elevation_url")]
    pub base_url: String,
    /// Upper bound on a single lookup, in milliseconds.
    #[serde(default = "default_elevation_timeout_ms")]
    pub timeout_ms: u64,
    /// Elevation returned by the `fixed` provider.
    #[serde(default = "default_fixed_elevation_m")]
    pub fixed_elevation_m: f64,
}

impl ElevationConfig {
    /// The lookup timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ElevationConfig {
    fn default() -> Self {
        Self {
            provider: ElevationProviderKind::default(),
            base_url: default_elevation_url(),
            timeout_ms: default_elevation_timeout_ms(),
            fixed_elevation_m: default_fixed_elevation_m(),
        }
    }
}

/// Terrain generator configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct TerrainConfig {
    /// Whether profiles carry seeded jitter.
    #[serde(default)]
    pub jitter: JitterMode,
}

/// Locations of static files and datasets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding `index.html` and the other frontend pages.
    #[serde(default = "default_frontend_dir")]
    pub frontend_dir: PathBuf,
    /// Shared asset directory consulted after `frontend_dir/assets`.
    #[serde(default = "default_assets_dir")]
    pub assets_dir: PathBuf,
    /// Solar irradiance dataset served by `/api/solar/solar-data`.
    #[serde(default = "default_solar_dataset")]
    pub solar_dataset: PathBuf,
}

impl AssetsConfig {
    /// The frontend-local asset directory, `frontend_dir/assets`.
    pub fn frontend_assets_dir(&self) -> PathBuf {
        self.frontend_dir.join("assets")
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            frontend_dir: default_frontend_dir(),
            assets_dir: default_assets_dir(),
            solar_dataset: default_solar_dataset(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions (used by serde)
// ---------------------------------------------------------------------------

fn default_host() -> String {
    "0.0.0.0".to_owned()
}
const fn default_port() -> u16 {
    5000
}
fn default_elevation_url() -> String {
    "https://api.opentopodata.org/v1/aster30m".to_owned()
}
const fn default_elevation_timeout_ms() -> u64 {
    10_000
}
const fn default_fixed_elevation_m() -> f64 {
    150.0
}
fn default_frontend_dir() -> PathBuf {
    PathBuf::from("frontend")
}
fn default_assets_dir() -> PathBuf {
    PathBuf::from("assets")
}
fn default_solar_dataset() -> PathBuf {
    PathBuf::from("datasets/solar-irradiance.json")
}
fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 5000);
        assert_eq!(config.elevation.provider, ElevationProviderKind::OpenTopoData);
        assert_eq!(config.elevation.timeout(), Duration::from_secs(10));
        assert_eq!(config.terrain.jitter, JitterMode::Seeded);
        assert_eq!(
            config.assets.frontend_assets_dir(),
            PathBuf::from("frontend/assets")
        );
    }

    #[test]
    fn parse_full_yaml() {
        let yaml = r#"
server:
  host: "127.0.0.1"
  port: 8081

elevation:
  provider: fixed
  base_url: "http://localhost:9000/v1/test"
  timeout_ms: 2500
  fixed_elevation_m: 42.5

terrain:
  jitter: disabled

assets:
  frontend_dir: "web"
  assets_dir: "static"
  solar_dataset: "data/solar.json"

logging:
  level: "debug"
"#;
        let config = AppConfig::parse(yaml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.elevation.provider, ElevationProviderKind::Fixed);
        assert_eq!(config.elevation.timeout_ms, 2500);
        assert_eq!(config.elevation.fixed_elevation_m, 42.5);
        assert_eq!(config.terrain.jitter, JitterMode::Disabled);
        assert_eq!(config.assets.solar_dataset, PathBuf::from("data/solar.json"));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let config = AppConfig::parse(include_str!("../../../solarsite-config.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_yaml_uses_defaults() {
        let config = AppConfig::parse("elevation:\n  provider: offline\n").unwrap();
        assert_eq!(config.elevation.provider, ElevationProviderKind::Offline);
        assert_eq!(config.elevation.timeout_ms, 10_000);
        assert_eq!(config.server, ServerConfig::default());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        let result = AppConfig::parse("elevation:\n  provider: carrier_pigeon\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn env_overrides_apply() {
        let env: BTreeMap<&str, &str> = [
            ("PORT", "9090"),
            ("HOST", "127.0.0.1"),
            ("ELEVATION_API_URL", "http://mock/elevation"),
            ("ELEVATION_TIMEOUT_MS", "250"),
        ]
        .into_iter()
        .collect();
        let mut config = AppConfig::default();
        config
            .apply_env_overrides(|name| env.get(name).map(|v| (*v).to_owned()))
            .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.elevation.base_url, "http://mock/elevation");
        assert_eq!(config.elevation.timeout(), Duration::from_millis(250));
    }

    #[test]
    fn bad_port_override_is_an_error() {
        let mut config = AppConfig::default();
        let result = config.apply_env_overrides(|name| (name == "PORT").then(|| "http".to_owned()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidOverride { name: "PORT", .. })
        ));
    }
}
