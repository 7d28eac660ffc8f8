//! Configuration management for the skate history site using the prefer crate.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::loader::DataSource;

/// Default directory holding the site's static files and JSON datasets.
pub const DEFAULT_SITE_DIR: &str = "site";

/// Name used for config file discovery (`skate-history.toml`, etc.).
const CONFIG_NAME: &str = "skate-history";

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Geometry constants of the timeline design.
///
/// Defaults match the stylesheet: a 40px marker that starts 120px below the
/// top of the track, and a single-column layout at 900px and below.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Marker top at zero progress.
    pub marker_offset: f64,
    /// Subtracted from the track height to get the marker's travel.
    pub marker_track_inset: f64,
    /// How far ahead of the marker an entry is revealed.
    pub reveal_lead: f64,
    /// Progress reaches 1 this far above the next section.
    pub scroll_end_margin: f64,
    /// Viewports this wide or narrower use the single-column layout.
    pub mobile_breakpoint: f64,
    /// Gap left between the end of the track line and the next section.
    pub track_bottom_margin: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            marker_offset: 120.0,
            marker_track_inset: 40.0,
            reveal_lead: 40.0,
            scroll_end_margin: 400.0,
            mobile_breakpoint: 900.0,
            track_bottom_margin: 80.0,
        }
    }
}

/// Relative paths of the JSON datasets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcePaths {
    pub timeline: String,
    pub maneuvers: String,
    pub article: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            timeline: "data.json".to_string(),
            maneuvers: "manobras.json".to_string(),
            article: "skate-terapia-data.json".to_string(),
        }
    }
}

/// Application settings with every default filled in.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory with the static site and its datasets.
    pub site_dir: PathBuf,
    /// Fetch datasets over HTTP from here instead of reading `site_dir`.
    pub base_url: Option<Url>,
    /// User agent for HTTP requests.
    pub user_agent: String,
    /// Request timeout in seconds.
    pub request_timeout: u64,
    pub resources: ResourcePaths,
    pub layout: LayoutConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            base_url: None,
            user_agent: format!("skate-history/{}", env!("CARGO_PKG_VERSION")),
            request_timeout: 30,
            resources: ResourcePaths::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl Settings {
    /// Create settings reading datasets from a local site directory.
    pub fn with_site_dir(site_dir: PathBuf) -> Self {
        Self {
            site_dir,
            ..Default::default()
        }
    }

    /// Where datasets are fetched from. A base URL wins over the site directory.
    pub fn data_source(&self) -> DataSource {
        match &self.base_url {
            Some(url) => DataSource::Remote(url.clone()),
            None => DataSource::Directory(self.site_dir.clone()),
        }
    }
}

/// Configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site directory path, relative to the config file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_dir: Option<String>,
    /// Remote base URL for the datasets.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// User agent string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    /// Request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<u64>,
    #[serde(default)]
    pub resources: ResourcePaths,
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Path to the config file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration using prefer crate for discovery.
    /// Falls back to defaults when no file is found or it fails to parse.
    pub async fn load() -> Self {
        match prefer::load(CONFIG_NAME).await {
            Ok(pref_config) => {
                if let Some(path) = pref_config.source_path() {
                    match Self::load_from_path(path).await {
                        Ok(config) => config,
                        Err(e) => {
                            tracing::warn!("Ignoring config file: {}", e);
                            Self::default()
                        }
                    }
                } else {
                    Self::default()
                }
            }
            Err(_) => Self::default(),
        }
    }

    /// Load configuration from a specific file path.
    /// Supports JSON, TOML and YAML based on file extension.
    pub async fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");
        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_path_buf(),
            message,
        };

        let mut config: Config = match ext {
            "toml" => toml::from_str(&contents).map_err(|e| parse_err(e.to_string()))?,
            "yaml" | "yml" => {
                serde_yaml::from_str(&contents).map_err(|e| parse_err(e.to_string()))?
            }
            _ => serde_json::from_str(&contents).map_err(|e| parse_err(e.to_string()))?,
        };

        config.source_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Directory of the config file, if it was loaded from one.
    pub fn base_dir(&self) -> Option<PathBuf> {
        self.source_path
            .as_ref()
            .and_then(|p| p.parent().map(|p| p.to_path_buf()))
    }

    /// Resolve a path that may be relative to the config file.
    /// - Absolute paths are returned as-is
    /// - Paths starting with ~ are expanded
    /// - Relative paths are resolved relative to `base_dir`
    pub fn resolve_path(&self, path_str: &str, base_dir: &Path) -> PathBuf {
        let expanded = shellexpand::tilde(path_str);
        let path = Path::new(expanded.as_ref());

        if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        }
    }

    /// Apply configuration to settings.
    pub fn apply_to_settings(
        &self,
        settings: &mut Settings,
        base_dir: &Path,
    ) -> Result<(), ConfigError> {
        if let Some(ref site_dir) = self.site_dir {
            settings.site_dir = self.resolve_path(site_dir, base_dir);
        }
        if let Some(ref base_url) = self.base_url {
            settings.base_url = Some(parse_base_url(base_url)?);
        }
        if let Some(ref user_agent) = self.user_agent {
            settings.user_agent = user_agent.clone();
        }
        if let Some(timeout) = self.request_timeout {
            settings.request_timeout = timeout;
        }
        settings.resources = self.resources.clone();
        settings.layout = self.layout;
        Ok(())
    }
}

/// Parse a base URL, making sure it ends with `/` so relative joins keep the
/// last path segment.
pub fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    Url::parse(&normalized).map_err(|source| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        source,
    })
}

/// Options for loading settings.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Explicit config file path (overrides auto-discovery).
    pub config_path: Option<PathBuf>,
    /// Use CWD for relative paths instead of config file directory.
    pub use_cwd: bool,
    /// Site directory override (--site-dir).
    pub site_dir: Option<PathBuf>,
    /// Remote base URL override (--base-url).
    pub base_url: Option<String>,
}

/// Load settings with explicit options.
/// Returns (Settings, Config) tuple.
pub async fn load_settings_with_options(
    options: LoadOptions,
) -> Result<(Settings, Config), ConfigError> {
    let config = match options.config_path {
        Some(ref path) => Config::load_from_path(path).await?,
        None => Config::load().await,
    };

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let base_dir = if options.use_cwd {
        cwd.clone()
    } else {
        config.base_dir().unwrap_or_else(|| cwd.clone())
    };

    let mut settings = Settings::default();
    config.apply_to_settings(&mut settings, &base_dir)?;

    // CLI flags win over the config file
    if let Some(site_dir) = options.site_dir {
        settings.site_dir = if site_dir.is_absolute() {
            site_dir
        } else {
            cwd.join(site_dir)
        };
    }
    if let Some(ref base_url) = options.base_url {
        settings.base_url = Some(parse_base_url(base_url)?);
    }

    tracing::debug!(
        "Settings: site_dir={}, base_url={:?}",
        settings.site_dir.display(),
        settings.base_url.as_ref().map(Url::as_str)
    );

    Ok((settings, config))
}
