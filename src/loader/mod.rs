//! Dataset loading from a local site directory or over HTTP.

mod http_client;

pub use http_client::HttpClient;

use std::path::PathBuf;
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::{ResourcePaths, Settings};
use crate::models::{ArticleBlock, IndexData, Maneuver, TimelineEntry};

/// Where the JSON datasets live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Read files from a directory.
    Directory(PathBuf),
    /// Fetch relative to a base URL.
    Remote(Url),
}

/// Errors that can occur while loading a dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("HTTP request for {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {resource}: {source}")]
    Parse {
        resource: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid resource URL for {resource}: {source}")]
    InvalidUrl {
        resource: String,
        #[source]
        source: url::ParseError,
    },
}

/// How a loader reaches its data source.
#[derive(Clone)]
enum Backend {
    Directory(PathBuf),
    Remote { base: Url, client: HttpClient },
}

/// Fetches and parses the site's datasets.
#[derive(Clone)]
pub struct Loader {
    source: DataSource,
    resources: ResourcePaths,
    backend: Backend,
}

impl Loader {
    /// Create a loader for a data source.
    ///
    /// An HTTP client is only built for remote sources.
    pub fn new(
        source: DataSource,
        resources: ResourcePaths,
        user_agent: &str,
        timeout: Duration,
    ) -> Result<Self, LoadError> {
        let backend = match &source {
            DataSource::Remote(base) => Backend::Remote {
                base: base.clone(),
                client: HttpClient::new(user_agent, timeout).map_err(|source| {
                    LoadError::Http {
                        url: base.to_string(),
                        source,
                    }
                })?,
            },
            DataSource::Directory(dir) => Backend::Directory(dir.clone()),
        };
        Ok(Self {
            source,
            resources,
            backend,
        })
    }

    /// Create a loader from resolved settings.
    pub fn from_settings(settings: &Settings) -> Result<Self, LoadError> {
        Self::new(
            settings.data_source(),
            settings.resources.clone(),
            &settings.user_agent,
            Duration::from_secs(settings.request_timeout),
        )
    }

    /// Local loader with default resource names, mostly for tests.
    pub fn directory(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            source: DataSource::Directory(dir.clone()),
            resources: ResourcePaths::default(),
            backend: Backend::Directory(dir),
        }
    }

    pub fn source(&self) -> &DataSource {
        &self.source
    }

    pub fn resources(&self) -> &ResourcePaths {
        &self.resources
    }

    /// Fetch and parse one JSON resource by relative path.
    pub async fn fetch<T: DeserializeOwned>(&self, resource: &str) -> Result<T, LoadError> {
        let bytes = match &self.backend {
            Backend::Directory(dir) => {
                let path = dir.join(resource);
                debug!("Reading {}", path.display());
                tokio::fs::read(&path)
                    .await
                    .map_err(|source| LoadError::Io { path, source })?
            }
            Backend::Remote { base, client } => {
                let url = base
                    .join(resource)
                    .map_err(|source| LoadError::InvalidUrl {
                        resource: resource.to_string(),
                        source,
                    })?;
                client.get_bytes(&url).await?
            }
        };

        serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
            resource: resource.to_string(),
            source,
        })
    }

    pub async fn load_timeline(&self) -> Result<Vec<TimelineEntry>, LoadError> {
        self.fetch(&self.resources.timeline).await
    }

    pub async fn load_maneuvers(&self) -> Result<Vec<Maneuver>, LoadError> {
        self.fetch(&self.resources.maneuvers).await
    }

    pub async fn load_article(&self) -> Result<Vec<ArticleBlock>, LoadError> {
        self.fetch(&self.resources.article).await
    }

    /// Load the timeline and maneuvers concurrently.
    ///
    /// Fails as a whole if either fetch fails; nothing is returned partially.
    pub async fn load_index(&self) -> Result<IndexData, LoadError> {
        let (timeline, maneuvers) =
            tokio::try_join!(self.load_timeline(), self.load_maneuvers())?;
        debug!(
            "Loaded {} timeline entries and {} maneuvers",
            timeline.len(),
            maneuvers.len()
        );
        Ok(IndexData::new(timeline, maneuvers))
    }
}
