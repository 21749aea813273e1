//! Manifest loading
//!
//! Fetches `gallery.json` once per session, either over HTTP with
//! cache-bypass headers or from a local file. A load yields either a complete
//! catalog or a `LoadError`; there is no partial result and no retry.

use super::error::{LoadError, Result};
use super::types::{Catalog, Manifest};
use reqwest::header::{CACHE_CONTROL, HeaderMap, HeaderValue, PRAGMA};
use std::fmt;
use std::path::{Path, PathBuf};
use url::Url;

/// Default manifest location, relative to the working directory
pub const DEFAULT_MANIFEST: &str = "gallery.json";

/// Where the manifest lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    /// `http://` or `https://` URL
    Remote(Url),
    /// File on the local filesystem
    Local(PathBuf),
}

impl ManifestSource {
    /// Interpret a user-supplied location
    ///
    /// `http(s)://` strings become remote sources, `file://` URLs and plain
    /// strings become local paths.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::InvalidSource` for empty input, malformed URLs and
    /// `file://` URLs that do not map to a path.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();
        if location.is_empty() {
            return Err(LoadError::InvalidSource("empty manifest location".to_string()));
        }

        if location.starts_with("http://") || location.starts_with("https://") {
            let url = Url::parse(location)
                .map_err(|e| LoadError::InvalidSource(format!("{location}: {e}")))?;
            return Ok(Self::Remote(url));
        }

        if location.starts_with("file://") {
            let path = Url::parse(location)
                .ok()
                .and_then(|url| url.to_file_path().ok())
                .ok_or_else(|| LoadError::InvalidSource(location.to_string()))?;
            return Ok(Self::Local(path));
        }

        Ok(Self::Local(PathBuf::from(location)))
    }

    /// Resolve an item path against the manifest location
    ///
    /// Remote manifests yield absolute URLs; local manifests yield paths
    /// relative to the manifest's directory. Falls back to the raw path when
    /// the URL join fails.
    #[must_use]
    pub fn resolve_asset(&self, asset_path: &str) -> String {
        match self {
            Self::Remote(base) => base
                .join(asset_path)
                .map_or_else(|_| asset_path.to_string(), String::from),
            Self::Local(manifest) => {
                let dir = manifest.parent().unwrap_or_else(|| Path::new(""));
                dir.join(asset_path).display().to_string()
            }
        }
    }
}

impl fmt::Display for ManifestSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(url) => write!(f, "{url}"),
            Self::Local(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Parse a manifest body into a catalog
///
/// A body without `items` yields an empty catalog.
///
/// # Errors
///
/// Returns `LoadError::Parse` if the body is not a JSON object of the
/// manifest shape.
pub fn parse_manifest(body: &str) -> Result<Catalog> {
    let manifest: Manifest = serde_json::from_str(body)?;
    Ok(manifest.into_catalog())
}

/// Load the manifest from `source`
///
/// # Errors
///
/// Returns `LoadError` on transport failure, non-success HTTP status, file
/// read failure or a malformed body.
pub async fn load(source: &ManifestSource) -> Result<Catalog> {
    let body = match source {
        ManifestSource::Remote(url) => fetch_remote(url).await?,
        ManifestSource::Local(path) => tokio::fs::read_to_string(path).await?,
    };

    let catalog = parse_manifest(&body)?;
    tracing::info!("Loaded {} items from {}", catalog.len(), source);
    Ok(catalog)
}

/// Cache-bypass headers: always fetch fresh, never reuse a cached response
fn no_store_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

async fn fetch_remote(url: &Url) -> Result<String> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("galleria/", env!("CARGO_PKG_VERSION")))
        .default_headers(no_store_headers())
        .build()?;

    tracing::debug!("Fetching manifest from {}", url);
    let response = client.get(url.clone()).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(LoadError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }

    Ok(response.text().await?)
}
