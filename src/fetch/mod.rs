// src/fetch/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;
use url::Url;

/// Where resource names are resolved from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base {
    Dir(PathBuf),
    Url(Url),
}

impl Base {
    /// `http://` and `https://` strings become [`Base::Url`], anything else a directory.
    pub fn parse(raw: &str) -> Result<Self> {
        if is_http(raw) {
            let mut url = Url::parse(raw).with_context(|| format!("parsing base URL {}", raw))?;
            // join() replaces the last segment unless the path ends in '/'
            if !url.path().ends_with('/') {
                let path = format!("{}/", url.path());
                url.set_path(&path);
            }
            Ok(Base::Url(url))
        } else {
            Ok(Base::Dir(PathBuf::from(raw)))
        }
    }

    /// Directory holding `page`, so relative names resolve next to it.
    pub fn beside(page: &Path) -> Self {
        let dir = page
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Base::Dir(dir.to_path_buf())
    }

    pub fn resolve(&self, name: &str) -> Result<Location> {
        if is_http(name) {
            let url = Url::parse(name).with_context(|| format!("parsing URL {}", name))?;
            return Ok(Location::Remote(url));
        }
        match self {
            Base::Url(base) => {
                let url = base
                    .join(name)
                    .with_context(|| format!("joining {} onto {}", name, base))?;
                Ok(Location::Remote(url))
            }
            Base::Dir(dir) => Ok(Location::Local(dir.join(name))),
        }
    }
}

impl Default for Base {
    fn default() -> Self {
        Base::Dir(PathBuf::from("."))
    }
}

/// A resolved resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Local(PathBuf),
    Remote(Url),
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Local(path) => write!(f, "{}", path.display()),
            Location::Remote(url) => write!(f, "{}", url),
        }
    }
}

fn is_http(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Fetch the full text of `name`, resolved against `base`.
///
/// Errors are returned as-is; nothing here retries.
pub async fn fetch_text(client: &Client, base: &Base, name: &str) -> Result<String> {
    match base.resolve(name)? {
        Location::Remote(url) => {
            let text = client
                .get(url.clone())
                .send()
                .await
                .with_context(|| format!("GET {}", url))?
                .error_for_status()
                .with_context(|| format!("GET {}", url))?
                .text()
                .await
                .with_context(|| format!("reading body from {}", url))?;
            Ok(text)
        }
        Location::Local(path) => {
            let bytes = fs::read(&path)
                .await
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}
