//! Spec document loading.
//!
//! A location is either an `http(s)://` URL, a `file://` URL, or a plain
//! filesystem path. Local reads are bounded so an oversized document is
//! rejected instead of being pulled into memory.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, anyhow, bail};
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::config::ValidatorConfig;
use crate::format::SpecFormat;

/// Turns a location into a parsed spec document.
pub trait Loader {
    /// Load and parse the document at `location`.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is unreachable, missing, too large,
    /// or does not hold a well-formed document.
    fn load(&self, location: &str) -> anyhow::Result<Value>;
}

/// Default loader: local files, `file://` URLs and blocking HTTP(S) fetches.
///
/// Holds configuration only. An HTTP client is built per fetch, so loads
/// never share state.
#[derive(Debug, Clone)]
pub struct SpecLoader {
    max_document_size: u64,
    http_timeout: Duration,
}

impl SpecLoader {
    /// Build a loader with the size limit and HTTP timeout from `config`.
    #[must_use]
    pub fn new(config: &ValidatorConfig) -> Self {
        Self {
            max_document_size: config.max_document_size,
            http_timeout: config.http_timeout,
        }
    }

    fn load_path(&self, path: &Path) -> anyhow::Result<Value> {
        debug!(path = %path.display(), "loading spec from file");
        let file = File::open(path)
            .with_context(|| format!("Failed to open spec file {}", path.display()))?;
        let content = read_bounded(file, self.max_document_size)
            .with_context(|| format!("Failed to read spec file {}", path.display()))?;

        // Unknown extensions are tried as JSON, the common case for api-docs.
        SpecFormat::for_path(path)
            .unwrap_or(SpecFormat::Json)
            .parse(&content)
            .with_context(|| format!("Failed to parse spec file {}", path.display()))
    }

    fn load_http(&self, url: &Url) -> anyhow::Result<Value> {
        debug!(%url, "fetching spec over HTTP");
        let client = reqwest::blocking::Client::builder()
            .timeout(self.http_timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let response = client
            .get(url.as_str())
            .send()
            .with_context(|| format!("Failed to fetch {url}"))?;

        let status = response.status();
        if !status.is_success() {
            bail!("Failed to fetch {url}: HTTP {status}");
        }

        let yaml_content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("yaml"));

        let content = read_bounded(response, self.max_document_size)
            .with_context(|| format!("Failed to read response body from {url}"))?;

        let format = if yaml_content_type {
            SpecFormat::Yaml
        } else {
            SpecFormat::for_path(Path::new(url.path())).unwrap_or(SpecFormat::Json)
        };
        format
            .parse(&content)
            .with_context(|| format!("Failed to parse spec at {url}"))
    }
}

impl Default for SpecLoader {
    fn default() -> Self {
        Self::new(&ValidatorConfig::default())
    }
}

impl Loader for SpecLoader {
    fn load(&self, location: &str) -> anyhow::Result<Value> {
        match Url::parse(location) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => self.load_http(&url),
            Ok(url) if url.scheme() == "file" => {
                let path = url.to_file_path().map_err(|()| {
                    anyhow!("file URL must reference an absolute local path: {location}")
                })?;
                self.load_path(&path)
            }
            // Anything else, including Windows drive paths that parse as a
            // one-letter scheme, is a filesystem path.
            _ => self.load_path(Path::new(location)),
        }
    }
}

/// Read at most `max_size` bytes of UTF-8 from `reader`.
///
/// Reads `max_size + 1` bytes through `Read::take` to detect oversized input
/// without an unbounded read.
///
/// # Errors
///
/// Returns an error on I/O failure, if the input exceeds `max_size`, or if
/// it is not valid UTF-8.
pub fn read_bounded(reader: impl Read, max_size: u64) -> anyhow::Result<String> {
    let mut buffer = Vec::new();
    reader
        .take(max_size.saturating_add(1))
        .read_to_end(&mut buffer)?;

    if buffer.len() as u64 > max_size {
        bail!("document exceeds maximum size of {max_size} bytes");
    }

    String::from_utf8(buffer).map_err(|_| anyhow!("document is not valid UTF-8"))
}
