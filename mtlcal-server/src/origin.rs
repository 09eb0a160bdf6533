//! The upstream origin assets are fetched from.

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use std::fmt;

#[derive(Clone)]
pub struct Origin {
    http: reqwest::Client,
    base_url: String,
}

/// A network response relayed through the intercept handler.
pub struct Relayed {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Vec<u8>,
}

impl Origin {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Origin {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET one asset, failing on any non-success status. Used by the
    /// install step, where a single failure aborts the whole precache.
    pub async fn fetch_asset(&self, path: &str) -> Result<Vec<u8>> {
        let response = self
            .http
            .get(self.url_for(path))
            .send()
            .await
            .with_context(|| format!("Failed to reach origin for {}", path))?;

        if !response.status().is_success() {
            anyhow::bail!("Origin returned {} for {}", response.status(), path);
        }

        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read origin body for {}", path))?;

        Ok(body.to_vec())
    }

    /// Relay a request as-is: status and body pass through, success or not.
    pub async fn relay(&self, path: &str) -> Result<Relayed> {
        let response = self
            .http
            .get(self.url_for(path))
            .send()
            .await
            .with_context(|| format!("Failed to reach origin for {}", path))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body = response
            .bytes()
            .await
            .with_context(|| format!("Failed to read origin body for {}", path))?
            .to_vec();

        Ok(Relayed {
            status,
            content_type,
            body,
        })
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.base_url)
    }
}
