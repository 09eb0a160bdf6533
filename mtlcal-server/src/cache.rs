//! Versioned on-disk asset cache.
//!
//! One subdirectory per cache version under the cache root; `CACHE_NAME`
//! is the live version. Install stages the whole precache list and swaps
//! it in; activate prunes every other version. The cache never grows
//! outside install: request interception reads, it does not write.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::origin::Origin;

/// Current cache version. Bump to drop everything previously cached.
pub const CACHE_NAME: &str = "v1";

/// Assets fetched during install. Install is all-or-nothing over this
/// list: one failed fetch and the live version is left untouched.
pub const PRECACHE_ASSETS: [&str; 6] = [
    "/",
    "/index.html",
    "/favicon.ico",
    "/manifest.json",
    "/logo192.png",
    "/logo512.png",
];

#[derive(Clone)]
pub struct AssetCache {
    root: PathBuf,
    name: String,
}

impl AssetCache {
    pub fn new(root: impl Into<PathBuf>, name: &str) -> Self {
        AssetCache {
            root: root.into(),
            name: name.to_string(),
        }
    }

    /// Cache under the platform cache dir (~/.cache/mtlcal on Linux).
    pub fn at_default_root() -> Result<Self> {
        let root = dirs::cache_dir()
            .context("Could not determine cache directory")?
            .join("mtlcal");
        Ok(Self::new(root, CACHE_NAME))
    }

    fn live_dir(&self) -> PathBuf {
        self.root.join(&self.name)
    }

    /// Map a request path to a file name inside a version directory.
    /// "/" is keyed as the index document, so both root entries in the
    /// precache list resolve to the same stored asset.
    fn cache_key(path: &str) -> String {
        let trimmed = path.trim_start_matches('/');
        if trimmed.is_empty() {
            "index.html".to_string()
        } else {
            trimmed.replace('/', "__")
        }
    }

    /// Fetch the whole precache list into a staging directory, then swap
    /// it in as the live version. Returns the number of assets fetched.
    pub async fn install(&self, origin: &Origin) -> Result<usize> {
        let staging = self.root.join(format!("{}.staging", self.name));
        if staging.exists() {
            std::fs::remove_dir_all(&staging)
                .with_context(|| format!("Failed to clear {}", staging.display()))?;
        }
        std::fs::create_dir_all(&staging)
            .with_context(|| format!("Failed to create {}", staging.display()))?;

        if let Err(err) = self.fill(&staging, origin).await {
            let _ = std::fs::remove_dir_all(&staging);
            return Err(err);
        }

        let live = self.live_dir();
        if live.exists() {
            std::fs::remove_dir_all(&live)
                .with_context(|| format!("Failed to clear {}", live.display()))?;
        }
        std::fs::rename(&staging, &live)
            .with_context(|| format!("Failed to promote {}", staging.display()))?;

        Ok(PRECACHE_ASSETS.len())
    }

    async fn fill(&self, staging: &Path, origin: &Origin) -> Result<()> {
        for path in PRECACHE_ASSETS {
            let body = origin
                .fetch_asset(path)
                .await
                .with_context(|| format!("Failed to precache {}", path))?;

            let file = staging.join(Self::cache_key(path));
            std::fs::write(&file, &body)
                .with_context(|| format!("Failed to write {}", file.display()))?;
        }
        Ok(())
    }

    /// Delete every cache version except the live one. Returns the names
    /// of the versions removed.
    pub fn activate(&self) -> Result<Vec<String>> {
        let mut removed = Vec::new();

        if !self.root.exists() {
            return Ok(removed);
        }

        for entry in std::fs::read_dir(&self.root)? {
            let entry = entry?;
            let file_name = entry.file_name().to_string_lossy().to_string();

            if entry.file_type()?.is_dir() && file_name != self.name {
                std::fs::remove_dir_all(entry.path())
                    .with_context(|| format!("Failed to remove {}", entry.path().display()))?;
                removed.push(file_name);
            }
        }

        Ok(removed)
    }

    /// Cached bytes for a request path, if install stored them.
    pub fn lookup(&self, path: &str) -> Option<Vec<u8>> {
        std::fs::read(self.live_dir().join(Self::cache_key(path))).ok()
    }
}
