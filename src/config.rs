use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub store: StoreConfig,
}

/// Connection settings for the hosted event store.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Project base URL, e.g. "https://xyzcompany.supabase.co"
    pub url: String,
    /// Anon API key. Sent as both `apikey` and bearer token.
    pub key: String,
}

/// Get the config file path (~/.config/mtlcal/config.toml)
pub fn config_path() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .context("Could not determine config directory")?
        .join("mtlcal");
    Ok(config_dir.join("config.toml"))
}

/// Load store credentials from the environment or the config file.
///
/// `MTLCAL_STORE_URL` / `MTLCAL_STORE_KEY` take precedence so deployments
/// can inject credentials without a config file.
pub fn load_config() -> Result<Config> {
    if let (Ok(url), Ok(key)) = (
        std::env::var("MTLCAL_STORE_URL"),
        std::env::var("MTLCAL_STORE_KEY"),
    ) {
        return Ok(Config {
            store: StoreConfig { url, key },
        });
    }

    let path = config_path()?;

    if !path.exists() {
        anyhow::bail!(
            "Config file not found at {}\n\n\
            Create it with your event store credentials:\n\n\
            [store]\n\
            url = \"https://<project>.supabase.co\"\n\
            key = \"<anon key>\"\n\n\
            or set MTLCAL_STORE_URL and MTLCAL_STORE_KEY.",
            path.display()
        );
    }

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    parse_config(&contents)
        .with_context(|| format!("Failed to parse config file at {}", path.display()))
}

fn parse_config(contents: &str) -> Result<Config> {
    Ok(toml::from_str(contents)?)
}
