use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable that overrides `docs_host` when set and non-empty.
pub const DOCS_HOST_ENV: &str = "PUBLIC_DOCS_HOST";

const DEFAULT_DOCS_HOST: &str = "http://localhost:8000";

/// What to do when the documentation host cannot be reached at all
/// (DNS failure, refused connection, timeout). HTTP error statuses always
/// produce the not-found page regardless of this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFailurePolicy {
    /// Surface the transport error to the caller.
    #[default]
    Propagate,
    /// Treat the failure like a missing page.
    Fallback,
}

/// Global configuration loaded from `~/.config/docpage/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocpageConfig {
    /// Base address of the host serving `/generated-docs/`, e.g. `https://docs.example.com`.
    pub docs_host: String,
    /// Transport failure handling; if missing, errors propagate.
    #[serde(default)]
    pub network_failure: Option<NetworkFailurePolicy>,
    /// Optional connect timeout in seconds (None = libcurl default).
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Optional total request timeout in seconds (None = no timeout).
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for DocpageConfig {
    fn default() -> Self {
        Self {
            docs_host: DEFAULT_DOCS_HOST.to_string(),
            network_failure: None,
            connect_timeout_secs: None,
            timeout_secs: None,
        }
    }
}

impl DocpageConfig {
    pub fn network_failure_policy(&self) -> NetworkFailurePolicy {
        self.network_failure.unwrap_or_default()
    }

    pub fn connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout_secs.map(Duration::from_secs)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Replace `docs_host` with `value` when it is present and non-empty.
    pub fn apply_docs_host_override(&mut self, value: Option<String>) {
        if let Some(host) = value.filter(|h| !h.trim().is_empty()) {
            tracing::debug!("docs_host overridden: {}", host);
            self.docs_host = host;
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docpage")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DocpageConfig> {
    let path = config_path()?;
    load_or_init_at(&path)
}

/// Like [`load_or_init`] but for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<DocpageConfig> {
    if !path.exists() {
        let default_cfg = DocpageConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: DocpageConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
