use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Encodings tried in order when picking a track's stream URL.
pub const DEFAULT_PREFERRED_ENCODINGS: &[&str] =
    &["mp3-320", "mp3-v0", "mp3-256", "mp3-192", "mp3-160", "mp3-128"];

/// Global configuration loaded from `~/.config/bcdl/config.toml`.
///
/// Every key is optional in the file; missing keys take the defaults below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BcdlConfig {
    /// Directory under which `<artist>/<album>/` is created.
    pub download_root: PathBuf,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
    /// File map keys in order of preference (first present wins).
    pub preferred_encodings: Vec<String>,
    /// Optional connect timeout in seconds (None = wait indefinitely).
    pub connect_timeout_secs: Option<u64>,
    /// Maximum number of redirects followed per request.
    pub max_redirections: u32,
}

impl Default for BcdlConfig {
    fn default() -> Self {
        Self {
            download_root: PathBuf::from("."),
            user_agent: concat!("bcdl/", env!("CARGO_PKG_VERSION")).to_string(),
            preferred_encodings: DEFAULT_PREFERRED_ENCODINGS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            connect_timeout_secs: None,
            max_redirections: 10,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("bcdl")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<BcdlConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but for an explicit config file path.
pub fn load_or_init_at(path: &Path) -> Result<BcdlConfig> {
    if !path.exists() {
        let default_cfg = BcdlConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: BcdlConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
