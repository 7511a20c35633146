use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/urlsize/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlsizeConfig {
    /// Connect timeout in seconds for the header-only request.
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    pub timeout_secs: u64,
    /// Follow redirects at the transport level. The interpreter also trusts
    /// 301-308 statuses, so turning this off still yields a size (of the
    /// redirect page, with the documented caveat).
    pub follow_redirects: bool,
}

impl Default for UrlsizeConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            follow_redirects: true,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlsize")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlsizeConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UrlsizeConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: UrlsizeConfig = toml::from_str(&data)?;
    Ok(cfg)
}
