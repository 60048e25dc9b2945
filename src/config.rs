use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::batch::THUMBNAIL_BATCH_LIMIT;
use crate::error::{BridgeError, Result};
use crate::util::expand_tilde;

/// Base URL of the invoke bridge when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "http://ipc.localhost";

fn default_chunk_size() -> usize {
    THUMBNAIL_BATCH_LIMIT
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BridgeConfig {
    pub version: u32,
    pub endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoke_key: Option<String>,
    #[serde(default = "default_chunk_size")]
    pub thumbnail_chunk_size: usize,
    /// No timeout is applied when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            invoke_key: None,
            thumbnail_chunk_size: THUMBNAIL_BATCH_LIMIT,
            request_timeout_secs: None,
        }
    }
}

impl BridgeConfig {
    /// Read a config file. A leading `~` in `path` is expanded.
    pub fn load_from(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(expand_tilde(path))?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.thumbnail_chunk_size == 0 {
            return Err(BridgeError::Custom(
                "thumbnailChunkSize must be at least 1".into(),
            ));
        }
        reqwest::Url::parse(&self.endpoint).map_err(|e| {
            BridgeError::Custom(format!("Invalid endpoint {}: {e}", self.endpoint))
        })?;
        Ok(())
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".rsblox").join("bridge.json"))
}

/// Loads `~/.rsblox/bridge.json`, or `None` if it is missing or unreadable.
pub fn load_config() -> Option<BridgeConfig> {
    let path = config_path()?;
    match BridgeConfig::load_from(&path.to_string_lossy()) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::debug!("Ignoring bridge config at {}: {e}", path.display());
            None
        }
    }
}
