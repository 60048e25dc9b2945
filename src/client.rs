use std::sync::Arc;

use crate::api::{RobloxApi, TrayApi};
use crate::config::BridgeConfig;
use crate::error::Result;
use crate::transport::{HttpTransport, Invoke};

/// Entry point for the UI layer. Build one per session and pass it around.
#[derive(Clone)]
pub struct Client {
    roblox: RobloxApi,
    tray: TrayApi,
}

impl Client {
    /// Client talking to the bridge described by `config`.
    pub fn from_config(config: &BridgeConfig) -> Result<Self> {
        let transport = Arc::new(HttpTransport::new(config)?);
        Ok(Self::with_transport(transport, config.thumbnail_chunk_size))
    }

    pub fn with_transport(transport: Arc<dyn Invoke>, thumbnail_chunk_size: usize) -> Self {
        Self {
            roblox: RobloxApi::new(transport.clone()).with_thumbnail_chunk_size(thumbnail_chunk_size),
            tray: TrayApi::new(transport),
        }
    }

    pub fn roblox(&self) -> &RobloxApi {
        &self.roblox
    }

    pub fn tray(&self) -> &TrayApi {
        &self.tray
    }
}
