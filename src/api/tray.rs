use std::sync::Arc;

use super::call;
use crate::commands::TrayUpdate;
use crate::error::Result;
use crate::transport::Invoke;
use crate::types::TrayGame;

/// Facade for the system tray integration.
#[derive(Clone)]
pub struct TrayApi {
    transport: Arc<dyn Invoke>,
}

impl TrayApi {
    pub fn new(transport: Arc<dyn Invoke>) -> Self {
        Self { transport }
    }

    /// Replaces the quick-launch entries shown in the tray menu.
    pub async fn set_games(&self, games: Vec<TrayGame>) -> Result<()> {
        call(self.transport.as_ref(), TrayUpdate { games }).await
    }
}
