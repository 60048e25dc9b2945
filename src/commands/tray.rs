use serde::Serialize;

use super::{Command, Plugin};
use crate::types::TrayGame;

/// Replaces the tray's quick-launch menu.
#[derive(Clone, Debug, Serialize)]
pub struct TrayUpdate {
    pub games: Vec<TrayGame>,
}

impl Command for TrayUpdate {
    const PLUGIN: Plugin = Plugin::TrayApi;
    const NAME: &'static str = "tray_update";
    type Output = ();
}
