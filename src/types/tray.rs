use serde::{Deserialize, Serialize};

use super::GameDetails;

/// Entry in the system tray's quick-launch menu.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrayGame {
    /// Place id the tray launches.
    pub id: u64,
    pub title: String,
}

impl From<&GameDetails> for TrayGame {
    fn from(game: &GameDetails) -> Self {
        Self {
            id: game.root_place_id,
            title: game.name.clone(),
        }
    }
}
