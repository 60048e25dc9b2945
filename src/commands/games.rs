use serde::Serialize;

use super::{Command, Plugin};
use crate::types::{GameDetails, GameMedia, GameServer, PlaceDetails, ServerType};

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceDetailsOf {
    pub place_id: u64,
}

impl Command for PlaceDetailsOf {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "place_details";
    type Output = PlaceDetails;
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMediaOf {
    pub universe_id: u64,
}

impl Command for GameMediaOf {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "game_media";
    type Output = Vec<GameMedia>;
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDetailsOf {
    pub universe_id: u64,
}

impl Command for GameDetailsOf {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "game_details";
    type Output = GameDetails;
}

/// One page of a place's server listing.
///
/// `cursor` is the opaque token from the previous page; the response pairs the
/// page with the next cursor, or `None` once the listing is exhausted.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameServers {
    pub place_id: u64,
    pub servers_type: ServerType,
    pub cursor: Option<String>,
}

impl Command for GameServers {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "game_servers";
    type Output = (Vec<GameServer>, Option<String>);
}

// The launch commands open a `roblox://` URI on the backend side. Older
// backends answer with `null`, newer ones echo the launched game.

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenPlace {
    pub place_id: u64,
}

impl Command for OpenPlace {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "open_place";
    type Output = Option<GameDetails>;
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenServer {
    pub place_id: u64,
    pub game_id: String,
}

impl Command for OpenServer {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "open_server";
    type Output = Option<GameDetails>;
}
