use serde::Serialize;

use super::{Command, Plugin};
use crate::types::{RecommendationsTopic, SearchResult, UserPresence};

/// Hands the `.ROBLOSECURITY` cookie to the backend. The value is forwarded, never parsed.
#[derive(Clone, Debug, Serialize)]
pub struct Auth {
    pub roblosecurity: String,
}

impl Command for Auth {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "auth";
    type Output = ();
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct IsAuthed;

impl Command for IsAuthed {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "is_authed";
    type Output = bool;
}

/// Registers the session user as online.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Presence;

impl Command for Presence {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "presence";
    type Output = ();
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetPresences {
    pub user_ids: Vec<u64>,
}

impl Command for GetPresences {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "get_presences";
    type Output = Vec<UserPresence>;
}

#[derive(Clone, Copy, Debug, Serialize)]
pub struct Recommendations;

impl Command for Recommendations {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "recommendations";
    type Output = Vec<RecommendationsTopic>;
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OmniSearch {
    pub query_string: String,
}

impl Command for OmniSearch {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "omni_search";
    type Output = Vec<SearchResult>;
}
