use serde::Serialize;

use super::{Command, Plugin};
use crate::types::{ClientInfo, UserDetails, UserProfileStats};

#[derive(Clone, Copy, Debug, Serialize)]
pub struct GetMe;

impl Command for GetMe {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "get_me";
    type Output = ClientInfo;
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUser {
    pub user_id: u64,
}

impl Command for GetUser {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "get_user";
    type Output = UserDetails;
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserStats {
    pub user_id: u64,
}

impl Command for GetUserStats {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "get_user_stats";
    type Output = UserProfileStats;
}
