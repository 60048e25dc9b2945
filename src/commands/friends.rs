use serde::Serialize;

use super::{Command, Plugin};
use crate::types::{FriendStatus, FriendUserInformation};

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FriendStatusOf {
    pub user_id: u64,
}

impl Command for FriendStatusOf {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "friend_status";
    type Output = FriendStatus;
}

/// Friends of the session user.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct FriendsList;

impl Command for FriendsList {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "friends_list";
    type Output = Vec<FriendUserInformation>;
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersFriendsList {
    pub user_id: u64,
}

impl Command for UsersFriendsList {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "users_friends_list";
    type Output = Vec<FriendUserInformation>;
}

/// Sends a friend request.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Friend {
    pub user_id: u64,
}

impl Command for Friend {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "friend";
    type Output = ();
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Unfriend {
    pub user_id: u64,
}

impl Command for Unfriend {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "unfriend";
    type Output = ();
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptFriendRequest {
    pub user_id: u64,
}

impl Command for AcceptFriendRequest {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "accept_friend_request";
    type Output = ();
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeclineFriendRequest {
    pub user_id: u64,
}

impl Command for DeclineFriendRequest {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "decline_friend_request";
    type Output = ();
}
