use serde::{Deserialize, Serialize};

use super::PresenceType;

/// The account the current session is authenticated as.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub user_id: u64,
    pub username: String,
    pub display_name: String,
    pub robux: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub id: u64,
    pub username: String,
    pub display_name: String,
    pub description: String,

    /// ISO 8601 timestamp of account creation.
    pub created_at: String,

    /// Terminated accounts only; temporary bans are not reflected here.
    pub is_terminated: bool,
    pub has_verified_badge: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfileStats {
    pub friends: usize,
    pub followers: usize,
    pub followings: usize,
}

/// Relationship between the session user and someone else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FriendStatus {
    #[default]
    NotFriends,
    Friends,
    RequestSent,
    RequestReceived,
}

/// A friend-list entry, which also carries the friend's coarse presence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FriendUserInformation {
    #[serde(alias = "id")]
    pub user_id: u64,

    #[serde(alias = "name")]
    pub username: String,

    #[serde(alias = "displayName")]
    pub display_name: String,

    #[serde(default)]
    pub description: Option<String>,

    pub created: String,

    pub presence_type: PresenceType,

    #[serde(alias = "isBanned")]
    pub is_terminated: bool,

    pub has_verified_badge: bool,
}
