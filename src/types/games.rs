use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AvatarType {
    MorphToR6,
    MorphToR15,
    #[default]
    PlayerChoice,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameMediaType {
    #[default]
    Image,
    #[serde(alias = "YoutubeVideo")]
    YouTubeVideo,
}

/// Which server listing to page through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServerType {
    #[default]
    Public,
    Friends,
}

/// Owner of a universe, either a user or a group.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameCreator {
    pub id: u64,
    pub name: String,

    /// `"User"` or `"Group"`.
    #[serde(alias = "type")]
    pub creator_type: String,

    #[serde(default, alias = "isRNVAccount")]
    pub is_rnv_account: bool,

    #[serde(default)]
    pub has_verified_badge: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDetails {
    #[serde(alias = "id")]
    pub universe_id: u64,
    pub root_place_id: u64,

    /// Translated name
    pub name: String,
    /// Translated description
    #[serde(default)]
    pub description: Option<String>,

    pub source_name: String,
    pub source_description: String,

    pub creator: GameCreator,

    #[serde(default)]
    pub price: Option<i32>,

    pub allowed_gear_genres: Vec<String>,
    pub allowed_gear_categories: Vec<String>,
    pub is_genre_enforced: bool,
    pub copying_allowed: bool,

    pub playing: u64,
    pub visits: u64,
    pub max_players: u64,
    pub created: String,
    pub updated: String,

    pub universe_avatar_type: AvatarType,

    pub genre: String,
    pub is_all_genre: bool,

    pub is_favorited_by_user: bool,
    pub favorited_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceDetails {
    #[serde(alias = "id")]
    pub place_id: u64,

    pub name: String,
    pub description: String,
    pub source_name: String,
    pub source_description: String,

    pub url: String,

    pub is_playable: bool,
    pub reason_prohibited: String,
    pub price: i32,
    pub image_token: String,

    pub builder: String,
    pub builder_id: u64,
    pub has_verified_badge: bool,

    pub universe_id: u64,
    pub universe_root_place_id: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMedia {
    pub asset_type_id: u64,
    pub asset_type: GameMediaType,
    pub approved: bool,

    #[serde(default)]
    pub image_id: Option<u64>,
    #[serde(default)]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub video_hash: Option<String>,
    #[serde(default)]
    pub video_title: Option<String>,
}

/// A running server instance. Occupancy is a snapshot and may already be stale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameServer {
    pub id: String,
    pub max_players: usize,
    pub playing: usize,

    /// One token per player, usable with the token thumbnail lookup.
    pub player_tokens: Vec<String>,

    pub fps: f32,
    pub ping: u64,
}
