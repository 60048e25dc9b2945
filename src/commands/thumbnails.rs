use serde::Serialize;

use super::{Command, Plugin};
use crate::types::{ThumbnailSize, ThumbnailType};

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHeadshots {
    pub avatar_ids: Vec<u64>,
}

impl Command for GetHeadshots {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "get_headshots";
    type Output = Vec<String>;
}

/// Thumbnail URLs for up to [`crate::batch::THUMBNAIL_BATCH_LIMIT`] ids.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThumbnailUrlBulk {
    pub ids: Vec<u64>,
    pub thumbnail_size: ThumbnailSize,
    pub thumbnail_type: ThumbnailType,
}

impl Command for ThumbnailUrlBulk {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "thumbnail_url_bulk";
    type Output = Vec<String>;
}

/// Same as [`ThumbnailUrlBulk`] but keyed by player tokens from a server listing.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenThumbnailUrlBulk {
    pub tokens: Vec<String>,
    pub thumbnail_size: ThumbnailSize,
    pub thumbnail_type: ThumbnailType,
}

impl Command for TokenThumbnailUrlBulk {
    const PLUGIN: Plugin = Plugin::RobloxApi;
    const NAME: &'static str = "token_thumbnail_url_bulk";
    type Output = Vec<String>;
}
