use std::sync::Arc;

use super::call;
use crate::batch::{batched, THUMBNAIL_BATCH_LIMIT};
use crate::commands::*;
use crate::error::Result;
use crate::transport::Invoke;
use crate::types::{
    ClientInfo, FriendStatus, FriendUserInformation, GameDetails, GameMedia, GameServer,
    PlaceDetails, RecommendationsTopic, SearchResult, ServerType, ThumbnailSize, ThumbnailType,
    UserDetails, UserPresence, UserProfileStats,
};

/// Facade for the `roblox-api` backend plugin.
///
/// Each method issues exactly one invoke (except
/// [`RobloxApi::thumbnail_urls_chunked`]) and returns the backend's answer
/// as-is. Nothing is retried or cached here.
#[derive(Clone)]
pub struct RobloxApi {
    transport: Arc<dyn Invoke>,
    thumbnail_chunk_size: usize,
}

impl RobloxApi {
    pub fn new(transport: Arc<dyn Invoke>) -> Self {
        Self {
            transport,
            thumbnail_chunk_size: THUMBNAIL_BATCH_LIMIT,
        }
    }

    /// Overrides how many ids go into one thumbnail call.
    pub fn with_thumbnail_chunk_size(mut self, chunk_size: usize) -> Self {
        self.thumbnail_chunk_size = chunk_size;
        self
    }

    fn transport(&self) -> &dyn Invoke {
        self.transport.as_ref()
    }

    // Session

    pub async fn auth(&self, roblosecurity: impl Into<String>) -> Result<()> {
        let roblosecurity = roblosecurity.into();
        call(self.transport(), Auth { roblosecurity }).await
    }

    pub async fn is_authed(&self) -> Result<bool> {
        call(self.transport(), IsAuthed).await
    }

    /// Marks the session user as online.
    pub async fn update_presence(&self) -> Result<()> {
        call(self.transport(), Presence).await
    }

    pub async fn get_me(&self) -> Result<ClientInfo> {
        call(self.transport(), GetMe).await
    }

    // Users

    pub async fn get_user_details(&self, user_id: u64) -> Result<UserDetails> {
        call(self.transport(), GetUser { user_id }).await
    }

    pub async fn get_user_stats(&self, user_id: u64) -> Result<UserProfileStats> {
        call(self.transport(), GetUserStats { user_id }).await
    }

    pub async fn get_presences(&self, user_ids: Vec<u64>) -> Result<Vec<UserPresence>> {
        call(self.transport(), GetPresences { user_ids }).await
    }

    // Friends

    pub async fn get_friend_status(&self, user_id: u64) -> Result<FriendStatus> {
        call(self.transport(), FriendStatusOf { user_id }).await
    }

    pub async fn get_friends_list(&self) -> Result<Vec<FriendUserInformation>> {
        call(self.transport(), FriendsList).await
    }

    pub async fn get_users_friends_list(&self, user_id: u64) -> Result<Vec<FriendUserInformation>> {
        call(self.transport(), UsersFriendsList { user_id }).await
    }

    pub async fn friend(&self, user_id: u64) -> Result<()> {
        call(self.transport(), Friend { user_id }).await
    }

    pub async fn unfriend(&self, user_id: u64) -> Result<()> {
        call(self.transport(), Unfriend { user_id }).await
    }

    pub async fn accept_friend_request(&self, user_id: u64) -> Result<()> {
        call(self.transport(), AcceptFriendRequest { user_id }).await
    }

    pub async fn decline_friend_request(&self, user_id: u64) -> Result<()> {
        call(self.transport(), DeclineFriendRequest { user_id }).await
    }

    // Discovery

    pub async fn get_recommendations(&self) -> Result<Vec<RecommendationsTopic>> {
        call(self.transport(), Recommendations).await
    }

    pub async fn search(&self, query: impl Into<String>) -> Result<Vec<SearchResult>> {
        let query_string = query.into();
        call(self.transport(), OmniSearch { query_string }).await
    }

    // Games

    pub async fn get_place_details(&self, place_id: u64) -> Result<PlaceDetails> {
        call(self.transport(), PlaceDetailsOf { place_id }).await
    }

    pub async fn get_game_media(&self, universe_id: u64) -> Result<Vec<GameMedia>> {
        call(self.transport(), GameMediaOf { universe_id }).await
    }

    pub async fn get_game_details(&self, universe_id: u64) -> Result<GameDetails> {
        call(self.transport(), GameDetailsOf { universe_id }).await
    }

    /// Fetches one page of servers. Pass the returned cursor back in to get the
    /// next page; a `None` cursor in the response means there are no more.
    pub async fn get_game_servers(
        &self,
        place_id: u64,
        servers_type: ServerType,
        cursor: Option<String>,
    ) -> Result<(Vec<GameServer>, Option<String>)> {
        call(
            self.transport(),
            GameServers {
                place_id,
                servers_type,
                cursor,
            },
        )
        .await
    }

    // Thumbnails

    pub async fn get_avatars_headshots(&self, avatar_ids: Vec<u64>) -> Result<Vec<String>> {
        call(self.transport(), GetHeadshots { avatar_ids }).await
    }

    /// At most [`THUMBNAIL_BATCH_LIMIT`] ids per call; see
    /// [`RobloxApi::thumbnail_urls_chunked`] for longer lists.
    pub async fn get_thumbnails_urls(
        &self,
        ids: Vec<u64>,
        thumbnail_size: ThumbnailSize,
        thumbnail_type: ThumbnailType,
    ) -> Result<Vec<String>> {
        call(
            self.transport(),
            ThumbnailUrlBulk {
                ids,
                thumbnail_size,
                thumbnail_type,
            },
        )
        .await
    }

    /// Thumbnail URLs for any number of ids, split into concurrent
    /// backend-sized calls. URLs come back in the order of `ids`.
    pub async fn thumbnail_urls_chunked(
        &self,
        ids: &[u64],
        thumbnail_size: ThumbnailSize,
        thumbnail_type: ThumbnailType,
    ) -> Result<Vec<String>> {
        let api = self;
        batched(ids, self.thumbnail_chunk_size, move |chunk| {
            api.get_thumbnails_urls(chunk, thumbnail_size, thumbnail_type)
        })
        .await
    }

    pub async fn get_tokens_thumbnails_urls(
        &self,
        tokens: Vec<String>,
        thumbnail_size: ThumbnailSize,
        thumbnail_type: ThumbnailType,
    ) -> Result<Vec<String>> {
        call(
            self.transport(),
            TokenThumbnailUrlBulk {
                tokens,
                thumbnail_size,
                thumbnail_type,
            },
        )
        .await
    }

    // Launching

    pub async fn play_place(&self, place_id: u64) -> Result<Option<GameDetails>> {
        call(self.transport(), OpenPlace { place_id }).await
    }

    /// Joins a specific server instance of a place.
    pub async fn play_server(
        &self,
        place_id: u64,
        game_id: impl Into<String>,
    ) -> Result<Option<GameDetails>> {
        let game_id = game_id.into();
        call(self.transport(), OpenServer { place_id, game_id }).await
    }
}
