use serde::{Deserialize, Serialize};

/// One experience returned by omni search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub universe_id: u64,
    pub root_place_id: u64,
    pub name: String,
    pub description: String,

    pub player_count: usize,
    pub total_up_votes: usize,
    pub total_down_votes: usize,

    pub emphasis: bool,
    pub is_sponsored: bool,

    pub creator_id: u64,
    pub creator_name: String,
    pub creator_has_verified_badge: bool,

    pub minimum_age: i32,
    pub age_recommendation_display_name: String,

    pub content_type: String,
    pub content_id: u64,
}
